mod button_row;
mod history_panel;
mod input_row;
mod layout;
mod output_pane;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use crate::calc::Op;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.show_history);

    render_heading(frame, app_layout.heading);
    input_row::render(frame, app_layout.input_row, state);
    output_pane::render(frame, app_layout.output_pane, state);
    button_row::render(frame, app_layout.button_row, state);
    if state.show_history {
        history_panel::render(frame, app_layout.history_panel, state);
    }
    status_bar::render(frame, app_layout.status_bar, state);
}

/// Operator glyph for display, honoring the unicode_operators setting.
pub(crate) fn op_glyph(state: &AppState, op: Op) -> &'static str {
    if state.config.ui.unicode_operators {
        op.glyph()
    } else {
        op.ascii()
    }
}

fn render_heading(frame: &mut Frame, area: Rect) {
    let heading = Paragraph::new(Span::styled("tallypad", theme::Theme::heading()))
        .alignment(Alignment::Center);
    frame.render_widget(heading, area);
}
