use crate::app::state::{AppState, Validity};
use crate::calc::format::group_digits;
use crate::ui::op_glyph;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    // Exactly one of the result row / warning row is ever shown
    let (title, line) = match state.validity {
        Validity::Valid => (" Result ", result_line(state)),
        Validity::Invalid(err) => (
            " Warning ",
            Line::from(Span::styled(err.to_string(), Theme::warning())),
        ),
    };

    let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border())
            .border_type(Theme::border_type())
            .padding(Padding::horizontal(1))
            .title(Span::styled(title, Theme::title())),
    );
    frame.render_widget(paragraph, area);
}

fn result_line(state: &AppState) -> Line<'static> {
    let ev = state.output;
    let glyph = op_glyph(state, ev.op);
    let (a, b, value) = if state.config.ui.grouped_numbers {
        (
            group_digits(ev.a),
            group_digits(ev.b),
            group_digits(ev.value),
        )
    } else {
        (ev.a.to_string(), ev.b.to_string(), ev.value.to_string())
    };
    Line::from(vec![
        Span::styled(format!("{} {} {} = ", a, glyph, b), Theme::label()),
        Span::styled(value, Theme::result_value()),
    ])
}
