use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let calculate_style = if state.calculate_enabled() {
        Theme::button()
    } else {
        Theme::button_disabled()
    };

    let line = Line::from(vec![
        Span::styled("[ Calculate ]", calculate_style),
        Span::raw("   "),
        Span::styled("[ Randomize ]", Theme::button()),
    ]);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
