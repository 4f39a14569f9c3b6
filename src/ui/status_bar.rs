use crate::app::state::{AppState, FocusPanel};
use crate::config::RecomputePolicy;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Active recompute policy
    let (policy_label, policy_style) = match state.policy {
        RecomputePolicy::Eager => (" [EAGER] ", Theme::policy_eager()),
        RecomputePolicy::OnDemand => (" [ON-DEMAND] ", Theme::policy_on_demand()),
    };
    parts.push(Span::styled(policy_label, policy_style));

    // Key hints
    parts.push(Span::styled(
        " Tab focus | Enter calculate | Ctrl+R randomize | F2 policy | F3 history | Ctrl+C quit ",
        Theme::status_bar(),
    ));

    // Focus indicator
    let focus_name = match state.focus {
        FocusPanel::OperandA => "A",
        FocusPanel::Operator => "OP",
        FocusPanel::OperandB => "B",
        FocusPanel::History => "HISTORY",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 4);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Theme::status_tag(),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
