use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub struct AppLayout {
    pub heading: Rect,
    pub input_row: Rect,
    pub output_pane: Rect,
    pub button_row: Rect,
    pub history_panel: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, show_history: bool) -> AppLayout {
    // Main vertical split: heading | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Min(9),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let heading = main_chunks[0];
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    // Horizontal: calculator column | gap | history panel
    let (calculator, history_panel) = if show_history {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .spacing(1)
            .constraints([
                Constraint::Min(40),    // Calculator column
                Constraint::Length(26), // History panel
            ])
            .split(content);
        (h_chunks[0], h_chunks[1])
    } else {
        (content, Rect::default())
    };

    // Calculator column, centered vertically: inputs | result | button
    let calc_chunks = Layout::default()
        .direction(Direction::Vertical)
        .flex(Flex::Center)
        .spacing(1)
        .constraints([
            Constraint::Length(3), // Operand fields and operator
            Constraint::Length(3), // Result / warning pane
            Constraint::Length(1), // Calculate button
        ])
        .split(calculator);

    let input_row = calc_chunks[0];
    let output_pane = calc_chunks[1];
    let button_row = calc_chunks[2];

    AppLayout {
        heading,
        input_row,
        output_pane,
        button_row,
        history_panel,
        status_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_panel_sized_when_shown() {
        let layout = compute_layout(Rect::new(0, 0, 100, 30), true);
        assert_eq!(layout.history_panel.width, 26);
        assert_eq!(layout.heading.height, 1);
        assert_eq!(layout.status_bar.height, 1);
    }

    #[test]
    fn test_history_panel_collapsed_when_hidden() {
        let layout = compute_layout(Rect::new(0, 0, 100, 30), false);
        assert_eq!(layout.history_panel.width, 0);
        // Calculator column reclaims the full content width
        assert_eq!(layout.input_row.width, 100);
    }
}
