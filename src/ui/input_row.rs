use crate::app::state::{AppState, FocusPanel, Slot};
use crate::ui::op_glyph;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(2)
        .constraints([
            Constraint::Min(12),   // Operand A
            Constraint::Length(7), // Operator
            Constraint::Min(12),   // Operand B
        ])
        .split(area);

    render_operand(frame, chunks[0], state, Slot::A);
    render_operator(frame, chunks[1], state);
    render_operand(frame, chunks[2], state, Slot::B);
}

fn render_operand(frame: &mut Frame, area: Rect, state: &AppState, slot: Slot) {
    let (title, field, panel) = match slot {
        Slot::A => (" A ", &state.a, FocusPanel::OperandA),
        Slot::B => (" B ", &state.b, FocusPanel::OperandB),
    };
    let focused = state.focus == panel;
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };
    let title_style = if focused {
        Theme::title_focused()
    } else {
        Theme::title()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .border_type(border_type)
        .style(bg)
        .padding(Padding::horizontal(1))
        .title(Span::styled(title, title_style));
    let inner = block.inner(area);

    let paragraph = Paragraph::new(field.text.as_str())
        .style(Theme::input_text())
        .block(block);
    frame.render_widget(paragraph, area);

    if focused {
        // Cursor tracks the edit position, pinned inside the field
        let cursor_x =
            inner.x + UnicodeWidthStr::width(&field.text[..field.cursor]) as u16;
        let cursor_x = cursor_x.min(inner.right().saturating_sub(1));
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

fn render_operator(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Operator;
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };
    let title_style = if focused {
        Theme::title_focused()
    } else {
        Theme::title()
    };

    let glyph = op_glyph(state, state.op);
    let text = if focused {
        format!("‹{}›", glyph)
    } else {
        format!(" {} ", glyph)
    };

    let paragraph = Paragraph::new(text)
        .style(Theme::operator_glyph())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .border_type(border_type)
                .style(bg)
                .title(Span::styled(" Op ", title_style)),
        );
    frame.render_widget(paragraph, area);
}
