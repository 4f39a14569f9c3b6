use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, List, ListItem, Padding, Paragraph, Scrollbar, ScrollbarOrientation,
    ScrollbarState,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::History;
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
        .title(Span::styled(
            format!(" History ({}) ", state.history.len()),
            title_style,
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.history.is_empty() {
        let empty = Paragraph::new("—").style(Theme::history_empty());
        frame.render_widget(empty, inner);
        return;
    }

    let entries = state.history.entries();
    let total = entries.len();
    let height = inner.height as usize;

    // Offset counts from the bottom; newest entries stay pinned while it is 0
    let end = total.saturating_sub(state.history_scroll);
    let start = end.saturating_sub(height);

    let items: Vec<ListItem> = entries[start..end]
        .iter()
        .map(|entry| ListItem::new(entry.to_string()).style(Theme::history_entry()))
        .collect();
    frame.render_widget(List::new(items), inner);

    if total > height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .thumb_symbol("┃")
            .track_symbol(Some("│"))
            .thumb_style(Theme::scrollbar_thumb())
            .track_style(Theme::scrollbar_track());
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(height)).position(start);
        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}
