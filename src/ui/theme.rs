use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
pub const ACCENT_ROSE: Color = Color::Rgb(225, 110, 130);

pub const TEXT_PRIMARY: Color = Color::Rgb(220, 223, 228);
pub const TEXT_SECONDARY: Color = Color::Rgb(150, 155, 165);
pub const TEXT_MUTED: Color = Color::Rgb(100, 105, 115);

pub const BG_ELEVATED: Color = Color::Rgb(30, 33, 39);

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn panel_bg() -> Style {
        Style::default()
    }

    pub fn panel_bg_focused() -> Style {
        Style::default().bg(BG_ELEVATED)
    }

    pub fn title() -> Style {
        Style::default().fg(TEXT_SECONDARY)
    }

    pub fn title_focused() -> Style {
        Style::default()
            .fg(ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(TEXT_SECONDARY)
    }

    pub fn input_text() -> Style {
        Style::default().fg(TEXT_PRIMARY)
    }

    pub fn operator_glyph() -> Style {
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn result_value() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning() -> Style {
        Style::default()
            .fg(ACCENT_ROSE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default().fg(TEXT_PRIMARY)
    }

    pub fn button_disabled() -> Style {
        Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM)
    }

    pub fn history_entry() -> Style {
        Style::default().fg(TEXT_PRIMARY)
    }

    pub fn history_empty() -> Style {
        Style::default().fg(TEXT_MUTED)
    }

    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(ACCENT_TEAL)
    }

    pub fn scrollbar_track() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_tag() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }

    pub fn policy_eager() -> Style {
        Style::default().fg(ACCENT_TEAL).bg(Color::DarkGray)
    }

    pub fn policy_on_demand() -> Style {
        Style::default().fg(ACCENT_AMBER).bg(Color::DarkGray)
    }
}
