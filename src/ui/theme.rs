use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(18, 22, 30);
    pub const BG_SURFACE: Color = Color::Rgb(26, 32, 44);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_BLUE: Color = Color::Rgb(37, 99, 235);
    pub const ACCENT_GREEN: Color = Color::Rgb(90, 210, 130);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const ACCENT_RED: Color = Color::Rgb(220, 80, 80);
    pub const TEXT_PRIMARY: Color = Color::Rgb(225, 230, 240);
    pub const TEXT_SECONDARY: Color = Color::Rgb(140, 150, 170);
    pub const BORDER_DIM: Color = Color::Rgb(60, 70, 90);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn message_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn placeholder() -> Style {
        Style::default()
            .fg(Self::TEXT_SECONDARY)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn checked_button() -> Style {
        Style::default().fg(Self::BG_DARK).bg(Self::ACCENT_GREEN)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn disabled() -> Style {
        Style::default()
            .fg(Self::BORDER_DIM)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn error_banner() -> Style {
        Style::default().fg(Self::ACCENT_RED)
    }

    pub fn progress_done() -> Style {
        Style::default().fg(Self::ACCENT_BLUE)
    }

    pub fn progress_todo() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Color::DarkGray)
    }
}
