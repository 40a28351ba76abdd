mod diagnose;
mod landing;
mod layout;
mod legal;
pub mod primitives;
mod result;
mod status_bar;
mod theme;

use crate::app::state::{AppState, Screen};
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(theme::Theme::BG_DARK)),
        app_layout.content,
    );

    match &state.screen {
        Screen::Landing => landing::render(frame, app_layout.content, state),
        Screen::Diagnosis(session) => {
            diagnose::render(frame, app_layout.content, state, session)
        }
        Screen::Legal(page) => legal::render(frame, app_layout.content, *page),
    }
    status_bar::render(frame, app_layout.status_bar, state);
}
