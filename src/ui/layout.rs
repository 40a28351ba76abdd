use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Screen content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        content: chunks[0],
        status_bar: chunks[1],
    }
}

pub struct DiagnosisLayout {
    pub brand: Rect,
    pub title: Rect,
    pub progress: Rect,
    pub error: Rect,
    pub body: Rect,
    pub buttons: Rect,
}

/// Centered column, at most 72 cells wide.
pub fn compute_diagnosis_layout(area: Rect, show_error: bool) -> DiagnosisLayout {
    let width = area.width.min(72);
    let column = Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                              // Brand line
            Constraint::Length(1),                              // Step title
            Constraint::Length(1),                              // Progress segments
            Constraint::Length(if show_error { 3 } else { 0 }), // Error banner
            Constraint::Min(5),                                 // Step body
            Constraint::Length(1),                              // Button hints
        ])
        .spacing(1)
        .split(column);

    DiagnosisLayout {
        brand: chunks[0],
        title: chunks[1],
        progress: chunks[2],
        error: chunks[3],
        body: chunks[4],
        buttons: chunks[5],
    }
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}
