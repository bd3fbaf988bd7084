use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Dashboard layout, top to bottom
pub struct AppLayout {
    pub header: Rect,
    pub activity: Rect,
    pub current: Rect,
    pub table: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(1),
                Constraint::Length(1), // Activity bar
                Constraint::Length(1),
                Constraint::Length(2), // Current path
                Constraint::Length(1),
                Constraint::Min(0),    // Top files
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Self {
            header: chunks[0],
            activity: chunks[2],
            current: chunks[4],
            table: chunks[6],
            footer: chunks[7],
        }
    }
}
