use hog_core::{format_count, format_size};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::app::{AppState, DashboardMode};

use super::text::truncate_start;
use super::theme::Theme;

/// Braille spinner characters
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Header widget: status glyph, title and running counters
pub struct Header<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (glyph, glyph_style) = match self.state.mode {
            DashboardMode::Done => (
                '✓',
                Style::default()
                    .fg(self.theme.green)
                    .add_modifier(Modifier::BOLD),
            ),
            _ => (
                SPINNER[self.state.spinner_frame % SPINNER.len()],
                Style::default()
                    .fg(self.theme.blue)
                    .add_modifier(Modifier::BOLD),
            ),
        };

        let right = area.x + area.width;
        let mut x = area.x;

        let (next_x, _) = buf.set_stringn(x, area.y, glyph.to_string(), 1, glyph_style);
        x = next_x + 1;
        if x >= right {
            return;
        }

        let title_style = Style::default()
            .fg(self.theme.blue)
            .add_modifier(Modifier::BOLD);
        let (next_x, _) = buf.set_stringn(x, area.y, "HOG", (right - x) as usize, title_style);
        x = next_x + 1;
        if x >= right {
            return;
        }

        // Root path gets at most a third of the line
        let root = self.state.root_path.to_string_lossy();
        let root_width = ((right - x) as usize / 3).max(1);
        let (next_x, _) = buf.set_stringn(
            x,
            area.y,
            truncate_start(&root, root_width),
            root_width,
            Style::default().fg(self.theme.fg),
        );
        x = next_x;
        if x >= right {
            return;
        }

        let snapshot = &self.state.snapshot;
        let stats = format!(
            " │ Files: {}  Occupied: {}  Denied: {}  Time: {:.1}s",
            format_count(snapshot.files_scanned),
            format_size(snapshot.bytes_total),
            format_count(snapshot.denied),
            self.state.elapsed().as_secs_f64(),
        );
        buf.set_stringn(
            x,
            area.y,
            &stats,
            (right - x) as usize,
            Style::default().fg(self.theme.fg_dim),
        );
    }
}
