use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use hog_core::ScanSnapshot;

use super::bar_chart::{activity_width, full_bar, render_activity_bar};
use super::text::truncate_start;
use super::theme::Theme;

/// Indeterminate activity bar. Total work is unknown, so this shows motion,
/// not completion, until the scan is done.
pub struct ActivityBar<'a> {
    phase: usize,
    done: bool,
    theme: &'a Theme,
}

impl<'a> ActivityBar<'a> {
    pub fn new(phase: usize, done: bool, theme: &'a Theme) -> Self {
        Self { phase, done, theme }
    }
}

impl Widget for ActivityBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height == 0 {
            return;
        }

        let width = activity_width(area.width).min(area.width as usize - 2);
        let (bar, color) = if self.done {
            (full_bar(width), self.theme.green)
        } else {
            (render_activity_bar(self.phase, width), self.theme.blue)
        };

        let border = Style::default().fg(self.theme.border);
        buf.set_string(area.x, area.y, "[", border);
        buf.set_string(area.x + 1, area.y, &bar, Style::default().fg(color));
        buf.set_string(area.x + 1 + width as u16, area.y, "]", border);
    }
}

/// Path currently being inspected
pub struct CurrentPath<'a> {
    snapshot: &'a ScanSnapshot,
    done: bool,
    theme: &'a Theme,
}

impl<'a> CurrentPath<'a> {
    pub fn new(snapshot: &'a ScanSnapshot, done: bool, theme: &'a Theme) -> Self {
        Self {
            snapshot,
            done,
            theme,
        }
    }
}

impl Widget for CurrentPath<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label = if self.done { "Last file:" } else { "Scanning:" };
        buf.set_stringn(
            area.x,
            area.y,
            label,
            area.width as usize,
            Style::default().fg(self.theme.fg),
        );

        if area.height < 2 {
            return;
        }

        if let Some(path) = &self.snapshot.current_path {
            let path_str = path.to_string_lossy();
            let display_path = truncate_start(&path_str, area.width as usize);
            buf.set_stringn(
                area.x,
                area.y + 1,
                &display_path,
                area.width as usize,
                Style::default().fg(self.theme.fg_dim),
            );
        }
    }
}
