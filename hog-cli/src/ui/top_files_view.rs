use hog_core::{FileObservation, format_size};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::text::truncate_start;
use super::theme::Theme;

// Column widths
const RANK_WIDTH: usize = 4;
const SIZE_WIDTH: usize = 10;
const GAP: usize = 2;

/// Table of the largest files found so far
pub struct TopFilesView<'a> {
    entries: &'a [FileObservation],
    theme: &'a Theme,
}

impl<'a> TopFilesView<'a> {
    pub fn new(entries: &'a [FileObservation], theme: &'a Theme) -> Self {
        Self { entries, theme }
    }
}

/// One table row; the path keeps its tail when it has to be cut
pub fn format_row(rank: usize, entry: &FileObservation, width: usize) -> String {
    let path_width = width.saturating_sub(RANK_WIDTH + SIZE_WIDTH + 2 * GAP);
    let path = truncate_start(&entry.path.to_string_lossy(), path_width);
    format!(
        "{:>rw$}{:gap$}{:>sw$}{:gap$}{}",
        rank,
        "",
        format_size(entry.occupied_bytes),
        "",
        path,
        rw = RANK_WIDTH,
        sw = SIZE_WIDTH,
        gap = GAP,
    )
}

impl Widget for TopFilesView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as usize;
        let title = format!(
            "Top {} largest files (occupied space):",
            self.entries.len()
        );
        buf.set_stringn(
            area.x,
            area.y,
            &title,
            width,
            Style::default()
                .fg(self.theme.fg)
                .add_modifier(Modifier::BOLD),
        );

        if area.height < 2 {
            return;
        }

        let heading = format!(
            "{:>rw$}{:gap$}{:>sw$}{:gap$}Path",
            "#",
            "",
            "Size",
            "",
            rw = RANK_WIDTH,
            sw = SIZE_WIDTH,
            gap = GAP,
        );
        buf.set_stringn(
            area.x,
            area.y + 1,
            &heading,
            width,
            Style::default().fg(self.theme.fg_muted),
        );

        if self.entries.is_empty() {
            if area.height > 2 {
                buf.set_stringn(
                    area.x,
                    area.y + 2,
                    "No files yet",
                    width,
                    Style::default().fg(self.theme.fg_dim),
                );
            }
            return;
        }

        let rows = (area.height - 2) as usize;
        for (i, entry) in self.entries.iter().take(rows).enumerate() {
            let y = area.y + 2 + i as u16;
            let row = format_row(i + 1, entry, width);
            buf.set_stringn(area.x, y, &row, width, Style::default().fg(self.theme.fg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(path: &str, size: u64) -> FileObservation {
        FileObservation {
            path: PathBuf::from(path),
            occupied_bytes: size,
        }
    }

    #[test]
    fn test_format_row_aligns_size() {
        let row = format_row(1, &entry("/data/big.iso", 1536), 80);
        assert_eq!(row, "   1     1.50 KB  /data/big.iso");
    }

    #[test]
    fn test_format_row_truncates_path_to_width() {
        let long = format!("/{}", "x".repeat(300));
        let row = format_row(3, &entry(&long, 10), 40);
        assert_eq!(row.chars().count(), 40);
        assert!(row.contains("..."));
    }

    #[test]
    fn test_format_row_narrow_width() {
        let row = format_row(12, &entry("/a/b", 1), 5);
        assert!(row.starts_with("  12"));
    }
}
