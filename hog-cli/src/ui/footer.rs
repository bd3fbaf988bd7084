use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::app::DashboardMode;

use super::text::truncate_end;
use super::theme::Theme;

/// Footer widget showing the quit hint or the finished marker
pub struct Footer<'a> {
    mode: DashboardMode,
    error: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    pub fn new(mode: DashboardMode, theme: &'a Theme) -> Self {
        Self {
            mode,
            error: None,
            theme,
        }
    }

    pub fn with_error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as usize;
        let right = area.x + area.width;
        let key_style = Style::default()
            .fg(self.theme.fg)
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(self.theme.fg_dim);

        let x = match self.mode {
            DashboardMode::Running => {
                let (x, _) = buf.set_stringn(area.x, area.y, "q", width, key_style);
                let remaining = right.saturating_sub(x + 1) as usize;
                if remaining == 0 {
                    return;
                }
                buf.set_stringn(x + 1, area.y, "Quit", remaining, desc_style).0
            }
            DashboardMode::Finalizing => {
                buf.set_stringn(area.x, area.y, "Finishing...", width, desc_style)
                    .0
            }
            DashboardMode::Done => {
                let done_style = Style::default()
                    .fg(self.theme.green)
                    .add_modifier(Modifier::BOLD);
                buf.set_stringn(area.x, area.y, "Done.", width, done_style).0
            }
        };

        // Error on the right, cut to whatever is left
        if let Some(error) = self.error {
            let available = right.saturating_sub(x + 3) as usize;
            if available == 0 {
                return;
            }
            let message = truncate_end(error, available);
            let error_x = right.saturating_sub(message.chars().count() as u16);
            buf.set_stringn(
                error_x,
                area.y,
                &message,
                available,
                Style::default().fg(self.theme.red),
            );
        }
    }
}
