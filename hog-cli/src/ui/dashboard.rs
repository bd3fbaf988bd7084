use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::app::{AppState, DashboardMode};

use super::footer::Footer;
use super::header::Header;
use super::layout::AppLayout;
use super::progress::{ActivityBar, CurrentPath};
use super::theme::Theme;
use super::top_files_view::TopFilesView;

/// Whole-screen scan dashboard
pub struct DashboardView<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> DashboardView<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for DashboardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.bg));

        let layout = AppLayout::new(area);
        let done = self.state.mode == DashboardMode::Done;
        let snapshot = &self.state.snapshot;

        Header::new(self.state, self.theme).render(layout.header, buf);
        ActivityBar::new(snapshot.phase, done, self.theme).render(layout.activity, buf);
        CurrentPath::new(snapshot, done, self.theme).render(layout.current, buf);
        TopFilesView::new(&snapshot.top, self.theme).render(layout.table, buf);
        Footer::new(self.state.mode, self.theme)
            .with_error(self.state.error_message.as_deref())
            .render(layout.footer, buf);
    }
}
