mod bar_chart;
mod dashboard;
mod footer;
mod header;
mod layout;
mod progress;
mod text;
mod theme;
mod top_files_view;

pub use dashboard::DashboardView;
pub use theme::Theme;
