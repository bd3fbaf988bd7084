/// User actions that can be performed on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop scanning and show the report
    Quit,
    /// No action (for tick events)
    Tick,
}
