use std::path::PathBuf;
use std::time::{Duration, Instant};

use hog_core::ScanSnapshot;

/// Dashboard lifecycle. Moves forward only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardMode {
    /// Scan in progress, refreshing
    Running,
    /// Scan stopping, waiting for the final report
    Finalizing,
    /// Final frame drawn
    Done,
}

/// Application state
pub struct AppState {
    /// Current mode
    pub mode: DashboardMode,
    /// Root path being scanned
    pub root_path: PathBuf,
    /// Latest snapshot from the scanner
    pub snapshot: ScanSnapshot,
    /// Spinner frame for animation
    pub spinner_frame: usize,
    /// Error message to display
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new(root_path: PathBuf) -> Self {
        Self {
            mode: DashboardMode::Running,
            root_path,
            snapshot: ScanSnapshot::empty(Instant::now()),
            spinner_frame: 0,
            error_message: None,
        }
    }

    /// Replace the displayed snapshot
    pub fn update_snapshot(&mut self, snapshot: ScanSnapshot) {
        if self.mode != DashboardMode::Done {
            self.snapshot = snapshot;
        }
    }

    /// Advance spinner animation
    pub fn tick_spinner(&mut self) {
        if self.mode == DashboardMode::Running {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    /// Quit key, walker exhausted, or interrupt
    pub fn begin_finalizing(&mut self) {
        if self.mode == DashboardMode::Running {
            self.mode = DashboardMode::Finalizing;
        }
    }

    /// The final frame is about to be drawn
    pub fn finish(&mut self) {
        if self.mode == DashboardMode::Finalizing {
            self.mode = DashboardMode::Done;
        }
    }

    pub fn is_running(&self) -> bool {
        self.mode == DashboardMode::Running
    }

    /// Live clock while running, frozen at the scanner's figure afterwards
    pub fn elapsed(&self) -> Duration {
        if self.snapshot.finished {
            self.snapshot.elapsed
        } else {
            self.snapshot.started_at.elapsed()
        }
    }
}
