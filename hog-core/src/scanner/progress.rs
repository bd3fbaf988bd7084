use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::topk::FileObservation;

/// Message from the scan thread to the dashboard
#[derive(Debug, Clone)]
pub enum ScanMessage {
    /// Progress update
    Progress(ScanSnapshot),
    /// Scan completed
    Completed,
    /// Scan was cancelled
    Cancelled,
    /// Scan could not start
    Error(String),
}

/// Immutable view of a scan in progress
#[derive(Debug, Clone)]
pub struct ScanSnapshot {
    /// Number of regular files counted
    pub files_scanned: u64,
    /// Occupied bytes of all counted files
    pub bytes_total: u64,
    /// Entries that could not be read
    pub denied: u64,
    /// Most recently counted file
    pub current_path: Option<PathBuf>,
    /// When the scan started
    pub started_at: Instant,
    /// Time spent when the snapshot was taken
    pub elapsed: Duration,
    /// Refresh counter, drives the activity bar
    pub phase: usize,
    /// Largest files so far, largest first
    pub top: Vec<FileObservation>,
    /// Set on the last snapshot of a scan
    pub finished: bool,
}

impl ScanSnapshot {
    pub fn empty(started_at: Instant) -> Self {
        Self {
            files_scanned: 0,
            bytes_total: 0,
            denied: 0,
            current_path: None,
            started_at,
            elapsed: Duration::ZERO,
            phase: 0,
            top: Vec::new(),
            finished: false,
        }
    }
}

/// Final result of a scan
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub top: Vec<FileObservation>,
    pub files_scanned: u64,
    pub bytes_total: u64,
    pub denied: u64,
    pub elapsed: Duration,
    /// Stopped early; counts cover only what was visited
    pub cancelled: bool,
}

impl ScanReport {
    /// No regular file was counted. A zero-sized top list alone does not make
    /// a report empty.
    pub fn is_empty(&self) -> bool {
        self.files_scanned == 0
    }
}
