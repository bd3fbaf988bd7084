use std::fs;
use std::io;
use std::path::PathBuf;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use tracing::info;

use super::cancel::CancellationToken;
use super::identity::{device_id, occupied_size};
use super::progress::{ScanMessage, ScanReport, ScanSnapshot};
use super::walker::{ExclusionSet, VolumeWalker};
use crate::error::{HogError, Result};
use crate::topk::BoundedTopK;

/// Scanner configuration
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// How many of the largest files to keep
    pub top_n: usize,
    /// Emit a snapshot after this many files
    pub refresh_every: u64,
    /// Emit a snapshot after this much time, whichever comes first
    pub refresh_interval: Duration,
    /// Directories never entered
    pub exclusions: ExclusionSet,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            refresh_every: 200,
            refresh_interval: Duration::from_millis(200),
            exclusions: ExclusionSet::default(),
        }
    }
}

/// Running totals owned by the scan loop
struct Totals {
    files_scanned: u64,
    bytes_total: u64,
    current_path: Option<PathBuf>,
    phase: usize,
}

/// Finds the largest files under a root without leaving its volume
pub struct ScanEngine {
    root: PathBuf,
    config: ScanConfig,
    cancel_token: CancellationToken,
}

impl ScanEngine {
    pub fn new(root: PathBuf, config: ScanConfig) -> Self {
        Self {
            root,
            config,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel_token
    }

    /// Run the scan on a background thread.
    ///
    /// Snapshots arrive as [`ScanMessage::Progress`], followed by exactly one
    /// of `Completed`, `Cancelled` or `Error`. The report is returned through
    /// the join handle.
    pub fn spawn(self) -> (Receiver<ScanMessage>, JoinHandle<Result<ScanReport>>) {
        let (tx, rx) = crossbeam_channel::unbounded();

        let handle = std::thread::spawn(move || {
            let progress_tx = tx.clone();
            let result = self.run(|snapshot| {
                let _ = progress_tx.send(ScanMessage::Progress(snapshot));
            });

            let last = match &result {
                Ok(report) if report.cancelled => ScanMessage::Cancelled,
                Ok(_) => ScanMessage::Completed,
                Err(e) => ScanMessage::Error(e.to_string()),
            };
            let _ = tx.send(last);

            result
        });

        (rx, handle)
    }

    /// Scan synchronously, handing a snapshot to `on_snapshot` at every
    /// refresh and once more when the walk ends.
    ///
    /// Fails only when the root itself cannot be read.
    pub fn run<F>(self, mut on_snapshot: F) -> Result<ScanReport>
    where
        F: FnMut(ScanSnapshot),
    {
        // Made absolute without resolving links, so a symlinked root stays a
        // symlink and the walker declines it
        let root = std::path::absolute(&self.root).unwrap_or(self.root);
        let root_meta = fs::symlink_metadata(&root).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                HogError::PathNotFound(root.clone())
            } else {
                HogError::RootUnreadable {
                    path: root.clone(),
                    source,
                }
            }
        })?;

        info!(root = %root.display(), top_n = self.config.top_n, "scan started");
        if root_meta.file_type().is_symlink() {
            info!(root = %root.display(), "root is a symlink, not following it");
        }

        let started_at = Instant::now();
        let mut walker = VolumeWalker::new(
            root,
            device_id(&root_meta),
            self.config.exclusions,
            self.cancel_token.clone(),
        );
        let mut top = BoundedTopK::new(self.config.top_n);
        let mut totals = Totals {
            files_scanned: 0,
            bytes_total: 0,
            current_path: None,
            phase: 0,
        };

        let mut last_refresh = Instant::now();
        let mut since_refresh = 0u64;

        // Not a `for` loop: the denied count is read between entries
        while let Some(entry) = walker.next() {
            let size = occupied_size(&entry.metadata);
            totals.bytes_total += size;
            totals.files_scanned += 1;
            top.push(size, &entry.path);
            totals.current_path = Some(entry.path);

            since_refresh += 1;
            if since_refresh >= self.config.refresh_every
                || last_refresh.elapsed() >= self.config.refresh_interval
            {
                totals.phase = totals.phase.wrapping_add(1);
                on_snapshot(snapshot(&totals, &top, walker.denied(), started_at, false));
                since_refresh = 0;
                last_refresh = Instant::now();
            }
        }

        let cancelled = self.cancel_token.is_cancelled();
        let denied = walker.denied();
        on_snapshot(snapshot(&totals, &top, denied, started_at, true));

        let report = ScanReport {
            top: top.into_sorted_vec(),
            files_scanned: totals.files_scanned,
            bytes_total: totals.bytes_total,
            denied,
            elapsed: started_at.elapsed(),
            cancelled,
        };

        info!(
            files = report.files_scanned,
            bytes = report.bytes_total,
            denied = report.denied,
            cancelled = report.cancelled,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "scan finished"
        );

        Ok(report)
    }
}

fn snapshot(
    totals: &Totals,
    top: &BoundedTopK,
    denied: u64,
    started_at: Instant,
    finished: bool,
) -> ScanSnapshot {
    ScanSnapshot {
        files_scanned: totals.files_scanned,
        bytes_total: totals.bytes_total,
        denied,
        current_path: totals.current_path.clone(),
        started_at,
        elapsed: started_at.elapsed(),
        phase: totals.phase,
        top: top.snapshot(),
        finished,
    }
}
