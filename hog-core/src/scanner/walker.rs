use std::collections::HashSet;
use std::fs::{self, DirEntry, Metadata, ReadDir};
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::cancel::CancellationToken;
use super::identity::{IdentityKey, device_id};

/// Virtual or system-reserved mount points that are never worth descending
const DEFAULT_EXCLUSIONS: &[&str] = &[
    "/System/Volumes/Data/.Spotlight-V100",        // Spotlight index
    "/System/Volumes/Data/.fseventsd",             // FSEvents
    "/System/Volumes/Data/.DocumentRevisions-V100", // Document versions
    "/System/Volumes/Data/.TemporaryItems",
    "/System/Volumes/Data/private/var/db/dyld", // dyld cache (permission issues)
    "/System/Volumes/Preboot",
    "/System/Volumes/Update",
    "/System/Volumes/VM",
    "/dev",
    "/proc",
    "/sys",
    "/net",
    "/Network",
];

/// Absolute directory paths the walker refuses to enter.
///
/// Matching is exact: `/dev` excludes `/dev` itself, not `/devices`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    paths: HashSet<PathBuf>,
}

impl ExclusionSet {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            paths: HashSet::new(),
        }
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUSIONS.iter().copied())
    }
}

/// A regular file found by the walker, with its lstat metadata
#[derive(Debug)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub metadata: Metadata,
}

/// Depth-first traversal of one volume.
///
/// Directories wait on an explicit stack, so depth is bounded by heap memory
/// rather than the call stack. Symlinks are never followed, other devices are
/// never entered, and each device/inode pair is visited at most once. Any
/// failure below the root is tallied in [`VolumeWalker::denied`] and skipped.
///
/// The cancellation token is checked before each directory is opened and
/// before each entry is examined.
pub struct VolumeWalker {
    root: PathBuf,
    root_device: u64,
    exclusions: ExclusionSet,
    cancel: CancellationToken,
    pending: Vec<PathBuf>,
    current: Option<ReadDir>,
    seen: HashSet<IdentityKey>,
    denied: u64,
}

impl VolumeWalker {
    pub fn new(
        root: PathBuf,
        root_device: u64,
        exclusions: ExclusionSet,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            pending: vec![root.clone()],
            root,
            root_device,
            exclusions,
            cancel,
            current: None,
            seen: HashSet::new(),
            denied: 0,
        }
    }

    /// Entries that could not be read so far
    pub fn denied(&self) -> u64 {
        self.denied
    }

    fn deny(&mut self, path: Option<&Path>, err: &io::Error) {
        self.denied += 1;
        debug!(path = ?path, error = %err, "access denied");
    }

    /// Open a directory popped from the stack, or `None` to skip it
    fn expand(&mut self, dir: &Path) -> Option<ReadDir> {
        // The root is scanned even if it is listed, the user asked for it
        if dir != self.root && self.exclusions.contains(dir) {
            debug!(path = %dir.display(), "skipping excluded directory");
            return None;
        }

        let metadata = match fs::symlink_metadata(dir) {
            Ok(m) => m,
            Err(err) => {
                self.deny(Some(dir), &err);
                return None;
            }
        };

        if metadata.file_type().is_symlink() {
            return None;
        }

        if device_id(&metadata) != self.root_device {
            debug!(path = %dir.display(), "skipping directory on another volume");
            return None;
        }

        // Children are recorded when listed; this covers the root itself
        if let Some(key) = IdentityKey::from_metadata(&metadata) {
            self.seen.insert(key);
        }

        match fs::read_dir(dir) {
            Ok(read_dir) => Some(read_dir),
            Err(err) => {
                self.deny(Some(dir), &err);
                None
            }
        }
    }

    /// Classify one listed entry. Directories are queued, files returned.
    fn visit(&mut self, entry: io::Result<DirEntry>) -> Option<WalkEntry> {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                self.deny(None, &err);
                return None;
            }
        };

        let path = entry.path();

        // Does not traverse symlinks
        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(err) => {
                self.deny(Some(path.as_path()), &err);
                return None;
            }
        };

        if device_id(&metadata) != self.root_device {
            return None;
        }

        if let Some(key) = IdentityKey::from_metadata(&metadata)
            && !self.seen.insert(key)
        {
            return None;
        }

        let file_type = metadata.file_type();
        if file_type.is_dir() {
            self.pending.push(path);
            None
        } else if file_type.is_file() {
            Some(WalkEntry { path, metadata })
        } else {
            // Symlinks, sockets, fifos, devices
            None
        }
    }

    fn stop(&mut self) {
        self.current = None;
        self.pending.clear();
    }
}

impl Iterator for VolumeWalker {
    type Item = WalkEntry;

    fn next(&mut self) -> Option<WalkEntry> {
        loop {
            if self.cancel.is_cancelled() {
                self.stop();
                return None;
            }

            let Some(read_dir) = self.current.as_mut() else {
                let dir = self.pending.pop()?;
                self.current = self.expand(&dir);
                continue;
            };

            let Some(entry) = read_dir.next() else {
                self.current = None;
                continue;
            };

            if let Some(found) = self.visit(entry) {
                return Some(found);
            }
        }
    }
}
