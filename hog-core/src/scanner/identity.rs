use std::fs::Metadata;

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

/// Device + inode pair identifying one physical filesystem object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    pub device: u64,
    pub inode: u64,
}

impl IdentityKey {
    #[cfg(unix)]
    pub fn from_metadata(metadata: &Metadata) -> Option<Self> {
        Some(Self {
            device: metadata.dev(),
            inode: metadata.ino(),
        })
    }

    /// No stable inode numbers through std here, so no deduplication
    #[cfg(not(unix))]
    pub fn from_metadata(_metadata: &Metadata) -> Option<Self> {
        None
    }
}

/// Get actual disk usage for a file (accounts for sparse files and block size).
/// Falls back to the logical length when the filesystem reports no blocks.
#[cfg(unix)]
pub fn occupied_size(metadata: &Metadata) -> u64 {
    // st_blocks is in 512-byte units
    match metadata.blocks() {
        0 => metadata.len(),
        blocks => blocks.saturating_mul(512),
    }
}

/// Get actual disk usage for a file (Windows fallback - uses file size)
#[cfg(not(unix))]
pub fn occupied_size(metadata: &Metadata) -> u64 {
    metadata.len()
}

/// Get device ID for same-filesystem checks
#[cfg(unix)]
pub fn device_id(metadata: &Metadata) -> u64 {
    metadata.dev()
}

/// Get device ID (Windows - not supported, return 0)
#[cfg(not(unix))]
pub fn device_id(_metadata: &Metadata) -> u64 {
    0
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_hard_links_share_identity() {
        let temp = TempDir::new().unwrap();
        let original = temp.path().join("original");
        let link = temp.path().join("link");
        fs::write(&original, b"payload").unwrap();
        fs::hard_link(&original, &link).unwrap();

        let a = IdentityKey::from_metadata(&fs::symlink_metadata(&original).unwrap());
        let b = IdentityKey::from_metadata(&fs::symlink_metadata(&link).unwrap());
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn test_sparse_file_reports_allocated_blocks() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sparse");
        let file = fs::File::create(&path).unwrap();
        file.set_len(64 * 1024 * 1024).unwrap();
        drop(file);

        let metadata = fs::symlink_metadata(&path).unwrap();
        // Nothing written, so either no blocks (falls back to length) or far
        // fewer blocks than the logical size
        if metadata.blocks() > 0 {
            assert!(occupied_size(&metadata) < metadata.len());
        } else {
            assert_eq!(occupied_size(&metadata), metadata.len());
        }
    }
}
