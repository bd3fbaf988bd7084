mod cancel;
mod engine;
mod identity;
mod progress;
mod walker;

pub use cancel::CancellationToken;
pub use engine::{ScanConfig, ScanEngine};
pub use identity::{IdentityKey, device_id, occupied_size};
pub use progress::{ScanMessage, ScanReport, ScanSnapshot};
pub use walker::{ExclusionSet, VolumeWalker, WalkEntry};
