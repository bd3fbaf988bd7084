pub mod error;
pub mod scanner;
pub mod size;
pub mod topk;

pub use error::{HogError, Result};
pub use scanner::{
    CancellationToken, ExclusionSet, IdentityKey, ScanConfig, ScanEngine, ScanMessage, ScanReport,
    ScanSnapshot, VolumeWalker, WalkEntry,
};
pub use size::{format_count, format_size};
pub use topk::{BoundedTopK, FileObservation};
