use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a mesh registered with an `AssetServer`.
pub type AssetId = u64;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_asset_id() -> AssetId {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Handle to a mesh held by an `AssetServer`.
///
/// Handles stay valid across reloads; compare `MeshEntry::revision` to
/// notice that the data behind a handle changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(AssetId);

impl MeshHandle {
    pub(crate) fn new(id: AssetId) -> Self {
        Self(id)
    }

    pub fn id(&self) -> AssetId {
        self.0
    }
}

impl fmt::Display for MeshHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mesh#{}", self.0)
    }
}
