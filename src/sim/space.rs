//! The arena a blob lives in
//!
//! A blob only needs three things from its surroundings: how wide the arena is
//! (for random placement), how long its edge is (for wall contact) and a place
//! to register itself. `Space` is that contract; `Arena` is the stock
//! implementation.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::blob::{Blob, BlobView};
use crate::consts::{DEFAULT_ARENA_SIZE, DEFAULT_ARENA_WIDTH};

/// Identity of a space; a blob remembers the one it was created in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpaceId(pub u64);

static NEXT_SPACE_ID: AtomicU64 = AtomicU64::new(1);

impl SpaceId {
    /// Allocate a process-unique id
    pub fn fresh() -> Self {
        Self(NEXT_SPACE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Collaborator contract between a blob and the arena that owns it
pub trait Space {
    fn id(&self) -> SpaceId;
    /// Arena width, used for initial placement
    fn width(&self) -> f64;
    /// Arena edge length, used for wall contact on both axes
    fn size(&self) -> f64;
    /// Register a freshly created blob
    fn add_blob(&mut self, blob: &Blob);
}

/// Square-ish arena with an append-only blob registry
///
/// `width` and `size` are kept apart: placement uses one, wall contact the
/// other. They are equal unless the caller says otherwise.
#[derive(Debug, Serialize)]
pub struct Arena {
    id: SpaceId,
    width: f64,
    size: f64,
    /// Snapshot of every blob at the moment it registered
    registry: Vec<BlobView>,
}

impl Default for Arena {
    fn default() -> Self {
        Self::with_dimensions(DEFAULT_ARENA_WIDTH, DEFAULT_ARENA_SIZE)
    }
}

impl Arena {
    /// Create a square arena
    pub fn new(size: f64) -> Self {
        Self::with_dimensions(size, size)
    }

    /// Create an arena whose placement width differs from its wall size
    pub fn with_dimensions(width: f64, size: f64) -> Self {
        Self {
            id: SpaceId::fresh(),
            width,
            size,
            registry: Vec::new(),
        }
    }

    /// Number of blobs ever registered
    pub fn population(&self) -> usize {
        self.registry.len()
    }

    /// Registration snapshots, in order
    pub fn registry(&self) -> &[BlobView] {
        &self.registry
    }
}

impl Space for Arena {
    fn id(&self) -> SpaceId {
        self.id
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn size(&self) -> f64 {
        self.size
    }

    fn add_blob(&mut self, blob: &Blob) {
        self.registry.push(blob.view());
        log::trace!(
            "Space {:?} registered blob #{} (mass {:.1})",
            self.id,
            self.registry.len(),
            blob.mass()
        );
    }
}
