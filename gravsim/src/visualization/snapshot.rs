//! Render-ready frame snapshots and the slot that hands them to a consumer
//!
//! The computation loop fills a `Snapshot` it owns, then publishes it whole.
//! Readers only ever get an `Arc` to a finished snapshot, so they cannot
//! observe a frame that is still being written. The mutex guards nothing but
//! the handle swap.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::simulation::states::NVec2;
use crate::visualization::palette::{ColorBucket, StarTint, PRIMARY_ALPHA, SECONDARY_ALPHA};

/// One drawable point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderPoint {
    pub render_x: f64,
    pub render_y: f64,
    pub speed: f64,
    pub bucket: ColorBucket,
    pub is_secondary: bool,     // lensed image behind the hole, drawn dimmer
    pub tint: Option<StarTint>, // galaxy stars: overrides the speed bucket
}

impl RenderPoint {
    /// Final RGBA: the star tint when there is one, else the speed bucket
    pub fn rgba(&self) -> [u8; 4] {
        match self.tint {
            Some(tint) => {
                let [r, g, b] = tint.rgb();
                let a = if self.is_secondary { SECONDARY_ALPHA } else { PRIMARY_ALPHA };
                [r, g, b, a]
            }
            None => self.bucket.rgba(self.is_secondary),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub frame: u64,               // frames advanced so far
    pub attractor: NVec2,         // attractor position this frame
    pub points: Vec<RenderPoint>, // secondary images first, then primaries
    pub active_count: usize,      // live particles after replacement
    pub consumed_this_frame: usize,
    pub consumed_total: u64,
}

impl Snapshot {
    /// Empty the snapshot but keep its allocation
    pub fn clear(&mut self) {
        self.frame = 0;
        self.attractor = NVec2::zeros();
        self.points.clear();
        self.active_count = 0;
        self.consumed_this_frame = 0;
        self.consumed_total = 0;
    }

    pub fn primaries(&self) -> impl Iterator<Item = &RenderPoint> {
        self.points.iter().filter(|p| !p.is_secondary)
    }

    pub fn secondaries(&self) -> impl Iterator<Item = &RenderPoint> {
        self.points.iter().filter(|p| p.is_secondary)
    }
}

/// Holds the last fully published snapshot
#[derive(Debug, Default)]
pub struct SnapshotSlot {
    current: Mutex<Arc<Snapshot>>,
}

impl SnapshotSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a finished snapshot.
    ///
    /// Returns the displaced snapshot when no reader still holds it, so the
    /// writer can reuse its buffer for the next frame.
    pub fn publish(&self, snapshot: Snapshot) -> Option<Snapshot> {
        let previous = std::mem::replace(&mut *self.lock(), Arc::new(snapshot));
        Arc::try_unwrap(previous).ok()
    }

    /// The most recently published snapshot
    pub fn latest(&self) -> Arc<Snapshot> {
        Arc::clone(&self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Arc<Snapshot>> {
        // A panicked writer leaves a whole Arc behind, never a torn one
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
