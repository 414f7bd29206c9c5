use std::fmt;

use serde::Serialize;

/// Snapshot of heap occupancy and collector activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolUsage {
    /// Slots ever created, live or free.
    pub slots: usize,
    pub live: usize,
    pub free: usize,
    pub total_allocations: usize,
    pub total_collections: usize,
    pub total_freed: usize,
    pub threshold: usize,
}

impl fmt::Display for PoolUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pool: {} live / {} free / {} slots, {} allocations, {} collections ({} freed), threshold {}",
            self.live,
            self.free,
            self.slots,
            self.total_allocations,
            self.total_collections,
            self.total_freed,
            self.threshold
        )
    }
}

/// Outcome of a single collection cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollectionReport {
    pub live_before: usize,
    pub live_after: usize,
    pub freed: usize,
    pub threshold: usize,
}
