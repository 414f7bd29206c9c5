use crate::runtime::{
    config::DEFAULT_GC_THRESHOLD,
    gc::{
        gc_handle::GcHandle,
        heap_entry::HeapEntry,
        pool_usage::{CollectionReport, PoolUsage},
    },
    scope::ScopeChain,
    value::Value,
};

const MIN_GC_THRESHOLD: usize = 1024;
const MAX_GC_THRESHOLD: usize = 1_000_000;

/// Stop-the-world mark-and-sweep heap: the object pool every runtime value
/// lives in.
///
/// Values are addressed by [`GcHandle`]. Freed slots go onto a free list and
/// are handed out again before the slot vector grows. The interpreter asks
/// [`Self::should_collect`] at statement boundaries and collects once the
/// allocation count since the last cycle reaches the threshold.
pub struct GcHeap {
    entries: Vec<Option<HeapEntry>>,
    free_list: Vec<u32>,
    allocation_count: usize,
    gc_threshold: usize,
    gc_enabled: bool,
    total_collections: usize,
    total_allocations: usize,
    total_freed: usize,
}

impl Default for GcHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl GcHeap {
    /// Creates a heap that collects every `1024` allocations, GC enabled.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            free_list: Vec::new(),
            allocation_count: 0,
            gc_threshold: DEFAULT_GC_THRESHOLD,
            gc_enabled: true,
            total_collections: 0,
            total_allocations: 0,
            total_freed: 0,
        }
    }

    /// Creates a new heap with a custom GC allocation threshold.
    ///
    /// Unlike [`Self::set_threshold`], this does not clamp to `MIN_GC_THRESHOLD`.
    pub fn with_threshold(threshold: usize) -> Self {
        let mut heap = Self::new();
        heap.gc_threshold = threshold.max(1);
        heap
    }

    /// Enables or disables automatic collection checks.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.gc_enabled = enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.gc_enabled
    }

    /// Sets the allocation threshold that triggers collection.
    ///
    /// Values below `MIN_GC_THRESHOLD` are clamped upward.
    pub fn set_threshold(&mut self, threshold: usize) {
        self.gc_threshold = threshold.max(MIN_GC_THRESHOLD)
    }

    pub fn threshold(&self) -> usize {
        self.gc_threshold
    }

    /// Returns `true` when GC is enabled and the threshold was reached.
    pub fn should_collect(&self) -> bool {
        self.gc_enabled && self.allocation_count >= self.gc_threshold
    }

    /// Takes ownership of `value` and returns the handle of its slot.
    ///
    /// Never collects; collection only happens through [`Self::collect`].
    pub fn alloc(&mut self, value: Value) -> GcHandle {
        self.allocation_count += 1;
        self.total_allocations += 1;

        let entry = HeapEntry::new(value);
        if let Some(idx) = self.free_list.pop() {
            self.entries[idx as usize] = Some(entry);
            GcHandle(idx)
        } else {
            let idx = self.entries.len() as u32;
            self.entries.push(Some(entry));
            GcHandle(idx)
        }
    }

    /// Returns the value in a live slot.
    ///
    /// Panics if the handle points to a free slot or is out of bounds: every
    /// handle the runtime holds names a live slot.
    pub fn get(&self, handle: GcHandle) -> &Value {
        match self.try_get(handle) {
            Some(value) => value,
            None => panic!("GcHeap::get: invalid or free handle {}", handle),
        }
    }

    /// Mutable counterpart of [`Self::get`], with the same panic contract.
    pub fn get_mut(&mut self, handle: GcHandle) -> &mut Value {
        match self.entries.get_mut(handle.0 as usize) {
            Some(Some(entry)) => &mut entry.value,
            _ => panic!("GcHeap::get_mut: invalid or free handle {}", handle),
        }
    }

    pub fn try_get(&self, handle: GcHandle) -> Option<&Value> {
        self.entries
            .get(handle.0 as usize)
            .and_then(Option::as_ref)
            .map(|entry| &entry.value)
    }

    pub fn is_live(&self, handle: GcHandle) -> bool {
        self.try_get(handle).is_some()
    }

    /// Returns the number of currently live heap entries.
    pub fn live_count(&self) -> usize {
        self.entries.len() - self.free_list.len()
    }

    /// Slots ever created, live or free.
    pub fn slot_count(&self) -> usize {
        self.entries.len()
    }

    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Returns the total number of allocations performed by this heap.
    pub fn total_allocations(&self) -> usize {
        self.total_allocations
    }

    /// Returns the total number of completed GC cycles.
    pub fn total_collections(&self) -> usize {
        self.total_collections
    }

    pub fn usage(&self) -> PoolUsage {
        PoolUsage {
            slots: self.slot_count(),
            live: self.live_count(),
            free: self.free_count(),
            total_allocations: self.total_allocations,
            total_collections: self.total_collections,
            total_freed: self.total_freed,
            threshold: self.gc_threshold,
        }
    }

    /// Runs a full stop-the-world mark-and-sweep collection.
    ///
    /// Roots are every binding and `this` of every live scope frame, plus
    /// `extra_roots` (values the evaluator holds between sub-evaluations).
    /// Runs regardless of the enabled flag; callers decide whether to call it.
    pub fn collect(&mut self, scopes: &ScopeChain, extra_roots: &[GcHandle]) -> CollectionReport {
        let live_before = self.live_count();

        let mut worklist: Vec<GcHandle> = scopes.roots().collect();
        worklist.extend_from_slice(extra_roots);
        self.mark(worklist);

        let freed = self.sweep();
        let live_after = self.live_count();

        self.total_collections += 1;
        self.total_freed += freed;
        self.allocation_count = 0;
        self.adapt_threshold(freed, live_before);

        let report = CollectionReport {
            live_before,
            live_after,
            freed,
            threshold: self.gc_threshold,
        };
        tracing::debug!(
            live_before = report.live_before,
            live_after = report.live_after,
            freed = report.freed,
            threshold = report.threshold,
            "gc cycle"
        );
        report
    }

    fn mark(&mut self, mut worklist: Vec<GcHandle>) {
        while let Some(handle) = worklist.pop() {
            let idx = handle.index() as usize;

            // Mark first so cycles and shared values are visited once.
            let Some(Some(entry)) = self.entries.get_mut(idx) else {
                continue;
            };
            if entry.marked {
                continue;
            }
            entry.marked = true;

            worklist.extend(entry.value.children());
        }
    }

    /// Frees every unmarked slot and clears the marks of the survivors.
    fn sweep(&mut self) -> usize {
        let mut freed = 0;
        for (i, slot) in self.entries.iter_mut().enumerate() {
            if let Some(entry) = slot {
                if entry.marked {
                    entry.marked = false;
                } else {
                    *slot = None;
                    self.free_list.push(i as u32);
                    freed += 1;
                }
            }
        }
        freed
    }

    fn adapt_threshold(&mut self, collected: usize, total_before: usize) {
        if total_before == 0 {
            return;
        }

        let ratio = collected as f64 / total_before as f64;
        if ratio < 0.25 {
            self.gc_threshold = (self.gc_threshold * 2).min(MAX_GC_THRESHOLD);
        } else if ratio > 0.75 {
            self.gc_threshold = (self.gc_threshold / 2).max(MIN_GC_THRESHOLD)
        }
    }
}
