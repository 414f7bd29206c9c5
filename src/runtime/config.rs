/// Minimum number of allocations between automatic collections.
pub const DEFAULT_GC_THRESHOLD: usize = 1024;
/// Nested calls allowed before a run is aborted.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 512;

/// Runtime switches for one interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Emit a trace event for every evaluated node.
    pub trace: bool,
    /// Never reclaim heap slots, neither automatically nor through `gc()`.
    pub disable_gc: bool,
    /// Log pool usage after each collection and at the end of a run.
    pub report_pool_usage: bool,
    pub gc_threshold: usize,
    pub max_call_depth: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            trace: false,
            disable_gc: false,
            report_pool_usage: false,
            gc_threshold: DEFAULT_GC_THRESHOLD,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

impl RuntimeConfig {
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn with_disable_gc(mut self, disable_gc: bool) -> Self {
        self.disable_gc = disable_gc;
        self
    }

    pub fn with_report_pool_usage(mut self, report: bool) -> Self {
        self.report_pool_usage = report;
        self
    }

    /// Not clamped, so tests can force frequent collections.
    pub fn with_gc_threshold(mut self, threshold: usize) -> Self {
        self.gc_threshold = threshold;
        self
    }

    pub fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }
}
