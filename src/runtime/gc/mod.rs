pub mod gc_handle;
pub mod gc_heap;
pub(crate) mod heap_entry;
pub mod pool_usage;

pub use gc_handle::GcHandle;
pub use gc_heap::GcHeap;
pub use pool_usage::{CollectionReport, PoolUsage};
