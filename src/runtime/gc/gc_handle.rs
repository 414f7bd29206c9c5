use std::fmt;

/// Index of a heap slot.
///
/// A `GcHandle` is a copyable reference to a value owned by the [`GcHeap`].
/// Bindings, array elements and object properties all hold handles; the slot
/// stays allocated for as long as some root reaches it.
///
/// [`GcHeap`]: super::GcHeap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GcHandle(pub(crate) u32);

impl GcHandle {
    /// Returns the raw heap slot index backing this handle.
    pub fn index(self) -> u32 {
        self.0
    }

    #[cfg(test)]
    pub fn new_for_test(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Display for GcHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
