use crate::runtime::value::Value;

/// Occupied heap slot: the value plus its mark bit.
pub(crate) struct HeapEntry {
    pub(crate) value: Value,
    pub(crate) marked: bool,
}

impl HeapEntry {
    pub(crate) fn new(value: Value) -> Self {
        Self {
            value,
            marked: false,
        }
    }
}
