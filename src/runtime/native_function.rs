use std::{fmt, rc::Rc};

use crate::runtime::NativeFn;

#[derive(Clone)]
pub struct NativeFunction {
    pub name: Rc<str>,
    pub func: NativeFn,
}

impl NativeFunction {
    pub fn new(name: impl Into<Rc<str>>, func: NativeFn) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFunction({})", self.name)
    }
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
