use std::{collections::HashMap, rc::Rc};

use crate::runtime::gc::GcHandle;

use super::scope::ScopeId;

/// What opened a scope frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Global,
    Function,
    Block,
}

/// One level of the scope chain: name bindings plus a link to the enclosing
/// frame. Function frames also carry the call's `this`.
#[derive(Debug, Clone)]
pub struct Frame {
    pub kind: ScopeKind,
    pub parent: Option<ScopeId>,
    pub this: Option<GcHandle>,
    pub(super) generation: u32,
    pub(super) bindings: HashMap<Rc<str>, GcHandle>,
}

impl Frame {
    pub(super) fn new(
        kind: ScopeKind,
        parent: Option<ScopeId>,
        this: Option<GcHandle>,
        generation: u32,
    ) -> Self {
        Self {
            kind,
            parent,
            this,
            generation,
            bindings: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<GcHandle> {
        self.bindings.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Every handle this frame keeps alive.
    pub fn handles(&self) -> impl Iterator<Item = GcHandle> + '_ {
        self.bindings.values().copied().chain(self.this)
    }
}
