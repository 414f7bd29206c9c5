//! Lexical scope chain.
//!
//! Frames live in a stack-shaped arena: a frame is pushed when a block or a
//! call starts and popped when it ends, so frames die strictly in LIFO order.
//! A [`ScopeId`] pairs a slot index with a generation; once its frame is popped
//! the id goes stale and every operation on it reports the frame as gone
//! instead of reaching whatever frame reuses the slot.

use std::{fmt, rc::Rc};

use crate::runtime::gc::GcHandle;

pub use super::frame::{Frame, ScopeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId {
    index: u32,
    generation: u32,
}

impl ScopeId {
    pub fn index(self) -> u32 {
        self.index
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope{}@{}", self.index, self.generation)
    }
}

/// Name lookup failed in every frame up to the global one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceError {
    pub name: Rc<str>,
}

impl fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not defined", self.name)
    }
}

impl std::error::Error for ReferenceError {}

pub struct ScopeChain {
    frames: Vec<Frame>,
    next_generation: u32,
}

impl Default for ScopeChain {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeChain {
    /// Creates a chain holding only the global frame.
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::new(ScopeKind::Global, None, None, 0)],
            next_generation: 1,
        }
    }

    pub fn global(&self) -> ScopeId {
        ScopeId {
            index: 0,
            generation: 0,
        }
    }

    /// Opens a frame whose lookups fall back to `parent`.
    pub fn push(&mut self, parent: ScopeId, kind: ScopeKind, this: Option<GcHandle>) -> ScopeId {
        let id = ScopeId {
            index: self.frames.len() as u32,
            generation: self.next_generation,
        };
        self.next_generation = self.next_generation.wrapping_add(1);
        self.frames
            .push(Frame::new(kind, Some(parent), this, id.generation));
        tracing::trace!(scope = %id, parent = %parent, ?kind, "push scope");
        id
    }

    /// Destroys `id` together with any frame opened after it.
    ///
    /// The global frame is never popped.
    pub fn pop(&mut self, id: ScopeId) {
        if id.index == 0 || !self.is_live(id) {
            return;
        }
        debug_assert_eq!(
            id.index as usize,
            self.frames.len() - 1,
            "scope frames must be popped in LIFO order"
        );
        self.frames.truncate(id.index as usize);
        tracing::trace!(scope = %id, "pop scope");
    }

    pub fn is_live(&self, id: ScopeId) -> bool {
        self.frames
            .get(id.index as usize)
            .is_some_and(|frame| frame.generation == id.generation)
    }

    pub fn frame(&self, id: ScopeId) -> Option<&Frame> {
        self.frames
            .get(id.index as usize)
            .filter(|frame| frame.generation == id.generation)
    }

    fn frame_mut(&mut self, id: ScopeId) -> Option<&mut Frame> {
        self.frames
            .get_mut(id.index as usize)
            .filter(|frame| frame.generation == id.generation)
    }

    /// Number of live frames, the global one included.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Binds `name` in `scope` itself, shadowing outer bindings.
    ///
    /// Returns `false` when the frame is gone.
    pub fn declare(&mut self, scope: ScopeId, name: Rc<str>, handle: GcHandle) -> bool {
        match self.frame_mut(scope) {
            Some(frame) => {
                frame.bindings.insert(name, handle);
                true
            }
            None => false,
        }
    }

    /// Walks from `scope` outward and returns the first binding of `name`.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Result<GcHandle, ReferenceError> {
        self.resolve(scope, name)
            .map(|(_, handle)| handle)
            .ok_or_else(|| ReferenceError {
                name: Rc::from(name),
            })
    }

    /// Like [`Self::lookup`], also naming the frame that holds the binding.
    pub fn resolve(&self, scope: ScopeId, name: &str) -> Option<(ScopeId, GcHandle)> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let frame = self.frame(id)?;
            if let Some(handle) = frame.get(name) {
                return Some((id, handle));
            }
            current = frame.parent;
        }
        None
    }

    /// Rebinds the nearest existing binding of `name`.
    ///
    /// Returns `false` if no frame from `scope` outward binds it.
    pub fn assign(&mut self, scope: ScopeId, name: &str, handle: GcHandle) -> bool {
        let Some((owner, _)) = self.resolve(scope, name) else {
            return false;
        };
        match self.frame_mut(owner).and_then(|frame| frame.bindings.get_mut(name)) {
            Some(slot) => {
                *slot = handle;
                true
            }
            None => false,
        }
    }

    /// `this` of the nearest enclosing call, `None` outside any call.
    pub fn this_value(&self, scope: ScopeId) -> Option<GcHandle> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let frame = self.frame(id)?;
            if frame.kind != ScopeKind::Block {
                return frame.this;
            }
            current = frame.parent;
        }
        None
    }

    /// Live frames whose parent is `scope`.
    pub fn children(&self, scope: ScopeId) -> Vec<ScopeId> {
        self.frames
            .iter()
            .enumerate()
            .filter(|(_, frame)| frame.parent == Some(scope))
            .map(|(index, frame)| ScopeId {
                index: index as u32,
                generation: frame.generation,
            })
            .collect()
    }

    /// Every handle bound in any live frame: the collector's root set.
    pub fn roots(&self) -> impl Iterator<Item = GcHandle> + '_ {
        self.frames.iter().flat_map(Frame::handles)
    }
}
