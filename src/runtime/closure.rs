use std::rc::Rc;

use crate::runtime::scope::ScopeId;
use crate::syntax::ast::{Block, NodeId};

/// Function value: parameter names, a shared body and the scope it closes over.
///
/// The body belongs to the parsed program; the closure only shares it.
#[derive(Debug, Clone)]
pub struct Closure {
    pub name: Option<Rc<str>>,
    pub params: Vec<Rc<str>>,
    pub body: Rc<Block>,
    pub scope: ScopeId,
    pub node: NodeId,
}

impl Closure {
    pub fn new(
        name: Option<Rc<str>>,
        params: Vec<Rc<str>>,
        body: Rc<Block>,
        scope: ScopeId,
        node: NodeId,
    ) -> Self {
        Self {
            name,
            params,
            body,
            scope,
            node,
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
