use crate::diagnostics::Span;
use crate::syntax::ast::NodeId;

use super::Interpreter;

impl Interpreter {
    /// Emits one trace event per evaluated node when tracing is on.
    pub(super) fn trace_node(&self, node: NodeId, kind: &'static str, span: Span) {
        if self.config.trace {
            tracing::trace!(node = %node, kind, offset = span.start, "eval");
        }
    }
}
