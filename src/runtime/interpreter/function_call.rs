use std::rc::Rc;

use crate::diagnostics::Span;
use crate::runtime::{
    closure::Closure,
    error::RuntimeError,
    gc::GcHandle,
    scope::{ScopeId, ScopeKind},
    value::Value,
};
use crate::syntax::ast::Expression;

use super::Interpreter;

impl Interpreter {
    /// `callee(arguments)`. A member callee (`o.f()`) binds `this` to `o`.
    pub(super) fn evaluate_call(
        &mut self,
        callee: &Expression,
        arguments: &[Expression],
        span: Span,
        scope: ScopeId,
    ) -> Result<GcHandle, RuntimeError> {
        let mark = self.root_mark();
        let result = self.evaluate_call_rooted(callee, arguments, span, scope);
        self.release(mark);
        result
    }

    /// Caller releases the root stack.
    fn evaluate_call_rooted(
        &mut self,
        callee: &Expression,
        arguments: &[Expression],
        span: Span,
        scope: ScopeId,
    ) -> Result<GcHandle, RuntimeError> {
        let (function, this) = match callee {
            Expression::Member {
                object, property, ..
            } => {
                let target = self.evaluate(object, scope)?;
                self.protect(target);
                let key = self.property_key(property, scope)?;
                (self.get_property(target, &key), Some(target))
            }
            _ => (self.evaluate(callee, scope)?, None),
        };
        self.protect(function);

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            let value = self.evaluate(argument, scope)?;
            self.protect(value);
            args.push(value);
        }

        self.call_value(function, this, &args, span)
    }

    /// Invokes a function or native value. Arguments must already be rooted.
    pub(super) fn call_value(
        &mut self,
        function: GcHandle,
        this: Option<GcHandle>,
        args: &[GcHandle],
        span: Span,
    ) -> Result<GcHandle, RuntimeError> {
        match self.heap.get(function) {
            Value::Function(closure) => {
                let closure = Rc::clone(closure);
                self.call_closure(&closure, this, args, span)
            }
            Value::NativeFunction(native) => {
                let native = native.clone();
                tracing::trace!(native = %native.name, args = args.len(), "call native");
                (native.func)(self, args).map_err(|message| RuntimeError::Native {
                    name: native.name,
                    message,
                    span,
                })
            }
            other => Err(RuntimeError::NotCallable {
                kind: other.type_name(),
                span,
            }),
        }
    }

    /// Runs the body in a new frame whose parent is the closure's scope.
    ///
    /// Parameters without an argument are Undefined; extra arguments are
    /// dropped. The result is the completion value of the body.
    fn call_closure(
        &mut self,
        closure: &Closure,
        this: Option<GcHandle>,
        args: &[GcHandle],
        span: Span,
    ) -> Result<GcHandle, RuntimeError> {
        let name = closure.name.clone().unwrap_or_else(|| Rc::from("<anonymous>"));
        if !self.scopes.is_live(closure.scope) {
            return Err(RuntimeError::ScopeExited { name, span });
        }
        if self.call_depth >= self.config.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded {
                limit: self.config.max_call_depth,
                span,
            });
        }

        let frame = self.scopes.push(closure.scope, ScopeKind::Function, this);
        for (i, param) in closure.params.iter().enumerate() {
            let value = match args.get(i) {
                Some(&value) => value,
                None => self.alloc(Value::Undefined),
            };
            self.scopes.declare(frame, Rc::clone(param), value);
        }

        tracing::trace!(function = %name, depth = self.call_depth + 1, "call");
        self.call_depth += 1;
        let result = self.execute_statements(&closure.body.statements, frame);
        self.call_depth -= 1;
        self.scopes.pop(frame);

        match result? {
            Some(value) => Ok(value),
            None => Ok(self.alloc(Value::Undefined)),
        }
    }
}
