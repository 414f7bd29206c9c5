use std::rc::Rc;

use crate::diagnostics::Span;
use crate::runtime::{
    closure::Closure,
    error::RuntimeError,
    gc::GcHandle,
    number::to_int32,
    property_map::PropertyMap,
    scope::ScopeId,
    value::{ArrayData, Value},
};
use crate::syntax::ast::{
    AssignmentOperator, Block, Expression, Literal, MemberProperty, NodeId, ObjectProperty,
    UnaryOperator,
};

use super::Interpreter;

impl Interpreter {
    /// Evaluates `expression` to the handle of its value.
    ///
    /// The returned handle is not rooted; callers that evaluate anything else
    /// before storing it must [`protect`](Self::protect) it.
    pub(super) fn evaluate(
        &mut self,
        expression: &Expression,
        scope: ScopeId,
    ) -> Result<GcHandle, RuntimeError> {
        self.trace_node(expression.id(), expression.kind_name(), expression.span());

        match expression {
            Expression::Literal { value, .. } => Ok(self.alloc(literal_value(value))),
            Expression::Identifier { name, span, .. } => self.lookup(scope, name, *span),
            Expression::This { .. } => match self.scopes.this_value(scope) {
                Some(this) => Ok(this),
                None => Ok(self.alloc(Value::Undefined)),
            },
            Expression::Member {
                object, property, ..
            } => {
                let mark = self.root_mark();
                let target = self.evaluate(object, scope)?;
                self.protect(target);
                let key = self.property_key(property, scope)?;
                let value = self.get_property(target, &key);
                self.release(mark);
                Ok(value)
            }
            Expression::Call {
                callee,
                arguments,
                span,
                ..
            } => self.evaluate_call(callee, arguments, *span, scope),
            Expression::Assignment {
                operator,
                target,
                value,
                ..
            } => self.evaluate_assignment(*operator, target, value, scope),
            Expression::Object { properties, .. } => self.evaluate_object(properties, scope),
            Expression::Array { elements, .. } => self.evaluate_array(elements, scope),
            Expression::Sequence { expressions, .. } => {
                let mut last = None;
                for expression in expressions {
                    last = Some(self.evaluate(expression, scope)?);
                }
                match last {
                    Some(value) => Ok(value),
                    None => Ok(self.alloc(Value::Undefined)),
                }
            }
            Expression::Unary {
                operator, argument, ..
            } => {
                let argument = self.evaluate(argument, scope)?;
                let value = unary_value(*operator, self.heap.get(argument));
                Ok(self.alloc(value))
            }
            Expression::Binary {
                operator,
                left,
                right,
                ..
            } => self.evaluate_binary(*operator, left, right, scope),
            Expression::Logical {
                operator,
                left,
                right,
                ..
            } => self.evaluate_logical(*operator, left, right, scope),
            Expression::Function {
                id,
                name,
                params,
                body,
                ..
            } => Ok(self.create_function(*id, name.as_ref(), params, body, scope)),
        }
    }

    pub(super) fn lookup(
        &self,
        scope: ScopeId,
        name: &Rc<str>,
        span: Span,
    ) -> Result<GcHandle, RuntimeError> {
        self.scopes
            .lookup(scope, name)
            .map_err(|err| RuntimeError::UndefinedReference {
                name: err.name,
                span,
            })
    }

    fn evaluate_object(
        &mut self,
        properties: &[ObjectProperty],
        scope: ScopeId,
    ) -> Result<GcHandle, RuntimeError> {
        let mark = self.root_mark();
        let mut map = PropertyMap::new();
        for property in properties {
            let value = match self.evaluate(&property.value, scope) {
                Ok(value) => value,
                Err(err) => {
                    self.release(mark);
                    return Err(err);
                }
            };
            self.protect(value);
            map.insert(property.key.clone(), value);
        }
        let object = self.alloc(Value::Object(map));
        self.release(mark);
        Ok(object)
    }

    fn evaluate_array(
        &mut self,
        elements: &[Expression],
        scope: ScopeId,
    ) -> Result<GcHandle, RuntimeError> {
        let mark = self.root_mark();
        let mut handles = Vec::with_capacity(elements.len());
        for element in elements {
            let value = match self.evaluate(element, scope) {
                Ok(value) => value,
                Err(err) => {
                    self.release(mark);
                    return Err(err);
                }
            };
            self.protect(value);
            handles.push(value);
        }
        let array = self.alloc(Value::Array(ArrayData::new(handles)));
        self.release(mark);
        Ok(array)
    }

    /// A named function expression also binds its name in `scope`, so it can
    /// be called by name after its definition and from its own body.
    fn create_function(
        &mut self,
        node: NodeId,
        name: Option<&Rc<str>>,
        params: &[Rc<str>],
        body: &Rc<Block>,
        scope: ScopeId,
    ) -> GcHandle {
        let closure = Closure::new(
            name.cloned(),
            params.to_vec(),
            Rc::clone(body),
            scope,
            node,
        );
        let function = self.alloc(Value::Function(Rc::new(closure)));
        if let Some(name) = name {
            self.scopes.declare(scope, name.clone(), function);
        }
        function
    }

    fn evaluate_assignment(
        &mut self,
        operator: AssignmentOperator,
        target: &Expression,
        value: &Expression,
        scope: ScopeId,
    ) -> Result<GcHandle, RuntimeError> {
        match target {
            Expression::Identifier { name, span, .. } => {
                let new_value = match operator.binary_operator() {
                    None => self.evaluate(value, scope)?,
                    Some(op) => {
                        let mark = self.root_mark();
                        let current = self.lookup(scope, name, *span)?;
                        self.protect(current);
                        let right = self.evaluate(value, scope);
                        self.release(mark);
                        self.apply_binary(op, current, right?)
                    }
                };
                if !self.scopes.assign(scope, name, new_value) {
                    // Assigning an undeclared name creates a global binding.
                    let global = self.scopes.global();
                    self.scopes.declare(global, name.clone(), new_value);
                }
                Ok(new_value)
            }
            Expression::Member {
                object, property, ..
            } => {
                let mark = self.root_mark();
                let result = self.assign_member(operator, object, property, value, scope);
                self.release(mark);
                result
            }
            other => Err(RuntimeError::InvalidAssignmentTarget {
                kind: other.kind_name(),
                span: other.span(),
            }),
        }
    }

    /// Caller releases the root stack.
    fn assign_member(
        &mut self,
        operator: AssignmentOperator,
        object: &Expression,
        property: &MemberProperty,
        value: &Expression,
        scope: ScopeId,
    ) -> Result<GcHandle, RuntimeError> {
        let target = self.evaluate(object, scope)?;
        self.protect(target);
        let key = self.property_key(property, scope)?;

        let new_value = match operator.binary_operator() {
            None => self.evaluate(value, scope)?,
            Some(op) => {
                let current = self.get_property(target, &key);
                self.protect(current);
                let right = self.evaluate(value, scope)?;
                self.apply_binary(op, current, right)
            }
        };
        self.set_property(target, key, new_value);
        Ok(new_value)
    }
}

fn literal_value(literal: &Literal) -> Value {
    match literal {
        Literal::Null => Value::Null,
        Literal::Boolean(value) => Value::Boolean(*value),
        Literal::String(text) => Value::String(Rc::clone(text)),
        Literal::Numeric(value) => Value::number(*value),
    }
}

fn unary_value(operator: UnaryOperator, argument: &Value) -> Value {
    match operator {
        UnaryOperator::Not => Value::Boolean(!argument.is_truthy()),
        UnaryOperator::Negate => match argument.to_number() {
            Ok(value) => Value::number(-value),
            Err(_) => Value::NaN,
        },
        UnaryOperator::Plus => match argument.to_number() {
            Ok(value) => Value::number(value),
            Err(_) => Value::NaN,
        },
        UnaryOperator::BitNot => match argument.to_number() {
            Ok(value) => Value::Numeric(f64::from(!to_int32(value))),
            Err(_) => Value::NaN,
        },
    }
}
