use crate::runtime::{
    error::RuntimeError,
    gc::GcHandle,
    scope::{ScopeId, ScopeKind},
    value::Value,
};
use crate::syntax::ast::{Block, Expression, Statement, VariableDeclarator};

use super::Interpreter;

/// Value of the last expression statement executed, if any.
pub(super) type Completion = Option<GcHandle>;

impl Interpreter {
    /// Runs `statements` in order in `scope`.
    ///
    /// Each statement boundary is a collection point; the running completion
    /// value stays rooted across it.
    pub(super) fn execute_statements(
        &mut self,
        statements: &[Statement],
        scope: ScopeId,
    ) -> Result<Completion, RuntimeError> {
        let mark = self.root_mark();
        let mut completion = None;

        for statement in statements {
            self.maybe_collect();
            match self.execute_statement(statement, scope) {
                Ok(Some(value)) => {
                    self.release(mark);
                    self.protect(value);
                    completion = Some(value);
                }
                Ok(None) => {}
                Err(err) => {
                    self.release(mark);
                    return Err(err);
                }
            }
        }

        self.release(mark);
        Ok(completion)
    }

    pub(super) fn execute_statement(
        &mut self,
        statement: &Statement,
        scope: ScopeId,
    ) -> Result<Completion, RuntimeError> {
        self.trace_node(statement.id(), statement.kind_name(), statement.span());

        match statement {
            Statement::Variable { declarations, .. } => {
                for declarator in declarations {
                    self.declare_variable(declarator, scope)?;
                }
                Ok(None)
            }
            Statement::If {
                condition,
                consequent,
                alternate,
                ..
            } => {
                let test = self.evaluate(condition, scope)?;
                if self.heap.get(test).is_truthy() {
                    self.execute_statement(consequent, scope)
                } else if let Some(alternate) = alternate {
                    self.execute_statement(alternate, scope)
                } else {
                    Ok(None)
                }
            }
            Statement::While { test, body, .. } => self.execute_while(test, body, scope),
            Statement::Expression { expression, .. } => Ok(Some(self.evaluate(expression, scope)?)),
            Statement::Block(block) => self.execute_block(block, scope),
        }
    }

    fn declare_variable(
        &mut self,
        declarator: &VariableDeclarator,
        scope: ScopeId,
    ) -> Result<(), RuntimeError> {
        self.trace_node(declarator.id, "VariableDeclarator", declarator.span);
        let value = match &declarator.init {
            Some(init) => self.evaluate(init, scope)?,
            None => self.alloc(Value::Undefined),
        };
        self.scopes.declare(scope, declarator.name.clone(), value);
        Ok(())
    }

    /// The test is re-evaluated before every iteration, the first included.
    fn execute_while(
        &mut self,
        test: &Expression,
        body: &Statement,
        scope: ScopeId,
    ) -> Result<Completion, RuntimeError> {
        let mark = self.root_mark();
        let mut completion = None;

        let result = loop {
            self.maybe_collect();
            let condition = match self.evaluate(test, scope) {
                Ok(condition) => condition,
                Err(err) => break Err(err),
            };
            if !self.heap.get(condition).is_truthy() {
                break Ok(completion);
            }
            match self.execute_statement(body, scope) {
                Ok(Some(value)) => {
                    self.release(mark);
                    self.protect(value);
                    completion = Some(value);
                }
                Ok(None) => {}
                Err(err) => break Err(err),
            }
        };

        self.release(mark);
        result
    }

    /// Runs a block in a fresh scope that is destroyed when the block ends.
    pub(super) fn execute_block(
        &mut self,
        block: &Block,
        scope: ScopeId,
    ) -> Result<Completion, RuntimeError> {
        let inner = self.scopes.push(scope, ScopeKind::Block, None);
        let result = self.execute_statements(&block.statements, inner);
        self.scopes.pop(inner);
        result
    }
}
