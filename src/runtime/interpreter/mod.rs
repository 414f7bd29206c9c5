use std::io::{self, Write};
use std::rc::Rc;

use crate::diagnostics::Span;
use crate::runtime::{
    NativeFn, builtins,
    config::RuntimeConfig,
    error::{CoercionError, RuntimeError},
    gc::{CollectionReport, GcHandle, GcHeap, PoolUsage},
    native_function::NativeFunction,
    scope::{ScopeChain, ScopeId},
    value::Value,
};
use crate::syntax::ast::Program;

mod binary_ops;
mod comparison_ops;
mod expression;
mod function_call;
mod index_ops;
mod output;
mod statement;
mod trace;

pub use index_ops::PropertyKey;
pub use output::SharedOutput;

/// Tree-walking evaluator.
///
/// Owns the heap, the scope chain and a stack of temporary roots. Any handle
/// held across a nested evaluation is pushed on that stack (see
/// [`Self::protect`]) because a nested statement may trigger a collection.
pub struct Interpreter {
    heap: GcHeap,
    scopes: ScopeChain,
    roots: Vec<GcHandle>,
    config: RuntimeConfig,
    call_depth: usize,
    output: Box<dyn Write>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(RuntimeConfig::default())
    }
}

impl Interpreter {
    /// Creates an interpreter writing to stdout, with the builtin natives
    /// bound in the global scope.
    pub fn new(config: RuntimeConfig) -> Self {
        let mut heap = GcHeap::with_threshold(config.gc_threshold);
        heap.set_enabled(!config.disable_gc);

        let mut interpreter = Self {
            heap,
            scopes: ScopeChain::new(),
            roots: Vec::new(),
            config,
            call_depth: 0,
            output: Box::new(io::stdout()),
        };
        builtins::install(&mut interpreter);
        interpreter
    }

    /// Redirects `print` output.
    pub fn with_output(mut self, output: impl Write + 'static) -> Self {
        self.output = Box::new(output);
        self
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn heap(&self) -> &GcHeap {
        &self.heap
    }

    pub fn scopes(&self) -> &ScopeChain {
        &self.scopes
    }

    pub fn global_scope(&self) -> ScopeId {
        self.scopes.global()
    }

    /// Executes `program` in the global scope.
    ///
    /// Returns the completion value of the last expression statement run at
    /// the top level, or Undefined. Global bindings persist across runs.
    pub fn run(&mut self, program: &Program) -> Result<GcHandle, RuntimeError> {
        let global = self.scopes.global();
        self.execute(program, global)
    }

    /// Executes `program` with `scope` as its root scope.
    pub fn execute(&mut self, program: &Program, scope: ScopeId) -> Result<GcHandle, RuntimeError> {
        let mark = self.roots.len();
        self.trace_node(program.id, "Program", Span::default());
        self.trace_node(program.body.id, "Body", Span::default());

        let result = self.execute_statements(&program.body.statements, scope);
        self.roots.truncate(mark);

        if self.config.report_pool_usage {
            self.report_pool_usage();
        }
        match result? {
            Some(handle) => Ok(handle),
            None => Ok(self.alloc(Value::Undefined)),
        }
    }

    /// Stores `value` in a fresh heap slot.
    pub fn alloc(&mut self, value: Value) -> GcHandle {
        self.heap.alloc(value)
    }

    pub fn get(&self, handle: GcHandle) -> &Value {
        self.heap.get(handle)
    }

    /// Binds `name` in the global scope.
    pub fn define_global(&mut self, name: &str, value: Value) -> GcHandle {
        let handle = self.alloc(value);
        let global = self.scopes.global();
        self.scopes.declare(global, Rc::from(name), handle);
        handle
    }

    /// Registers a native function under `name` in the global scope.
    pub fn define_native(&mut self, name: &str, func: NativeFn) -> GcHandle {
        self.define_global(name, Value::NativeFunction(NativeFunction::new(name, func)))
    }

    /// Value bound to `name` in the global scope.
    pub fn global(&self, name: &str) -> Option<&Value> {
        self.scopes
            .lookup(self.scopes.global(), name)
            .ok()
            .and_then(|handle| self.heap.try_get(handle))
    }

    /// Calls a function value from outside the evaluator.
    pub fn call(
        &mut self,
        function: GcHandle,
        this: Option<GcHandle>,
        args: &[GcHandle],
    ) -> Result<GcHandle, RuntimeError> {
        let mark = self.roots.len();
        self.protect(function);
        self.roots.extend(this);
        self.roots.extend_from_slice(args);
        let result = self.call_value(function, this, args, Span::default());
        self.roots.truncate(mark);
        result
    }

    pub fn stringify(&self, handle: GcHandle) -> Result<String, CoercionError> {
        self.heap.get(handle).to_display_string(&self.heap)
    }

    /// Writes one line to the output sink.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()
    }

    /// Runs a collection now unless GC is disabled.
    pub fn collect_garbage(&mut self) -> Option<CollectionReport> {
        if self.config.disable_gc {
            tracing::debug!("collection skipped: gc disabled");
            return None;
        }
        let report = self.heap.collect(&self.scopes, &self.roots);
        if self.config.report_pool_usage {
            self.report_pool_usage();
        }
        Some(report)
    }

    pub fn pool_usage(&self) -> PoolUsage {
        self.heap.usage()
    }

    pub fn report_pool_usage(&self) {
        let usage = self.heap.usage();
        tracing::info!(
            slots = usage.slots,
            live = usage.live,
            free = usage.free,
            total_allocations = usage.total_allocations,
            total_collections = usage.total_collections,
            total_freed = usage.total_freed,
            threshold = usage.threshold,
            "pool usage"
        );
    }

    /// Collects if the allocation threshold was reached. Only called where no
    /// unrooted handle is live: between statements and loop iterations.
    fn maybe_collect(&mut self) {
        if self.heap.should_collect() {
            self.collect_garbage();
        }
    }

    /// Keeps `handle` alive until the root stack is truncated below it.
    fn protect(&mut self, handle: GcHandle) {
        self.roots.push(handle);
    }

    fn root_mark(&self) -> usize {
        self.roots.len()
    }

    fn release(&mut self, mark: usize) {
        self.roots.truncate(mark);
    }
}

impl Program {
    /// Runs the program on `interpreter` in its global scope.
    pub fn execute(&self, interpreter: &mut Interpreter) -> Result<GcHandle, RuntimeError> {
        interpreter.run(self)
    }
}

#[cfg(test)]
mod comparison_ops_test;
#[cfg(test)]
mod function_call_test;
#[cfg(test)]
mod test_support;
