//! Runtime: value model, heap, scope chain and the tree-walking evaluator.
//!
//! # Ownership
//! Every runtime value lives in a [`gc::GcHeap`] slot. Values refer to each
//! other, and scope frames refer to values, only through [`gc::GcHandle`]s, so
//! reference cycles between objects are allowed and reclaimed by the
//! mark-and-sweep collector. Roots are the bindings of all live scope frames
//! plus the interpreter's temporary-root stack.
use crate::runtime::gc::GcHandle;

pub mod builtins;
pub mod closure;
pub mod config;
pub mod error;
pub mod frame;
pub mod gc;
pub mod interpreter;
pub mod native_function;
pub mod number;
pub mod property_map;
pub mod scope;
pub mod value;

/// Signature of a native function: arguments arrive as handles, the result
/// is a handle the native allocated (or received). `Err` aborts the run.
pub type NativeFn = fn(&mut Interpreter, &[GcHandle]) -> Result<GcHandle, String>;

pub use config::RuntimeConfig;
pub use error::{CoercionError, RuntimeError};
pub use interpreter::Interpreter;
pub use value::Value;
