//! Native functions bound in the global scope of every interpreter.

use crate::runtime::{NativeFn, interpreter::Interpreter};

mod conversion_ops;
mod gc_ops;
mod helpers;
mod io_ops;
mod type_check;

use conversion_ops::{native_number, native_string};
use gc_ops::native_gc;
use io_ops::native_print;
use type_check::native_type_of;

/// Every builtin native, in registration order.
pub static NATIVES: &[(&str, NativeFn)] = &[
    ("print", native_print),
    ("typeof", native_type_of),
    ("String", native_string),
    ("Number", native_number),
    ("gc", native_gc),
];

/// Binds every entry of [`NATIVES`] in the global scope.
pub fn install(interpreter: &mut Interpreter) {
    for (name, func) in NATIVES {
        interpreter.define_native(name, *func);
    }
}

#[cfg(test)]
mod conversion_ops_test;
#[cfg(test)]
mod io_ops_test;
