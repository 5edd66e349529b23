mod calculator;
mod environment;
mod errors;
mod interpreter;
mod native_funcs;
mod value;

pub use environment::Environment;
pub use errors::{RuntimeError, RuntimeResult};
pub use interpreter::Interpreter;
pub use native_funcs::NativeFn;
pub use value::Value;
