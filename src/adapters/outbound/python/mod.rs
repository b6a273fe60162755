/// Python interpreter adapter for locating site-packages directories
mod interpreter;

pub use interpreter::{PythonInterpreter, DEFAULT_PYTHON};
