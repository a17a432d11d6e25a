//! Style Compiler Implementations

mod sass;

pub use sass::GrassCompiler;
