//! Style Compiler Port
//!
//! Renders a style-sheet source (`.sass` / `.scss`) to CSS.

use std::fmt;
use std::path::Path;

use crate::domain::value_objects::AssetKey;

/// A syntax error reported by the compiler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileFailure {
    /// File the error originates from
    pub filename: String,
    /// 1-based line number
    pub line: usize,
    pub message: String,
}

impl fmt::Display for CompileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} - {}", self.filename, self.line, self.message)
    }
}

impl std::error::Error for CompileFailure {}

/// Result of compiling one style source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileOutcome {
    /// Compiled; `output_path` has already been written
    Compiled {
        output_path: AssetKey,
        output_content: String,
    },
    /// Syntax error; nothing was written
    Failed(CompileFailure),
}

impl CompileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CompileOutcome::Compiled { .. })
    }
}

/// Style-sheet compiler
pub trait StyleCompiler: Send + Sync {
    /// Render `source` (the content of `key`) to CSS
    ///
    /// `load_path` is the directory imports resolve against.
    fn render(&self, key: &AssetKey, source: &str, load_path: &Path)
        -> Result<String, CompileFailure>;
}
