//! Style stage
//!
//! Compiles a `.sass`/`.scss` source, writes the `.css` output next to it and
//! marks the output in the ignore registry.

use std::io;
use std::path::Path;

use crate::domain::ports::{CompileOutcome, StyleCompiler};
use crate::domain::services::compiled_output_key;
use crate::domain::value_objects::AssetKey;
use crate::infrastructure::fs::LocalFs;

use super::IgnoreRegistry;

/// Compiles style sources below a working directory
pub struct StyleStage<'a, C: StyleCompiler> {
    compiler: &'a C,
    fs: &'a LocalFs,
    registry: &'a IgnoreRegistry,
}

impl<'a, C: StyleCompiler> StyleStage<'a, C> {
    pub fn new(compiler: &'a C, fs: &'a LocalFs, registry: &'a IgnoreRegistry) -> Self {
        Self {
            compiler,
            fs,
            registry,
        }
    }

    /// Compile `source`
    ///
    /// A syntax error is a `Failed` outcome and nothing is written. An
    /// unreadable source or a failed output write is an I/O error.
    pub fn compile(&self, source: &AssetKey) -> io::Result<CompileOutcome> {
        let content = self.fs.read_to_string(source)?;
        let source_path = self.fs.path_of(source);
        let load_path = source_path.parent().unwrap_or_else(|| Path::new("."));

        let css = match self.compiler.render(source, &content, load_path) {
            Ok(css) => css,
            Err(failure) => return Ok(CompileOutcome::Failed(failure)),
        };

        let output = compiled_output_key(source);
        self.fs.write(&output, css.as_bytes())?;
        self.registry.mark_ignored(output.clone());

        Ok(CompileOutcome::Compiled {
            output_path: output,
            output_content: css,
        })
    }
}
