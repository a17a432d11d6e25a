//! Sass/SCSS compiler backed by the `grass` crate

use std::path::Path;

use grass::{ErrorKind, InputSyntax, Options};

use crate::domain::ports::{CompileFailure, StyleCompiler};
use crate::domain::value_objects::AssetKey;

/// Pure-Rust Sass compiler
#[derive(Debug, Clone, Copy, Default)]
pub struct GrassCompiler;

impl GrassCompiler {
    pub fn new() -> Self {
        Self
    }
}

fn input_syntax(key: &AssetKey) -> InputSyntax {
    match key.extension() {
        Some("sass") => InputSyntax::Sass,
        _ => InputSyntax::Scss,
    }
}

impl StyleCompiler for GrassCompiler {
    fn render(
        &self,
        key: &AssetKey,
        source: &str,
        load_path: &Path,
    ) -> Result<String, CompileFailure> {
        let options = Options::default()
            .input_syntax(input_syntax(key))
            .load_path(load_path);

        grass::from_string(source.to_string(), &options).map_err(|err| {
            let rendered = err.to_string();
            let (line, message) = match err.kind() {
                // grass lines are 0-based
                ErrorKind::ParseError { message, loc, .. } => (loc.begin.line + 1, message),
                _ => (1, rendered),
            };
            CompileFailure {
                filename: key.to_string(),
                line,
                message,
            }
        })
    }
}
