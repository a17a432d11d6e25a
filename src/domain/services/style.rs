//! Style-sheet source rules
//!
//! Which keys go through the style compiler and where their output lands.

use crate::domain::value_objects::AssetKey;

/// Extensions compiled before upload
pub const STYLE_SOURCE_EXTENSIONS: &[&str] = &["sass", "scss"];

/// Extension of compiled output
pub const COMPILED_EXTENSION: &str = "css";

/// True for `.sass` / `.scss` keys
pub fn is_style_source(key: &AssetKey) -> bool {
    key.extension()
        .map(|ext| STYLE_SOURCE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Key of the compiled output for a style source (`x.scss` -> `x.css`)
pub fn compiled_output_key(source: &AssetKey) -> AssetKey {
    source.with_extension(COMPILED_EXTENSION)
}
