//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_key;
mod config_warning;
mod content_kind;
mod ignore_patterns;

pub use asset_key::{AssetKey, KeyError};
pub use config_warning::ConfigWarning;
pub use content_kind::{ContentKind, DeclaredEncoding};
pub use ignore_patterns::{IgnoreError, IgnorePatterns};
