//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod classifier;
mod remote_list;
mod style;

pub use classifier::{
    classify, classify_with_encoding, encode_for_upload, is_binary_extension, normalize_newlines,
    BINARY_EXTENSIONS,
};
pub use remote_list::visible_remote_keys;
pub use style::{compiled_output_key, is_style_source, COMPILED_EXTENSION, STYLE_SOURCE_EXTENSIONS};
