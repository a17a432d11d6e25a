//! Content kind value object - how an asset payload travels on the wire

use serde::{Deserialize, Serialize};

/// Text vs binary classification of a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Sent as a `value` string
    Text,
    /// Sent as a base64 `attachment`
    Binary,
}

impl ContentKind {
    pub fn is_binary(&self) -> bool {
        matches!(self, ContentKind::Binary)
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Text => write!(f, "text"),
            ContentKind::Binary => write!(f, "binary"),
        }
    }
}

/// Encoding declared for a payload by whoever produced it
///
/// When present it replaces byte scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredEncoding {
    Ascii,
    Utf8,
    Binary,
}

impl DeclaredEncoding {
    /// The content kind implied by this encoding
    pub fn content_kind(&self) -> ContentKind {
        match self {
            DeclaredEncoding::Ascii | DeclaredEncoding::Utf8 => ContentKind::Text,
            DeclaredEncoding::Binary => ContentKind::Binary,
        }
    }
}
