//! Content Classifier Domain Service
//!
//! Decides whether a payload travels as a text `value` or as a base64
//! `attachment`. Pure functions over the bytes; nothing is attached to
//! built-in types.

use crate::domain::entities::AssetPayload;
use crate::domain::value_objects::{AssetKey, ContentKind, DeclaredEncoding};

/// Extensions that are always uploaded as attachments (case-sensitive)
pub const BINARY_EXTENSIONS: &[&str] = &["png", "gif", "jpg", "jpeg", "eot", "svg", "ttf", "woff", "swf"];

/// Share of non-printable bytes above which content is binary
pub const BINARY_THRESHOLD: f64 = 0.3;

fn is_printable(byte: u8) -> bool {
    matches!(byte, b' '..=b'~' | b'\r' | b'\n')
}

/// Classify a payload by scanning its bytes
///
/// Empty content is text. Content is binary when it holds a NUL byte or when
/// more than 30% of its bytes fall outside printable ASCII plus CR/LF.
pub fn classify(bytes: &[u8]) -> ContentKind {
    if bytes.is_empty() {
        return ContentKind::Text;
    }
    if bytes.contains(&0) {
        return ContentKind::Binary;
    }

    let non_printable = bytes.iter().filter(|b| !is_printable(**b)).count();
    if non_printable as f64 / bytes.len() as f64 > BINARY_THRESHOLD {
        ContentKind::Binary
    } else {
        ContentKind::Text
    }
}

/// Classify a payload, trusting a declared encoding when one is known
pub fn classify_with_encoding(bytes: &[u8], declared: Option<DeclaredEncoding>) -> ContentKind {
    match declared {
        Some(encoding) => encoding.content_kind(),
        None => classify(bytes),
    }
}

/// True if the key's extension is in [`BINARY_EXTENSIONS`]
pub fn is_binary_extension(key: &AssetKey) -> bool {
    key.extension()
        .map(|ext| BINARY_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Strip every carriage return (CRLF -> LF)
pub fn normalize_newlines(text: &str) -> String {
    text.replace('\r', "")
}

/// Choose the wire payload for local file content
///
/// Binary when the bytes classify as binary, the extension is a known binary
/// one, or the bytes are not valid UTF-8. Otherwise text with `\r` removed.
pub fn encode_for_upload(key: &AssetKey, bytes: Vec<u8>) -> AssetPayload {
    if is_binary_extension(key) || classify(&bytes).is_binary() {
        return AssetPayload::Binary(bytes);
    }

    match String::from_utf8(bytes) {
        Ok(text) => AssetPayload::Text(normalize_newlines(&text)),
        Err(err) => AssetPayload::Binary(err.into_bytes()),
    }
}
