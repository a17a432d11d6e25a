//! Asset entity - one theme file as the remote store knows it
//!
//! An asset carries exactly one payload: a text value or a binary attachment.
//! Modelling the payload as an enum makes "never both" hold by construction.

use crate::domain::value_objects::{AssetKey, ContentKind};

/// Payload of an asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetPayload {
    /// Text content (newlines normalized to `\n`)
    Text(String),
    /// Raw bytes (base64 on the wire)
    Binary(Vec<u8>),
}

impl AssetPayload {
    /// Content kind of this payload
    pub fn kind(&self) -> ContentKind {
        match self {
            AssetPayload::Text(_) => ContentKind::Text,
            AssetPayload::Binary(_) => ContentKind::Binary,
        }
    }

    /// Raw bytes as they should land on disk
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            AssetPayload::Text(text) => text.as_bytes(),
            AssetPayload::Binary(bytes) => bytes,
        }
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A theme asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    key: AssetKey,
    payload: AssetPayload,
}

impl Asset {
    /// Create a new asset
    pub fn new(key: AssetKey, payload: AssetPayload) -> Self {
        Self { key, payload }
    }

    /// Create a text asset
    pub fn text(key: AssetKey, value: impl Into<String>) -> Self {
        Self::new(key, AssetPayload::Text(value.into()))
    }

    /// Create a binary asset
    pub fn binary(key: AssetKey, bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(key, AssetPayload::Binary(bytes.into()))
    }

    pub fn key(&self) -> &AssetKey {
        &self.key
    }

    pub fn payload(&self) -> &AssetPayload {
        &self.payload
    }

    pub fn kind(&self) -> ContentKind {
        self.payload.kind()
    }

    /// Consume the asset, returning its parts
    pub fn into_parts(self) -> (AssetKey, AssetPayload) {
        (self.key, self.payload)
    }
}
