//! Asset Store Port
//!
//! Abstracts the remote key/value asset store. The HTTP client lives in
//! infrastructure; tests use the in-memory store.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::entities::Asset;
use crate::domain::value_objects::AssetKey;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Field-level error messages returned by the store (`field -> [message]`)
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Error returned by the asset store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Network or authentication failure reaching the store
    #[error("connection error: {0}")]
    Transport(String),

    /// The store answered with an error status
    #[error("store rejected request ({status}): {}", join_field_errors(.errors))]
    Rejected { status: u16, errors: FieldErrors },

    /// Asset does not exist remotely
    #[error("asset not found: {0}")]
    NotFound(String),

    /// The store answered with something we could not decode
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl StoreError {
    /// User-facing messages, one per field for rejected requests
    pub fn messages(&self) -> Vec<String> {
        match self {
            StoreError::Rejected { errors, .. } if !errors.is_empty() => {
                errors.values().map(|values| values.join(", ")).collect()
            }
            other => vec![other.to_string()],
        }
    }
}

fn join_field_errors(errors: &FieldErrors) -> String {
    if errors.is_empty() {
        return "no details".to_string();
    }
    errors
        .iter()
        .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Remote asset store
///
/// Implementations:
/// - `HttpAssetStore` - authenticated REST client
/// - `InMemoryAssetStore` - map-backed, records calls (tests, offline runs)
pub trait AssetStore: Send + Sync {
    /// Keys of every asset currently stored (unfiltered)
    fn list(&self) -> StoreResult<Vec<String>>;

    /// Fetch one asset
    fn get(&self, key: &AssetKey) -> StoreResult<Asset>;

    /// Create or overwrite an asset
    fn put(&self, asset: &Asset) -> StoreResult<()>;

    /// Delete an asset
    fn delete(&self, key: &AssetKey) -> StoreResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_messages_join_per_field() {
        let mut errors = FieldErrors::new();
        errors.insert(
            "asset".to_string(),
            vec!["is too big".to_string(), "is invalid".to_string()],
        );
        errors.insert("key".to_string(), vec!["is reserved".to_string()]);
        let err = StoreError::Rejected {
            status: 422,
            errors,
        };

        assert_eq!(
            err.messages(),
            vec!["is too big, is invalid".to_string(), "is reserved".to_string()]
        );
        assert_eq!(
            err.to_string(),
            "store rejected request (422): asset: is too big, is invalid; key: is reserved"
        );
    }

    #[test]
    fn transport_message() {
        let err = StoreError::Transport("timed out".to_string());
        assert_eq!(err.messages(), vec!["connection error: timed out".to_string()]);
    }
}
