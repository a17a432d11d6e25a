//! JSON wire format of the assets endpoint
//!
//! ```json
//! {"asset": {"key": "layout/theme.liquid", "value": "<html>..."}}
//! {"asset": {"key": "assets/logo.png", "attachment": "iVBORw0KGgo..."}}
//! {"errors": {"asset": ["is too big"]}}
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Asset, AssetPayload};
use crate::domain::ports::{FieldErrors, StoreError, StoreResult};
use crate::domain::value_objects::AssetKey;

/// Field name used when the store returns an unstructured error
pub const BASE_ERROR_FIELD: &str = "base";

#[derive(Debug, Deserialize)]
pub(crate) struct AssetListResponse {
    pub assets: Vec<AssetSummary>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssetSummary {
    pub key: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssetResponse {
    pub asset: WireAsset,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssetEnvelope<'a> {
    pub asset: &'a WireAsset,
}

/// One asset as it appears in request and response bodies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireAsset {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

impl From<&Asset> for WireAsset {
    fn from(asset: &Asset) -> Self {
        let key = asset.key().to_string();
        match asset.payload() {
            AssetPayload::Text(text) => Self {
                key,
                value: Some(text.clone()),
                attachment: None,
            },
            AssetPayload::Binary(bytes) => Self {
                key,
                value: None,
                attachment: Some(STANDARD.encode(bytes)),
            },
        }
    }
}

impl WireAsset {
    /// Decode into a domain asset
    ///
    /// A `value` wins over an `attachment`; attachments may contain line
    /// breaks, which are dropped before decoding.
    pub fn into_asset(self) -> StoreResult<Asset> {
        let key = AssetKey::new(&self.key)
            .map_err(|e| StoreError::InvalidResponse(format!("key '{}': {}", self.key, e)))?;

        if let Some(value) = self.value {
            return Ok(Asset::text(key, value));
        }

        match self.attachment {
            Some(encoded) => {
                let compact: String = encoded.split_whitespace().collect();
                let bytes = STANDARD.decode(compact.as_bytes()).map_err(|e| {
                    StoreError::InvalidResponse(format!("attachment of '{}': {}", key, e))
                })?;
                Ok(Asset::binary(key, bytes))
            }
            None => Err(StoreError::InvalidResponse(format!(
                "asset '{}' has neither value nor attachment",
                key
            ))),
        }
    }
}

/// Parse an error body into field errors
///
/// Accepts `{"errors": {field: [msg, ..]}}`, `{"errors": {field: msg}}` and
/// `{"errors": "msg"}`. Anything else lands under [`BASE_ERROR_FIELD`].
pub fn parse_field_errors(body: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    match parsed.as_ref().and_then(|v| v.get("errors")) {
        Some(serde_json::Value::Object(map)) => {
            for (field, value) in map {
                errors.insert(field.clone(), value_messages(value));
            }
        }
        Some(other) => {
            errors.insert(BASE_ERROR_FIELD.to_string(), value_messages(other));
        }
        None => {
            let trimmed = body.trim();
            if !trimmed.is_empty() {
                errors.insert(BASE_ERROR_FIELD.to_string(), vec![trimmed.to_string()]);
            }
        }
    }

    errors
}

fn value_messages(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(items) => items.iter().map(value_message).collect(),
        other => vec![value_message(other)],
    }
}

fn value_message(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> AssetKey {
        AssetKey::new(s).unwrap()
    }

    #[test]
    fn text_asset_serializes_value_only() {
        let wire = WireAsset::from(&Asset::text(key("a.css"), "body{}"));
        let json = serde_json::to_string(&AssetEnvelope { asset: &wire }).unwrap();
        assert_eq!(json, r#"{"asset":{"key":"a.css","value":"body{}"}}"#);
    }

    #[test]
    fn binary_asset_serializes_attachment_only() {
        let wire = WireAsset::from(&Asset::binary(key("a.png"), vec![0u8, 1, 2]));
        assert_eq!(wire.value, None);
        assert_eq!(wire.attachment.as_deref(), Some("AAEC"));
    }

    #[test]
    fn attachment_with_line_breaks_decodes() {
        let wire = WireAsset {
            key: "assets/a.png".to_string(),
            value: None,
            attachment: Some("AA\nEC\n".to_string()),
        };
        let asset = wire.into_asset().unwrap();
        assert_eq!(asset.payload(), &AssetPayload::Binary(vec![0, 1, 2]));
    }

    #[test]
    fn asset_without_payload_is_invalid() {
        let wire = WireAsset {
            key: "assets/a.png".to_string(),
            value: None,
            attachment: None,
        };
        assert!(matches!(
            wire.into_asset(),
            Err(StoreError::InvalidResponse(_))
        ));
    }

    #[test]
    fn traversal_key_is_invalid() {
        let wire = WireAsset {
            key: "../outside".to_string(),
            value: Some(String::new()),
            attachment: None,
        };
        assert!(matches!(
            wire.into_asset(),
            Err(StoreError::InvalidResponse(_))
        ));
    }

    #[test]
    fn parse_structured_errors() {
        let errors = parse_field_errors(r#"{"errors":{"asset":["is too big","is bad"],"key":"taken"}}"#);
        assert_eq!(errors["asset"], vec!["is too big", "is bad"]);
        assert_eq!(errors["key"], vec!["taken"]);
    }

    #[test]
    fn parse_string_error() {
        let errors = parse_field_errors(r#"{"errors":"Not Found"}"#);
        assert_eq!(errors[BASE_ERROR_FIELD], vec!["Not Found"]);
    }

    #[test]
    fn parse_non_json_error() {
        let errors = parse_field_errors("Service Unavailable");
        assert_eq!(errors[BASE_ERROR_FIELD], vec!["Service Unavailable"]);
        assert!(parse_field_errors("").is_empty());
    }
}
