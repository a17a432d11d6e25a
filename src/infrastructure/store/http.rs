//! HTTP Asset Store
//!
//! Authenticated REST client for the `/admin/assets.json` endpoint:
//! - `GET`    list every asset key
//! - `GET`    `?asset[key]=K` fetch one asset
//! - `PUT`    `{"asset": {...}}` create or overwrite
//! - `DELETE` `?asset[key]=K` delete

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;
use tracing::debug;

use crate::config::Config;
use crate::domain::entities::Asset;
use crate::domain::ports::{AssetStore, StoreError, StoreResult};
use crate::domain::value_objects::AssetKey;

use super::wire::{parse_field_errors, AssetEnvelope, AssetListResponse, AssetResponse, WireAsset};

const ASSETS_PATH: &str = "/admin/assets.json";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Asset store reached over HTTP(S) with basic auth
pub struct HttpAssetStore {
    base_url: String,
    api_key: String,
    password: String,
    http: Client,
}

impl HttpAssetStore {
    /// Create a client for `store` (host name or full base URL)
    pub fn new(store: &str, api_key: &str, password: &str) -> StoreResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("themesync/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url(store),
            api_key: api_key.to_string(),
            password: password.to_string(),
            http,
        })
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> StoreResult<Self> {
        Self::new(&config.store, &config.api_key, &config.password)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, ASSETS_PATH)
    }

    fn send(&self, request: RequestBuilder) -> StoreResult<Response> {
        let response = request
            .basic_auth(&self.api_key, Some(&self.password))
            .send()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        debug!(status = status.as_u16(), body = %body, "store returned an error");
        Err(rejection(status, &body))
    }
}

impl AssetStore for HttpAssetStore {
    fn list(&self) -> StoreResult<Vec<String>> {
        debug!(url = %self.endpoint(), "GET asset list");
        let response = self.send(self.http.get(self.endpoint()))?;
        let parsed: AssetListResponse = response
            .json()
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;
        Ok(parsed.assets.into_iter().map(|a| a.key).collect())
    }

    fn get(&self, key: &AssetKey) -> StoreResult<Asset> {
        debug!(key = %key, "GET asset");
        let request = self
            .http
            .get(self.endpoint())
            .query(&[("asset[key]", key.as_str())]);
        let parsed: AssetResponse = self
            .send(request)?
            .json()
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;
        parsed.asset.into_asset()
    }

    fn put(&self, asset: &Asset) -> StoreResult<()> {
        debug!(key = %asset.key(), kind = %asset.kind(), "PUT asset");
        let wire = WireAsset::from(asset);
        let request = self
            .http
            .put(self.endpoint())
            .json(&AssetEnvelope { asset: &wire });
        self.send(request).map(|_| ())
    }

    fn delete(&self, key: &AssetKey) -> StoreResult<()> {
        debug!(key = %key, "DELETE asset");
        let request = self
            .http
            .delete(self.endpoint())
            .query(&[("asset[key]", key.as_str())]);
        self.send(request).map(|_| ())
    }
}

/// Normalize a configured store into a base URL without trailing slash
///
/// Bare host names get `https://`.
pub fn base_url(store: &str) -> String {
    let store = store.trim().trim_end_matches('/');
    if store.starts_with("http://") || store.starts_with("https://") {
        store.to_string()
    } else {
        format!("https://{}", store)
    }
}

fn rejection(status: StatusCode, body: &str) -> StoreError {
    let mut errors = parse_field_errors(body);
    if status == StatusCode::NOT_FOUND && errors.is_empty() {
        return StoreError::NotFound(status.to_string());
    }
    if errors.is_empty() {
        errors.insert(
            super::wire::BASE_ERROR_FIELD.to_string(),
            vec![status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()],
        );
    }
    StoreError::Rejected {
        status: status.as_u16(),
        errors,
    }
}
