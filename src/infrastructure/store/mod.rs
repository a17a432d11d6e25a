//! Asset Store Implementations
//!
//! Concrete implementations of the AssetStore port.

mod http;
mod memory;
pub mod wire;

pub use http::{base_url, HttpAssetStore};
pub use memory::{InMemoryAssetStore, StoreCall};
