//! Domain Entities
//!
//! - `Asset` - a theme file with its text or binary payload

mod asset;

pub use asset::{Asset, AssetPayload};
