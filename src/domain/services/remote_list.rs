//! Remote listing rules
//!
//! The store keeps a generated `X` next to its liquid-authored `X.liquid`
//! (for example `theme.css` rendered from `theme.css.liquid`). Only the
//! liquid source is visible to sync operations.

use std::collections::HashSet;

const LIQUID_SUFFIX: &str = ".liquid";

/// Drop every key whose `.liquid` counterpart is also listed
///
/// Order of the remaining keys is preserved.
pub fn visible_remote_keys(keys: Vec<String>) -> Vec<String> {
    let all: HashSet<&str> = keys.iter().map(String::as_str).collect();
    let hidden: HashSet<String> = keys
        .iter()
        .filter(|key| all.contains(format!("{key}{LIQUID_SUFFIX}").as_str()))
        .cloned()
        .collect();

    keys.into_iter().filter(|key| !hidden.contains(key)).collect()
}
