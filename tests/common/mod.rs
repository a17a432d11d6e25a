//! Common test utilities for themesync CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated theme directory plus helpers to run the binary
//! - Fixtures: small theme files and a recording event sink

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
