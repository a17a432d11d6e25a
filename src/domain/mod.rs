//! Domain Layer
//!
//! The core of themesync - pure rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Assets and their payloads
//! - `value_objects/` - Keys, content kinds, config warnings
//! - `services/` - Classification, remote listing and style-source rules
//! - `ports/` - Interfaces for the store, compiler, notifier and event sinks
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
