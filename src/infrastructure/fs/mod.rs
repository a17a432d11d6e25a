//! File System Implementations
//!
//! Local working directory access and inventory.

mod inventory;
mod local;

pub use inventory::{LocalInventory, DEFAULT_EXCLUSIONS};
pub use local::{atomic_write, LocalFs};
