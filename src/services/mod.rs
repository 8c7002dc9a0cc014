//! Business logic layer
//!
//! - `catalog`: the visible category snapshot and name lookup
//! - `allocation`: resolving a template into per-category amounts
//! - `sync`: applying an allocation to the service

pub mod allocation;
pub mod catalog;
pub mod sync;

pub use allocation::resolve;
pub use catalog::CategoryCatalog;
pub use sync::{CategoryUpdater, SyncAdapter, SyncOutcome, SyncReport};
