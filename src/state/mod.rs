//! Shared catalog state: the atomically swapped snapshot slot and the task
//! that keeps it fresh.

pub mod reload;
pub mod store;

pub use reload::{ReloadHandle, ReloadScheduler, RELOAD_PERIOD};
pub use store::{CatalogStore, Snapshot};
