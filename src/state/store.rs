use crate::catalog::Library;
use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// One immutable catalog as seen by a single reader operation.
#[derive(Debug)]
pub struct Snapshot {
    pub library: Library,
    /// Starts at 1 for the startup load and grows by one per publish
    pub generation: u64,
    pub loaded_at: DateTime<Utc>,
}

/// The process-wide "current catalog" slot.
///
/// Readers call [`CatalogStore::snapshot`] once at the start of an operation
/// and keep the returned `Arc` for its whole duration; no lock is held while
/// they traverse it. The reload task is the only caller of
/// [`CatalogStore::publish`], which swaps in a complete new snapshot in one
/// atomic store.
#[derive(Debug)]
pub struct CatalogStore {
    current: ArcSwap<Snapshot>,
}

impl CatalogStore {
    /// Create the store around the startup catalog (generation 1).
    pub fn new(library: Library) -> Self {
        Self {
            current: ArcSwap::from_pointee(Snapshot {
                library,
                generation: 1,
                loaded_at: Utc::now(),
            }),
        }
    }

    /// Acquire the current snapshot.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    /// Replace the current snapshot and return its generation.
    ///
    /// Must only be called from a single writer; the generation is derived
    /// from the snapshot being replaced.
    pub fn publish(&self, library: Library) -> u64 {
        let generation = self.current.load().generation + 1;
        self.current.store(Arc::new(Snapshot {
            library,
            generation,
            loaded_at: Utc::now(),
        }));
        generation
    }

    pub fn generation(&self) -> u64 {
        self.current.load().generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Module, Package};

    fn library_with(package: &str) -> Library {
        let modules: Package = [Module::new("m")].into_iter().collect();
        [(package, modules)].into_iter().collect()
    }

    #[test]
    fn test_publish_bumps_generation() {
        let store = CatalogStore::new(library_with("old"));
        assert_eq!(store.generation(), 1);
        assert_eq!(store.publish(library_with("new")), 2);
        assert_eq!(store.generation(), 2);
        assert!(store.snapshot().library.package("new").is_some());
    }

    #[test]
    fn test_held_snapshot_survives_publish() {
        let store = CatalogStore::new(library_with("old"));
        let held = store.snapshot();
        store.publish(library_with("new"));

        assert_eq!(held.generation, 1);
        assert!(held.library.package("old").is_some());
        assert!(held.library.package("new").is_none());
        assert!(store.snapshot().library.package("old").is_none());
    }
}
