//! Cleanup system: destroys entities marked `Removed`.
//!
//! The only place entities are despawned. Runs at the end of each tick so
//! every system sees the same entities while the tick is in progress.

use tracing::trace;

use crate::store::EntityStore;

/// Despawn all marked entities, firing removal listeners once per entity.
/// Returns the number of entities destroyed.
pub fn run(store: &mut EntityStore) -> usize {
    let removed = store.flush_removals();
    if removed > 0 {
        trace!(removed, "entities despawned");
    }
    removed
}
