//! Stats command
//!
//! Shows or clears the persisted score and streak.

use crate::game::Stats;
use crate::store::{StateStore, StoreError};

/// Read the counters, clearing them first when `reset` is set
///
/// # Errors
///
/// Returns an error if a reset cannot be persisted.
pub fn run_stats<S: StateStore>(store: &mut S, reset: bool) -> Result<Stats, StoreError> {
    if reset {
        store.save_stats(Stats::default())?;
        tracing::info!("stats reset");
    }
    Ok(store.load_stats())
}
