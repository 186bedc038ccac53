//! In-memory store for tests and throwaway sessions

use super::{StateStore, StoreError, StoreKey};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: FxHashMap<StoreKey, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: StoreKey) -> Option<String> {
        self.values.get(&key).cloned()
    }

    fn set(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError> {
        self.values.insert(key, value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Stats;

    #[test]
    fn empty_store_reads_defaults() {
        let store = MemoryStore::new();
        assert_eq!(store.load_stats(), Stats::default());
        assert!(!store.tutorial_seen());
    }

    #[test]
    fn stats_round_trip() {
        let mut store = MemoryStore::new();
        let stats = Stats { score: 1200, streak: 4 };
        store.save_stats(stats).unwrap();
        assert_eq!(store.load_stats(), stats);
        assert_eq!(store.get(StoreKey::Score).as_deref(), Some("1200"));
    }

    #[test]
    fn unparsable_counter_reads_zero() {
        let mut store = MemoryStore::new();
        store.set(StoreKey::Score, "lots").unwrap();
        store.set(StoreKey::Streak, "3").unwrap();
        assert_eq!(store.load_stats(), Stats { score: 0, streak: 3 });
    }

    #[test]
    fn tutorial_flag() {
        let mut store = MemoryStore::new();
        store.mark_tutorial_seen().unwrap();
        assert!(store.tutorial_seen());
    }
}
