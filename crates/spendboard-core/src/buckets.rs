//! Label-keyed accumulator that remembers first-insertion order.

use std::collections::HashMap;

/// Ordered map used for grouped reductions.
///
/// Iteration yields buckets in the order their key was first seen, which the
/// chart ranking relies on for tie-breaking.
#[derive(Debug, Clone)]
pub struct OrderedBuckets<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K, V> Default for OrderedBuckets<K, V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K, V> OrderedBuckets<K, V>
where
    K: Eq + std::hash::Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bucket for `key`, initialising it with `init` on first sight.
    pub fn upsert_with(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V {
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.index.insert(key.clone(), position);
                self.entries.push((key, init()));
                position
            }
        };
        &mut self.entries[position].1
    }

    pub fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

impl<K, V> OrderedBuckets<K, V>
where
    K: Eq + std::hash::Hash + Clone,
    V: Default,
{
    /// Upsert-or-initialise with `V::default()`.
    pub fn upsert(&mut self, key: K) -> &mut V {
        self.upsert_with(key, V::default)
    }
}
