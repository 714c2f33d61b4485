use std::collections::BTreeMap;

/// Coalescing queue for keyed state changes.
///
/// Key properties:
/// - Per key, the last queued value wins; superseded values are never
///   applied.
/// - Draining yields at most one entry per key, in key order.
/// - Draining leaves the queue empty.
///
/// Rapid-fire changes batch here so one flush converges on a single
/// consistent final state instead of replaying every intermediate one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeQueue<K: Ord, V> {
    pending: BTreeMap<K, V>,
}

impl<K: Ord, V> Default for ChangeQueue<K, V> {
    fn default() -> Self {
        Self {
            pending: BTreeMap::new(),
        }
    }
}

impl<K: Ord, V> ChangeQueue<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a change, superseding any pending change for the same key.
    /// Returns the superseded value, if there was one.
    pub fn queue(&mut self, key: K, value: V) -> Option<V> {
        self.pending.insert(key, value)
    }

    /// Pending keys, not queued changes: superseded values don't count.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take everything pending, in key order.
    pub fn drain(&mut self) -> Vec<(K, V)> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::ChangeQueue;

    #[test]
    fn last_queued_value_per_key_wins() {
        let mut queue = ChangeQueue::new();
        assert_eq!(queue.queue("x", 1), None);
        assert_eq!(queue.queue("x", 2), Some(1));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.drain(), vec![("x", 2)]);
    }

    #[test]
    fn drain_yields_key_order_and_empties_the_queue() {
        let mut queue = ChangeQueue::new();
        queue.queue("y", 20);
        queue.queue("x", 10);
        queue.queue("z", 30);

        assert_eq!(queue.drain(), vec![("x", 10), ("y", 20), ("z", 30)]);
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }
}
