use std::{collections::HashMap, hash::Hash, sync::Arc};
use tokio::sync::RwLock;

/// Generic in-process key-value map store.
///
/// Wraps a `HashMap<K, V>` behind one `RwLock`. Every helper takes the lock
/// exactly once, so each call observes and leaves the map in a consistent
/// state. Nothing is persisted; contents live as long as the process.
pub struct MemoryMapStore<K, V> {
    inner: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> Clone for MemoryMapStore<K, V> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<K, V> Default for MemoryMapStore<K, V> {
    fn default() -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())) }
    }
}

impl<K, V> MemoryMapStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone the whole map.
    pub async fn snapshot(&self) -> HashMap<K, V> {
        self.inner.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// First value (in map iteration order) matching the predicate.
    pub async fn find<P>(&self, pred: P) -> Option<V>
    where
        P: Fn(&V) -> bool,
    {
        let map = self.inner.read().await;
        map.values().find(|v| pred(*v)).cloned()
    }

    /// Insert or overwrite a value by key; returns the previous value.
    pub async fn insert(&self, key: K, value: V) -> Option<V> {
        let mut map = self.inner.write().await;
        map.insert(key, value)
    }

    /// Remove a key; returns the value it held.
    pub async fn remove(&self, key: &K) -> Option<V> {
        let mut map = self.inner.write().await;
        map.remove(key)
    }

    /// Run a mutation against the map under the write lock.
    pub async fn update_map<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut HashMap<K, V>) -> T,
    {
        let mut map = self.inner.write().await;
        f(&mut map)
    }
}
