use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Key/value store abstraction for the in-memory services.
///
/// Listing is ordered by key.
pub trait KeyedStore<K, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<V>;
    fn upsert(&self, key: K, value: V);
    fn remove(&self, key: &K) -> Option<V>;
    fn list(&self) -> Vec<V>;
}

impl<K, V, S> KeyedStore<K, V> for Arc<S>
where
    S: KeyedStore<K, V> + ?Sized,
{
    fn get(&self, key: &K) -> Option<V> {
        (**self).get(key)
    }

    fn upsert(&self, key: K, value: V) {
        (**self).upsert(key, value)
    }

    fn remove(&self, key: &K) -> Option<V> {
        (**self).remove(key)
    }

    fn list(&self) -> Vec<V> {
        (**self).list()
    }
}

/// In-memory store for tests/dev.
#[derive(Debug)]
pub struct InMemoryStore<K, V> {
    inner: RwLock<BTreeMap<K, V>>,
}

impl<K, V> InMemoryStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
        }
    }

    // A writer that panicked cannot leave the map half-updated, so a
    // poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<K, V>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<K, V>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, V> Default for InMemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> KeyedStore<K, V> for InMemoryStore<K, V>
where
    K: Clone + Ord + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &K) -> Option<V> {
        self.read().get(key).cloned()
    }

    fn upsert(&self, key: K, value: V) {
        self.write().insert(key, value);
    }

    fn remove(&self, key: &K) -> Option<V> {
        self.write().remove(key)
    }

    fn list(&self) -> Vec<V> {
        self.read().values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_is_key_ordered() {
        let store: InMemoryStore<i32, &str> = InMemoryStore::new();
        store.upsert(3, "c");
        store.upsert(1, "a");
        store.upsert(2, "b");
        assert_eq!(store.list(), vec!["a", "b", "c"]);
    }

    #[test]
    fn upsert_replaces_and_remove_returns_old_value() {
        let store: Arc<InMemoryStore<i32, String>> = Arc::new(InMemoryStore::new());
        store.upsert(1, "old".to_string());
        store.upsert(1, "new".to_string());
        assert_eq!(store.get(&1).as_deref(), Some("new"));
        assert_eq!(store.remove(&1).as_deref(), Some("new"));
        assert_eq!(store.get(&1), None);
        assert_eq!(store.remove(&1), None);
    }

    #[test]
    fn writes_survive_a_poisoned_lock() {
        let store = Arc::new(InMemoryStore::<i32, i32>::new());
        store.upsert(1, 1);

        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(store.inner.is_poisoned());

        store.upsert(2, 2);
        assert_eq!(store.list(), vec![1, 2]);
        assert_eq!(store.remove(&1), Some(1));
    }
}
