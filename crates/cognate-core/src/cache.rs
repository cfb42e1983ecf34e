use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Lazily populated memo table. Values are pure functions of their key,
/// so entries are never invalidated.
pub struct ReadThroughCache<K, V> {
    entries: RwLock<HashMap<K, Arc<V>>>,
}

impl<K, V> ReadThroughCache<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, key: &K) -> Option<Arc<V>> {
        self.entries.read().await.get(key).cloned()
    }

    /// Store `value` unless another task got there first; returns the stored entry
    pub async fn insert(&self, key: K, value: V) -> Arc<V> {
        let mut entries = self.entries.write().await;
        entries.entry(key).or_insert_with(|| Arc::new(value)).clone()
    }

    /// Return the cached value or compute and store it.
    /// The lock is not held while `compute` runs.
    pub async fn get_or_insert_with<F, Fut>(&self, key: K, compute: F) -> Arc<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = V>,
    {
        if let Some(value) = self.get(&key).await {
            return value;
        }

        let value = compute().await;
        self.insert(key, value).await
    }
}

impl<K, V> Default for ReadThroughCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_computes_once_per_key() {
        let cache: ReadThroughCache<(String, u32), Vec<u32>> = ReadThroughCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_insert_with(("de".to_string(), 3), || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    vec![1, 2, 3]
                })
                .await;
            assert_eq!(*value, vec![1, 2, 3]);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(cache.get(&("de".to_string(), 3)).await.is_some());
        assert!(cache.get(&("de".to_string(), 4)).await.is_none());
    }

    #[tokio::test]
    async fn test_first_write_wins() {
        let cache: ReadThroughCache<&str, u32> = ReadThroughCache::new();

        assert_eq!(*cache.insert("k", 1).await, 1);
        assert_eq!(*cache.insert("k", 2).await, 1);
        assert!(cache.get(&"missing").await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_readers() {
        let cache = Arc::new(ReadThroughCache::<u32, String>::new());
        cache.insert(1, "one".to_string()).await;

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = Arc::clone(&cache);
            handles.push(tokio::spawn(async move { cache.get(&1).await }));
        }

        for handle in handles {
            let value = handle.await.unwrap();
            assert_eq!(value.as_deref().map(String::as_str), Some("one"));
        }
    }
}
