use crate::*;
use std::hash::Hash;

pub struct Cache<K, V> {
    entries: HashMap<K, V>,
}

impl<K: Hash + Eq, V> Cache<K, V> {
    pub fn new() -> Cache<K, V> {
        Cache {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, k: &K) -> Option<&V> {
        self.entries.get(k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn cache<F: FnOnce() -> V>(&mut self, k: K, f: F) -> &V {
        self.entries.entry(k).or_insert_with(f)
    }
}

impl<K: Hash + Eq, V> Default for Cache<K, V> {
    fn default() -> Self {
        Cache::new()
    }
}

#[test]
fn cache() {
    let mut cache = Cache::new();
    let mut called_times = 0;

    for _ in 0..3 {
        cache.cache(12, || {
            called_times += 1;
            String::from("twelve")
        });
    }

    assert_eq!(called_times, 1);
    assert_eq!(cache.get(&12).map(String::as_str), Some("twelve"));
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(cache.get(&12), None);
}
