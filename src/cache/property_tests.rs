//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check eviction order and handle lifecycle against a
//! simple reference model.

use proptest::prelude::*;

use crate::blob::Blob;
use crate::cache::testing::RecordingAllocator;
use crate::cache::DocumentCache;
use crate::safe_url::VIEWER_FRAGMENT;

// == Strategies ==
/// Small key space so sequences hit replacements and promotions often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-h]".prop_map(|s| s)
}

fn blob_strategy() -> impl Strategy<Value = Blob> {
    prop::collection::vec(any::<u8>(), 1..64).prop_map(|bytes| Blob::pdf(bytes))
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, blob: Blob },
    Get { key: String },
    Remove { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        3 => (key_strategy(), blob_strategy()).prop_map(|(key, blob)| CacheOp::Set { key, blob }),
        2 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Remove { key }),
    ]
}

// == Reference Model ==
/// Keys ordered least to most recently used.
#[derive(Debug, Default)]
struct Model {
    order: Vec<String>,
}

impl Model {
    fn touch(&mut self, key: &str) {
        self.order.retain(|k| k != key);
        self.order.push(key.to_string());
    }

    fn remove(&mut self, key: &str) -> bool {
        let before = self.order.len();
        self.order.retain(|k| k != key);
        before != self.order.len()
    }

    fn contains(&self, key: &str) -> bool {
        self.order.iter().any(|k| k == key)
    }

    fn most_recent_first(&self) -> Vec<String> {
        self.order.iter().rev().cloned().collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Capacity, LRU order and handle accounting hold after every operation.
    #[test]
    fn prop_matches_reference_lru(
        max_size in 1usize..6,
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let allocator = RecordingAllocator::new();
        let mut cache = DocumentCache::new(max_size, allocator.clone());
        let mut model = Model::default();

        for op in ops {
            match op {
                CacheOp::Set { key, blob } => {
                    cache.set(key.clone(), &blob).unwrap();
                    model.touch(&key);
                    if model.order.len() > max_size {
                        model.order.remove(0);
                    }
                }
                CacheOp::Get { key } => {
                    let hit = cache.get(&key).is_some();
                    prop_assert_eq!(hit, model.contains(&key));
                    if hit {
                        model.touch(&key);
                    }
                }
                CacheOp::Remove { key } => {
                    prop_assert_eq!(cache.remove(&key), model.remove(&key));
                }
            }

            prop_assert!(cache.len() <= max_size);
            prop_assert_eq!(cache.keys_by_recency(), model.most_recent_first());

            let stats = cache.stats();
            prop_assert_eq!(stats.live_handles() as usize, cache.len());
            prop_assert_eq!(allocator.live().len(), cache.len());
        }

        drop(cache);
        prop_assert!(allocator.live().is_empty());
        for handle in allocator.created() {
            prop_assert_eq!(allocator.release_count(&handle), 1);
        }
    }

    // Distinct-key inserts never exceed capacity.
    #[test]
    fn prop_capacity_enforcement(
        max_size in 1usize..10,
        count in 1usize..40
    ) {
        let mut cache = DocumentCache::new(max_size, RecordingAllocator::new());

        for i in 0..count {
            cache.set(format!("doc{}", i), &Blob::pdf(vec![1])).unwrap();
            prop_assert!(cache.len() <= max_size);
        }
        prop_assert_eq!(cache.len(), count.min(max_size));
    }

    // Replacing a key releases the previous handle exactly once.
    #[test]
    fn prop_replacement_releases_old_handle(
        key in key_strategy(),
        first in blob_strategy(),
        second in blob_strategy()
    ) {
        let allocator = RecordingAllocator::new();
        let mut cache = DocumentCache::new(4, allocator.clone());

        cache.set(key.clone(), &first).unwrap();
        let url = cache.set(key.clone(), &second).unwrap();

        let created = allocator.created();
        prop_assert_eq!(allocator.release_count(&created[0]), 1);
        prop_assert_eq!(allocator.release_count(&created[1]), 0);
        prop_assert_eq!(cache.get(&key), Some(&url));
        prop_assert_eq!(url.as_str(), format!("{}{}", created[1], VIEWER_FRAGMENT));
    }

    // A miss changes neither recency nor handles.
    #[test]
    fn prop_miss_is_side_effect_free(
        keys in prop::collection::vec(key_strategy(), 1..10)
    ) {
        let allocator = RecordingAllocator::new();
        let mut cache = DocumentCache::new(4, allocator.clone());
        for key in &keys {
            cache.set(key.clone(), &Blob::pdf(vec![0])).unwrap();
        }

        let order_before = cache.keys_by_recency();
        let created_before = allocator.created();
        let released_before = allocator.released();

        prop_assert!(cache.get("not-cached").is_none());

        prop_assert_eq!(cache.keys_by_recency(), order_before);
        prop_assert_eq!(allocator.created(), created_before);
        prop_assert_eq!(allocator.released(), released_before);
    }

    // An overflowing insert releases exactly the oldest handle.
    #[test]
    fn prop_overflow_releases_exactly_one(max_size in 1usize..8) {
        let allocator = RecordingAllocator::new();
        let mut cache = DocumentCache::new(max_size, allocator.clone());
        for i in 0..max_size {
            cache.set(format!("doc{}", i), &Blob::pdf(vec![0])).unwrap();
        }
        prop_assert!(allocator.released().is_empty());

        cache.set("overflow", &Blob::pdf(vec![0])).unwrap();

        let released = allocator.released();
        let created = allocator.created();
        prop_assert_eq!(released.len(), 1);
        prop_assert_eq!(&released[0], &created[0]);
        prop_assert!(!cache.contains("doc0"));
    }

    // Every returned URL is the freshly created handle plus the viewer fragment.
    #[test]
    fn prop_url_shape(
        entries in prop::collection::vec((key_strategy(), blob_strategy()), 1..20)
    ) {
        let allocator = RecordingAllocator::new();
        let mut cache = DocumentCache::new(3, allocator.clone());

        for (key, blob) in entries {
            let url = cache.set(key, &blob).unwrap();
            let created = allocator.created();
            let handle = created.last().unwrap();
            prop_assert_eq!(url.into_string(), format!("{}#toolbar=0&navpanes=0", handle));
        }
    }
}

// == Fixed Scenario ==
#[test]
fn lru_promotion_scenario() {
    let mut cache = DocumentCache::new(2, RecordingAllocator::new());

    cache.set("a", &Blob::pdf(vec![1])).unwrap();
    cache.set("b", &Blob::pdf(vec![2])).unwrap();
    assert!(cache.get("a").is_some());
    cache.set("c", &Blob::pdf(vec![3])).unwrap();

    assert!(cache.get("b").is_none());
    assert!(cache.get("a").is_some());
    assert!(cache.get("c").is_some());
}
