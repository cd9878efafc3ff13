// ==============================================
// CONCURRENCY TESTS (integration)
// ==============================================
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use boundcache::{Cache, CacheBuilder, EvictionCause, PolicyKind};

const THREADS: usize = 8;
const OPS_PER_THREAD: usize = 2_000;

mod shared_cache {
    use super::*;

    #[test]
    fn mixed_workload_keeps_invariants() {
        for kind in PolicyKind::ALL {
            let cache: Arc<Cache<u64, u64>> = Arc::new(Cache::new(kind, 64));

            let handles: Vec<_> = (0..THREADS)
                .map(|thread_id| {
                    let cache = Arc::clone(&cache);
                    thread::spawn(move || {
                        for i in 0..OPS_PER_THREAD {
                            let key = ((thread_id * 31 + i * 7) % 200) as u64;
                            match i % 3 {
                                0 | 1 => {
                                    cache.put(key, key * 10);
                                },
                                _ => {
                                    if let Some(value) = cache.get(&key) {
                                        assert_eq!(value, key * 10);
                                    }
                                },
                            }
                            assert!(cache.len() <= cache.capacity());
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().expect("worker panicked");
            }

            assert_eq!(cache.len(), 64, "{kind}");
            assert_eq!(cache.check_invariants(), Ok(()), "{kind}");
        }
    }

    #[test]
    fn disjoint_writers_all_land_when_capacity_suffices() {
        let cache: Arc<Cache<(usize, usize), usize>> =
            Arc::new(Cache::new(PolicyKind::Lru, THREADS * 100));

        let handles: Vec<_> = (0..THREADS)
            .map(|thread_id| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for i in 0..100 {
                        cache.put((thread_id, i), i);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker panicked");
        }

        assert_eq!(cache.len(), THREADS * 100);
        for thread_id in 0..THREADS {
            for i in 0..100 {
                assert_eq!(cache.peek(&(thread_id, i)), Some(i));
            }
        }
    }
}

mod eviction_accounting {
    use super::*;

    #[test]
    fn every_overflowing_insert_notifies_once() {
        for kind in PolicyKind::ALL {
            let evictions = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&evictions);
            let cache = Arc::new(
                CacheBuilder::new(32)
                    .policy(kind)
                    .eviction_listener(move |_key: &u64, _value: u64, cause| {
                        assert_eq!(cause, EvictionCause::Capacity);
                        counter.fetch_add(1, Ordering::Relaxed);
                    })
                    .build(),
            );

            let handles: Vec<_> = (0..THREADS as u64)
                .map(|thread_id| {
                    let cache = Arc::clone(&cache);
                    thread::spawn(move || {
                        for i in 0..500u64 {
                            cache.put(thread_id * 10_000 + i, i);
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().expect("worker panicked");
            }

            // all keys are distinct, so every insert past the first 32 evicts
            let inserted = THREADS * 500;
            assert_eq!(evictions.load(Ordering::Relaxed), inserted - 32, "{kind}");
            assert_eq!(cache.len(), 32, "{kind}");
        }
    }
}
