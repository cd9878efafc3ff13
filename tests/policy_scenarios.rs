// ==============================================
// POLICY SCENARIO TESTS (integration)
// ==============================================
//
// Capacity-2 walkthroughs for each policy, driven through the public
// `Cache` API only.

use boundcache::{Cache, PolicyKind};

fn filled(kind: PolicyKind) -> Cache<&'static str, i32> {
    let cache = Cache::new(kind, 2);
    cache.put("A", 1);
    cache.put("B", 2);
    cache
}

mod fifo {
    use super::*;

    #[test]
    fn evicts_earliest_inserted() {
        let cache = filled(PolicyKind::Fifo);
        cache.put("C", 3);

        assert_eq!(cache.get(&"A"), None);
        assert_eq!(cache.get(&"B"), Some(2));
        assert_eq!(cache.get(&"C"), Some(3));
    }

    #[test]
    fn reads_do_not_change_order() {
        let cache = filled(PolicyKind::Fifo);
        cache.get(&"A");
        cache.get(&"A");
        cache.put("C", 3);
        assert!(!cache.contains(&"A"));
    }
}

mod lifo {
    use super::*;

    #[test]
    fn evicts_latest_inserted_before_new_key() {
        let cache = filled(PolicyKind::Lifo);
        cache.put("C", 3);

        assert_eq!(cache.get(&"A"), Some(1));
        assert_eq!(cache.get(&"B"), None);
        assert_eq!(cache.get(&"C"), Some(3));
    }

    #[test]
    fn newest_key_is_next_victim() {
        let cache = filled(PolicyKind::Lifo);
        cache.put("C", 3);
        cache.put("D", 4);

        assert!(cache.contains(&"A"));
        assert!(!cache.contains(&"C"));
        assert!(cache.contains(&"D"));
    }
}

mod lru {
    use super::*;

    #[test]
    fn touched_key_survives() {
        let cache = filled(PolicyKind::Lru);
        cache.get(&"A");
        cache.put("C", 3);

        assert_eq!(cache.get(&"B"), None);
        assert_eq!(cache.get(&"A"), Some(1));
        assert_eq!(cache.get(&"C"), Some(3));
    }

    #[test]
    fn without_reads_behaves_like_fifo() {
        let cache = filled(PolicyKind::Lru);
        cache.put("C", 3);
        assert!(!cache.contains(&"A"));
    }
}

mod mru {
    use super::*;

    #[test]
    fn most_recently_touched_is_evicted() {
        let cache = filled(PolicyKind::Mru);
        cache.get(&"B");
        cache.put("C", 3);

        assert_eq!(cache.get(&"A"), Some(1));
        assert_eq!(cache.get(&"B"), None);
        assert_eq!(cache.get(&"C"), Some(3));
    }

    #[test]
    fn touching_older_key_makes_it_the_victim() {
        let cache = filled(PolicyKind::Mru);
        cache.get(&"A");
        cache.put("C", 3);

        assert!(!cache.contains(&"A"));
        assert!(cache.contains(&"B"));
    }
}

mod lfu {
    use super::*;

    #[test]
    fn lower_frequency_is_evicted() {
        let cache = filled(PolicyKind::Lfu);
        cache.get(&"A");
        cache.get(&"A");
        cache.put("C", 3);

        assert_eq!(cache.get(&"A"), Some(1));
        assert_eq!(cache.get(&"B"), None);
        assert_eq!(cache.get(&"C"), Some(3));
    }

    #[test]
    fn ties_go_to_earliest_inserted() {
        let cache = filled(PolicyKind::Lfu);
        cache.get(&"A");
        cache.get(&"B");
        assert_eq!(cache.peek_victim(), Some("A"));
        cache.put("C", 3);
        assert!(!cache.contains(&"A"));
    }

    #[test]
    fn new_key_starts_at_one() {
        let cache = filled(PolicyKind::Lfu);
        cache.get(&"A");
        cache.get(&"B");
        cache.put("C", 3);
        assert_eq!(cache.frequency(&"C"), Some(1));

        // C is now the unique minimum
        cache.put("D", 4);
        assert!(!cache.contains(&"C"));
        assert_eq!(cache.frequency(&"C"), None);
    }

    #[test]
    fn evicted_key_restarts_its_count() {
        let cache = Cache::new(PolicyKind::Lfu, 1);
        cache.put("A", 1);
        for _ in 0..5 {
            cache.get(&"A");
        }
        cache.put("B", 2);
        cache.put("A", 3);
        assert_eq!(cache.frequency(&"A"), Some(1));
    }
}

mod all_policies {
    use super::*;

    #[test]
    fn reput_never_evicts_or_grows() {
        for kind in PolicyKind::ALL {
            let cache = filled(kind);
            assert_eq!(cache.put("A", 10), Some(1), "{kind}");
            assert_eq!(cache.put("B", 20), Some(2), "{kind}");
            assert_eq!(cache.len(), 2, "{kind}");
            assert_eq!(cache.get(&"A"), Some(10), "{kind}");
            assert_eq!(cache.get(&"B"), Some(20), "{kind}");
        }
    }

    #[test]
    fn absent_arguments_leave_state_unchanged() {
        for kind in PolicyKind::ALL {
            let cache = filled(kind);
            let victim_before = cache.peek_victim();

            cache.put_opt(None, Some(1));
            cache.put_opt(Some("Z"), None);
            assert_eq!(cache.get_opt(None), None);

            assert_eq!(cache.len(), 2, "{kind}");
            assert!(!cache.contains(&"Z"), "{kind}");
            assert_eq!(cache.peek_victim(), victim_before, "{kind}");
        }
    }

    #[test]
    fn length_is_bounded_after_every_put() {
        for kind in PolicyKind::ALL {
            let cache = Cache::new(kind, 5);
            for i in 0..100u32 {
                cache.put(i, i);
                assert!(cache.len() <= 5, "{kind}");
                if i % 3 == 0 {
                    cache.get(&(i / 2));
                }
            }
            assert_eq!(cache.len(), 5);
            assert_eq!(cache.check_invariants(), Ok(()), "{kind}");
        }
    }

    #[test]
    fn zero_capacity_is_a_configuration_error() {
        for kind in PolicyKind::ALL {
            assert!(Cache::<u32, u32>::try_new(kind, 0).is_err(), "{kind}");
        }
    }
}
