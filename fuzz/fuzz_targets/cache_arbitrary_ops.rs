#![no_main]

use boundcache::{Cache, PolicyKind};
use libfuzzer_sys::fuzz_target;

// Arbitrary put/get/update/clear sequences against one cache.
//
// Byte 0 picks the policy, byte 1 the capacity; the rest is read in
// (op, key, value) triples.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let kind = PolicyKind::ALL[usize::from(data[0]) % PolicyKind::ALL.len()];
    let capacity = usize::from(data[1] % 32) + 1;
    let cache: Cache<u8, u8> = Cache::new(kind, capacity);

    for chunk in data[2..].chunks_exact(3) {
        let (op, key, value) = (chunk[0] % 8, chunk[1] % 64, chunk[2]);
        match op {
            0 | 1 | 2 => {
                let was_present = cache.contains(&key);
                let len_before = cache.len();
                let replaced = cache.put(key, value);
                assert_eq!(replaced.is_some(), was_present);
                if was_present || len_before == capacity {
                    assert_eq!(cache.len(), len_before);
                } else {
                    assert_eq!(cache.len(), len_before + 1);
                }
                assert_eq!(cache.peek(&key), Some(value));
            }
            3 | 4 => {
                let peeked = cache.peek(&key);
                assert_eq!(cache.get(&key), peeked);
            }
            5 => {
                let before = cache.peek_victim();
                cache.update(&key, value);
                assert_eq!(cache.peek_victim(), before);
            }
            6 => {
                let (value, count) = cache.get_with_frequency(&key);
                if value.is_none() || kind != PolicyKind::Lfu {
                    assert_eq!(count, 0);
                } else {
                    assert!(count >= 2);
                }
            }
            _ => {
                if value % 16 == 0 {
                    cache.clear();
                    assert!(cache.is_empty());
                } else {
                    cache.put_opt(None, Some(value));
                }
            }
        }
        assert!(cache.len() <= capacity);
    }

    cache.check_invariants().unwrap();
});
