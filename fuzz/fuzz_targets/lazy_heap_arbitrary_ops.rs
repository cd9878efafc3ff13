#![no_main]

use boundcache::ds::LazyMinHeap;
use libfuzzer_sys::fuzz_target;

// Arbitrary update/pop_best/rebuild sequences on LazyMinHeap, checked
// against a brute-force minimum over the live scores.
fuzz_target!(|data: &[u8]| {
    let mut heap: LazyMinHeap<u8, (u8, u8)> = LazyMinHeap::with_capacity(16);

    for chunk in data.chunks_exact(3) {
        let (op, key, score) = (chunk[0] % 6, chunk[1] % 32, chunk[2]);
        match op {
            0 | 1 | 2 => {
                // key as second component keeps scores unique
                heap.update(key, (score, key));
                assert_eq!(heap.score_of(&key), Some(&(score, key)));
            }
            3 | 4 => {
                let expected = heap.peek_best().map(|(k, s)| (*k, *s));
                let len_before = heap.len();
                let popped = heap.pop_best();
                assert_eq!(popped, expected);
                if let Some((key, _)) = popped {
                    assert_eq!(heap.len(), len_before - 1);
                    assert!(!heap.contains(&key));
                } else {
                    assert!(heap.is_empty());
                }
            }
            _ => {
                heap.maybe_rebuild(2);
                assert!(heap.heap_len() <= heap.len() * 2);
            }
        }
        heap.check_invariants().unwrap();
    }
});
