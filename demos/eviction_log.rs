//! Runs the same capacity-2 workload against every policy and prints what
//! each one discards.
//!
//! The `DISCARD` lines come from the cache's `boundcache::evict` tracing
//! target; the `listener:` lines come from an eviction listener.
//!
//! Run with: cargo run --example eviction_log

use boundcache::{CacheBuilder, PolicyKind};
use tracing::Level;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .without_time()
        .init();

    for kind in PolicyKind::ALL {
        println!("\n=== {kind} ===");

        let cache = CacheBuilder::new(2)
            .policy(kind)
            .eviction_listener(|key: &&str, value: i32, cause| {
                println!("  listener: {key} -> {value} ({cause:?})");
            })
            .build();

        println!("  put A, put B, get A, get A, get B, put C");
        cache.put("A", 1);
        cache.put("B", 2);
        cache.get(&"A");
        cache.get(&"A");
        cache.get(&"B");
        cache.put("C", 3);

        for key in ["A", "B", "C"] {
            println!("  {key}: {:?}", cache.peek(&key));
        }
    }
}

// Expected survivors:
//   fifo: B, C    lifo: A, C    lru: B, C    mru: A, C    lfu: A, C
