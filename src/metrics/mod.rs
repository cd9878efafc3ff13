//! Operation counters (feature `metrics`).
//!
//! Counters live inside the cache core and are bumped while the cache lock
//! is held, so plain integers suffice. [`Cache::metrics_snapshot`] copies
//! them out together with the current length and capacity.
//!
//! [`Cache::metrics_snapshot`]: crate::Cache::metrics_snapshot

pub mod snapshot;

pub use snapshot::CacheMetricsSnapshot;

#[derive(Debug, Default, Clone)]
pub(crate) struct CacheMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_new: u64,
    pub insert_updates: u64,
    pub evicted_entries: u64,
}

impl CacheMetrics {
    #[inline]
    pub fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    #[inline]
    pub fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    #[inline]
    pub fn record_insert_new(&mut self) {
        self.insert_calls += 1;
        self.insert_new += 1;
    }

    #[inline]
    pub fn record_insert_update(&mut self) {
        self.insert_calls += 1;
        self.insert_updates += 1;
    }

    #[inline]
    pub fn record_eviction(&mut self) {
        self.evicted_entries += 1;
    }

    pub fn snapshot(&self, cache_len: usize, capacity: usize) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            get_calls: self.get_calls,
            get_hits: self.get_hits,
            get_misses: self.get_misses,
            insert_calls: self.insert_calls,
            insert_new: self.insert_new,
            insert_updates: self.insert_updates,
            evicted_entries: self.evicted_entries,
            cache_len,
            capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_roll_up_into_snapshot() {
        let mut metrics = CacheMetrics::default();
        metrics.record_get_hit();
        metrics.record_get_miss();
        metrics.record_get_miss();
        metrics.record_insert_new();
        metrics.record_insert_update();
        metrics.record_eviction();

        let snap = metrics.snapshot(3, 8);
        assert_eq!(snap.get_calls, 3);
        assert_eq!(snap.get_hits, 1);
        assert_eq!(snap.get_misses, 2);
        assert_eq!(snap.insert_calls, 2);
        assert_eq!(snap.insert_new, 1);
        assert_eq!(snap.insert_updates, 1);
        assert_eq!(snap.evicted_entries, 1);
        assert_eq!(snap.cache_len, 3);
        assert_eq!(snap.capacity, 8);
    }

    #[test]
    fn hit_rate_handles_no_reads() {
        let snap = CacheMetrics::default().snapshot(0, 1);
        assert_eq!(snap.hit_rate(), 0.0);
    }
}
