use std::time::Duration;

/// Every sample seen so far, kept in ascending order.
///
/// Append-only: samples are never removed for the lifetime of a run.
#[derive(Debug, Clone, Default)]
pub struct OrderedSampleStore {
    samples: Vec<Duration>,
}

impl OrderedSampleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `sample` at its sorted position.
    ///
    /// The position is found by binary search; equal samples go after the
    /// ones already stored.
    pub fn insert(&mut self, sample: Duration) {
        let idx = self.samples.partition_point(|s| *s <= sample);
        self.samples.insert(idx, sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sorted view of the stored samples.
    pub fn as_slice(&self) -> &[Duration] {
        &self.samples
    }

    /// Nearest-rank value for `percent`: the element at `floor(len * percent / 100)`,
    /// clamped to the last index. Returns `None` for an empty store.
    pub fn at_percent(&self, percent: u32) -> Option<Duration> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples[percentile_index(self.samples.len(), percent)])
    }
}

/// 0-based index of the `percent`-th percentile in a sorted sequence of `count`
/// elements. Integer arithmetic keeps `floor(count * q)` exact.
pub fn percentile_index(count: usize, percent: u32) -> usize {
    debug_assert!(count > 0, "percentile of an empty sequence");
    let idx = count.saturating_mul(percent as usize) / 100;
    idx.min(count.saturating_sub(1))
}
