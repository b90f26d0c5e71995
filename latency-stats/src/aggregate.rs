use std::time::Duration;

use crate::store::OrderedSampleStore;

/// Running minimum and maximum, updated one sample at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extremes {
    pub min: Duration,
    pub max: Duration,
}

impl Default for Extremes {
    fn default() -> Self {
        // min starts at the largest representable value so the first sample replaces it.
        Self { min: Duration::MAX, max: Duration::ZERO }
    }
}

impl Extremes {
    pub fn observe(&mut self, sample: Duration) {
        if sample > self.max {
            self.max = sample;
        }
        if sample < self.min {
            self.min = sample;
        }
    }
}

/// Population mean and standard deviation of `samples`.
///
/// Accumulates in f64 seconds rather than integer nanoseconds, so long runs
/// of large latencies cannot overflow the sum. Returns zeros for an empty slice.
pub fn mean_and_stddev(samples: &[Duration]) -> (Duration, Duration) {
    if samples.is_empty() {
        return (Duration::ZERO, Duration::ZERO);
    }
    let n = samples.len() as f64;

    let mean_secs = samples.iter().map(Duration::as_secs_f64).sum::<f64>() / n;

    let variance = samples
        .iter()
        .map(|s| {
            let d = s.as_secs_f64() - mean_secs;
            d * d
        })
        .sum::<f64>()
        / n;

    (from_secs(mean_secs), from_secs(variance.sqrt()))
}

/// Convert fractional seconds back to a `Duration`, rounded to the nearest
/// nanosecond.
pub fn from_secs(secs: f64) -> Duration {
    // float-to-int `as` saturates: NaN and negatives become 0, overflow becomes u64::MAX.
    Duration::from_nanos((secs * 1e9).round() as u64)
}

/// Nearest-rank, round-down percentiles read from the sorted store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Percentiles {
    pub p50: Duration,
    pub p75: Duration,
    pub p90: Duration,
    pub p95: Duration,
    pub p99: Duration,
}

impl Percentiles {
    /// `None` when the store is empty.
    pub fn from_store(store: &OrderedSampleStore) -> Option<Self> {
        Some(Self {
            p50: store.at_percent(50)?,
            p75: store.at_percent(75)?,
            p90: store.at_percent(90)?,
            p95: store.at_percent(95)?,
            p99: store.at_percent(99)?,
        })
    }
}
