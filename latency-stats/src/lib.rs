//! Streaming order statistics over latency samples.
//!
//! [`Statistics`] keeps every sample in sorted order and recomputes the
//! aggregates after each [`Statistics::add_sample`] call.

use std::time::Duration;

pub mod aggregate;
pub mod format;
pub mod snapshot;
pub mod store;

pub use aggregate::{Extremes, Percentiles};
pub use format::{format, format_json, SUMMARY_LINES};
pub use snapshot::Snapshot;
pub use store::OrderedSampleStore;

/// One series of latency samples and its latest aggregates.
///
/// Owned by whoever drives the measurement loop; mutation goes through
/// `&mut self`, so there is always exactly one writer.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    store: OrderedSampleStore,
    extremes: Extremes,
    latest: Option<Snapshot>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `sample` and return the aggregates including it.
    pub fn add_sample(&mut self, sample: Duration) -> Snapshot {
        self.store.insert(sample);
        self.extremes.observe(sample);

        let (avg, stddev) = aggregate::mean_and_stddev(self.store.as_slice());
        // The store holds at least `sample` at this point.
        let p = Percentiles::from_store(&self.store).unwrap_or_default();

        let snapshot = Snapshot {
            current: sample,
            count: self.store.len(),
            min: self.extremes.min,
            max: self.extremes.max,
            avg,
            stddev,
            p50: p.p50,
            p75: p.p75,
            p90: p.p90,
            p95: p.p95,
            p99: p.p99,
        };
        self.latest = Some(snapshot);
        snapshot
    }

    /// Aggregates after the most recent sample; `None` before the first one.
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.latest
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Sorted view of every sample recorded so far.
    pub fn samples(&self) -> &[Duration] {
        self.store.as_slice()
    }
}
