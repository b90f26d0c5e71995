use latency_common::Measurement;
use latency_stats::{Snapshot, Statistics};
use std::time::Duration;

use crate::LatencySource;

/// When the monitor stops producing reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Unlimited,
    Samples(usize),
}

impl Limit {
    /// `0` means no limit, matching the `--count` flag.
    pub fn from_count(count: usize) -> Self {
        if count == 0 {
            Limit::Unlimited
        } else {
            Limit::Samples(count)
        }
    }

    pub fn reached(&self, taken: usize) -> bool {
        match self {
            Limit::Unlimited => false,
            Limit::Samples(n) => taken >= *n,
        }
    }
}

/// One measurement together with the aggregates that include it.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub snapshot: Snapshot,
    pub measurement: Measurement,
}

/// Drives a [`LatencySource`] and feeds every result into a [`Statistics`].
///
/// Behaves as an async iterator over [`Report`]s: the caller pulls with
/// [`Monitor::next`] for as long as it wants; `None` means the limit was hit.
/// A monitor cannot be rewound, build a new one to start over.
pub struct Monitor<S> {
    source: S,
    stats: Statistics,
    pacing: Duration,
    limit: Limit,
}

impl<S: LatencySource> Monitor<S> {
    pub fn new(source: S, pacing: Duration, limit: Limit) -> Self {
        Self { source, stats: Statistics::new(), pacing, limit }
    }

    /// Measure once more and return the updated report.
    ///
    /// Waits `pacing` before every measurement except the first. Failed
    /// measurements are recorded like any other; the failure travels in
    /// `Report::measurement`.
    pub async fn next(&mut self) -> Option<Report> {
        let taken = self.stats.count();
        if self.limit.reached(taken) {
            log::debug!("sample limit reached after {taken} samples");
            return None;
        }
        if taken > 0 && !self.pacing.is_zero() {
            tokio::time::sleep(self.pacing).await;
        }

        let measurement = self.source.measure().await;
        if let Err(e) = &measurement.outcome {
            log::debug!("request failed after {:?}: {e}", measurement.elapsed);
        }

        let snapshot = self.stats.add_sample(measurement.elapsed);
        log::debug!("sample #{} {:?}", snapshot.count, measurement.elapsed);

        Some(Report { snapshot, measurement })
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
