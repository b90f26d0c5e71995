use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// Every aggregate as of one point in the sample stream.
///
/// Built fresh after each ingestion and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    #[serde(serialize_with = "as_millis_f64")]
    pub current: Duration,
    pub count: usize,
    #[serde(serialize_with = "as_millis_f64")]
    pub min: Duration,
    #[serde(serialize_with = "as_millis_f64")]
    pub max: Duration,
    #[serde(serialize_with = "as_millis_f64")]
    pub avg: Duration,
    #[serde(serialize_with = "as_millis_f64")]
    pub stddev: Duration,
    #[serde(serialize_with = "as_millis_f64")]
    pub p50: Duration,
    #[serde(serialize_with = "as_millis_f64")]
    pub p75: Duration,
    #[serde(serialize_with = "as_millis_f64")]
    pub p90: Duration,
    #[serde(serialize_with = "as_millis_f64")]
    pub p95: Duration,
    #[serde(serialize_with = "as_millis_f64")]
    pub p99: Duration,
}

fn as_millis_f64<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(d.as_nanos() as f64 / 1_000_000.0)
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::format(self))
    }
}
