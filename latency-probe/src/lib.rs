use latency_common::Measurement;
use std::future::Future;

pub mod http;
pub mod monitor;

pub use http::HttpProbe;
pub use monitor::{Limit, Monitor, Report};

/// Something whose round-trip time can be measured.
///
/// Every call yields an elapsed time, including calls that fail.
pub trait LatencySource {
    fn measure(&mut self) -> impl Future<Output = Measurement> + Send;
}
