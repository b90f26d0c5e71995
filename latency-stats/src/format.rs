use crate::snapshot::Snapshot;

/// Render `snapshot` as the three-line live summary.
///
/// Values are truncated to whole milliseconds; this is the only place
/// precision is dropped.
pub fn format(snapshot: &Snapshot) -> String {
    format!(
        "Count: {} | Current: {}ms\n\
         Min: {}ms | Max: {}ms | Avg: {}ms +/- Std: {}ms\n\
         p50: {}ms | p75: {}ms | p90: {}ms | p95: {}ms | p99: {}ms\n",
        snapshot.count,
        snapshot.current.as_millis(),
        snapshot.min.as_millis(),
        snapshot.max.as_millis(),
        snapshot.avg.as_millis(),
        snapshot.stddev.as_millis(),
        snapshot.p50.as_millis(),
        snapshot.p75.as_millis(),
        snapshot.p90.as_millis(),
        snapshot.p95.as_millis(),
        snapshot.p99.as_millis(),
    )
}

/// Render `snapshot` as a single JSON line, durations in fractional milliseconds.
pub fn format_json(snapshot: &Snapshot) -> String {
    // Snapshot holds only numbers, so serialization cannot fail.
    serde_json::to_string(snapshot).unwrap_or_default()
}

/// Number of lines `format` produces.
pub const SUMMARY_LINES: usize = 3;
