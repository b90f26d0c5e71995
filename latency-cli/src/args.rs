use clap::{Parser, ValueEnum};
use latency_common::DEFAULT_SLEEP_MS;
use latency_probe::Limit;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Three-line summary redrawn in place
    Text,
    /// One JSON object per sample
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "http-latency-test", about = "Repeatedly GET a URL and show live latency statistics")]
pub struct Args {
    /// URL to do a GET request to
    #[arg(long)]
    pub url: Option<String>,

    /// Time between requests in milliseconds
    #[arg(long, default_value_t = DEFAULT_SLEEP_MS)]
    pub sleep: u64,

    /// Max number of requests (0 runs until interrupted)
    #[arg(long, default_value_t = 0)]
    pub count: usize,

    /// Per-request timeout in milliseconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Args {
    /// The target URL, or `None` if it was omitted or left empty.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.sleep)
    }

    pub fn limit(&self) -> Limit {
        Limit::from_count(self.count)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_millis)
    }
}
