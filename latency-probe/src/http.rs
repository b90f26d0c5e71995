use latency_common::{LatencyError, Measurement, Result};
use reqwest::Url;
use std::time::{Duration, Instant};

use crate::LatencySource;

/// Times a plain `GET` against one URL.
pub struct HttpProbe {
    url: Url,
    timeout: Option<Duration>,
    http_client: reqwest::Client,
}

impl HttpProbe {
    /// Build a probe for `url`. Only `http` and `https` URLs are accepted.
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|e| LatencyError::InvalidUrl(format!("{url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(LatencyError::InvalidUrl(format!(
                "{url}: unsupported scheme {:?}",
                parsed.scheme()
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let http_client = builder.build().map_err(|e| LatencyError::Client(e.to_string()))?;

        Ok(Self { url: parsed, timeout, http_client })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Issue one request and time it up to the response headers.
    ///
    /// A non-2xx status still counts as a completed round-trip.
    pub async fn get(&self) -> Measurement {
        let start = Instant::now();
        let result = self.http_client.get(self.url.clone()).send().await;
        let elapsed = start.elapsed();

        match result {
            Ok(response) => Measurement::ok(elapsed, response.status().as_u16()),
            Err(e) => Measurement::failed(elapsed, self.classify(e)),
        }
    }

    fn classify(&self, err: reqwest::Error) -> LatencyError {
        match self.timeout {
            Some(t) if err.is_timeout() => LatencyError::Timeout(t),
            _ => LatencyError::NetworkError(err.to_string()),
        }
    }
}

impl LatencySource for HttpProbe {
    async fn measure(&mut self) -> Measurement {
        self.get().await
    }
}
