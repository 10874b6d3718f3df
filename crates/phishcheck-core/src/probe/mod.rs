//! Reachability probing.
//!
//! A lightweight HTTP HEAD request (libcurl via the `curl` crate) decides
//! whether a URL resolves to a live endpoint. Failures are values, not
//! errors: the inference policy matches on [`Reachability`] instead of
//! catching anything.

mod classify;

pub use classify::{classify_curl_error, classify_status};

use std::time::Duration;

use crate::config::ProbeConfig;

/// Why a probe did not reach a live endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnreachableReason {
    /// The URL could not be parsed well enough to send a request.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    /// The request did not complete within the probe timeout.
    #[error("timed out")]
    Timeout,
    /// DNS resolution failed.
    #[error("could not resolve host")]
    Resolve,
    /// TCP/TLS connection could not be established.
    #[error("could not connect")]
    Connect,
    /// The final response (after redirects) had status >= 400.
    #[error("HTTP {0}")]
    Http(u32),
    /// Any other transport failure.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Outcome of a reachability probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reachability {
    /// The endpoint answered with a status below 400.
    Reachable { status: u32 },
    Unreachable(UnreachableReason),
}

impl Reachability {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Reachability::Reachable { .. })
    }
}

/// Decides whether a URL is live. Implementations must be bounded in time.
pub trait Prober {
    fn probe(&self, url: &str) -> Reachability;
}

/// HEAD-request prober backed by libcurl.
#[derive(Debug, Clone)]
pub struct CurlProber {
    timeout: Duration,
    follow_redirects: bool,
}

impl CurlProber {
    pub fn new(cfg: &ProbeConfig) -> Self {
        Self {
            timeout: Duration::from_secs(cfg.timeout_secs.max(1)),
            follow_redirects: cfg.follow_redirects,
        }
    }

    fn head(&self, url: &str) -> Result<u32, curl::Error> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.nobody(true)?; // HEAD request
        easy.follow_location(self.follow_redirects)?;
        easy.connect_timeout(self.timeout)?;
        easy.timeout(self.timeout)?;
        easy.perform()?;
        easy.response_code()
    }
}

impl Default for CurlProber {
    fn default() -> Self {
        Self::new(&ProbeConfig::default())
    }
}

impl Prober for CurlProber {
    /// Runs in the current thread and blocks for at most the configured timeout.
    fn probe(&self, url: &str) -> Reachability {
        // Parsing percent-encodes the path and IDNA-encodes the host for curl.
        let parsed = match url::Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                return Reachability::Unreachable(UnreachableReason::InvalidUrl(e.to_string()))
            }
        };
        let outcome = match self.head(parsed.as_str()) {
            Ok(code) => classify_status(code),
            Err(e) => Reachability::Unreachable(classify_curl_error(&e)),
        };
        tracing::debug!(url, ?outcome, "reachability probe finished");
        outcome
    }
}
