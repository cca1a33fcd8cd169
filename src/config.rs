/// Network configuration for CLOB API endpoints and HTTP client defaults.
use std::time::Duration;

use url::Url;

use crate::errors::ClobError;

/// Timeout applied to each connection-warming probe.
pub const DEFAULT_WARM_TIMEOUT: Duration = Duration::from_secs(10);

/// Supported CLOB networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Polygon,
    Amoy,
}

impl Network {
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Polygon => 137,
            Network::Amoy => 80002,
        }
    }
}

/// Configuration holding the API host and HTTP client defaults.
#[derive(Debug, Clone)]
pub struct ClobConfig {
    pub host: String,
    pub chain_id: u64,
    pub request_timeout: Duration,
    pub warm_timeout: Duration,
    pub pool_idle_timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub user_agent: String,
}

impl ClobConfig {
    pub fn from_network(network: Network) -> Self {
        let host = match network {
            Network::Polygon => "https://clob.polymarket.com",
            Network::Amoy => "https://clob-staging.polymarket.com",
        };
        Self {
            host: host.into(),
            chain_id: network.chain_id(),
            request_timeout: Duration::from_secs(30),
            warm_timeout: DEFAULT_WARM_TIMEOUT,
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 8,
            user_agent: concat!("clob-http/", env!("CARGO_PKG_VERSION")).into(),
        }
    }

    /// Point the configuration at a custom host (e.g. a local mock server).
    ///
    /// The host must be an absolute http(s) URL. A trailing `/` is dropped so
    /// endpoint paths can be appended directly.
    pub fn with_host(mut self, host: &str) -> Result<Self, ClobError> {
        let parsed = Url::parse(host)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClobError::InvalidUrl(format!(
                "unsupported scheme '{}' in {host}",
                parsed.scheme()
            )));
        }
        self.host = host.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn with_warm_timeout(mut self, timeout: Duration) -> Self {
        self.warm_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for ClobConfig {
    fn default() -> Self {
        Self::from_network(Network::Polygon)
    }
}
