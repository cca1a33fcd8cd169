/// Shared HTTP client lifecycle and connection warming.
///
/// [`ClientManager`] holds at most one injected client handle. When nothing
/// has been injected, a default client is built on first use and reused for
/// the lifetime of the manager. Connection warming issues a cheap probe so the
/// TCP/TLS handshake is already done when the first real request goes out.
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONNECTION, CONTENT_TYPE};
use reqwest::Client;

use crate::config::ClobConfig;
use crate::endpoints;
use crate::errors::ClobError;

/// The request operations connection warming needs from an HTTP client.
///
/// Any response from the server counts as success: the point of a probe is
/// the established connection, not the payload.
pub trait Transport: Send + Sync + 'static {
    /// Issue a HEAD request.
    fn head<'a>(&'a self, url: &'a str, timeout: Duration) -> BoxFuture<'a, Result<(), ClobError>>;

    /// Issue a GET request and drain the body.
    fn get<'a>(&'a self, url: &'a str, timeout: Duration) -> BoxFuture<'a, Result<(), ClobError>>;
}

impl Transport for Client {
    fn head<'a>(&'a self, url: &'a str, timeout: Duration) -> BoxFuture<'a, Result<(), ClobError>> {
        async move {
            let resp = Client::head(self, url).timeout(timeout).send().await?;
            debug!("client.head url={} status={}", url, resp.status());
            Ok(())
        }
        .boxed()
    }

    fn get<'a>(&'a self, url: &'a str, timeout: Duration) -> BoxFuture<'a, Result<(), ClobError>> {
        async move {
            let resp = Client::get(self, url).timeout(timeout).send().await?;
            let status = resp.status();
            // Reading the body hands the connection back to the pool.
            let body = resp.bytes().await?;
            debug!(
                "client.get url={} status={} body_len={}",
                url,
                status,
                body.len()
            );
            Ok(())
        }
        .boxed()
    }
}

/// Build the default pooled client used when no client has been injected.
pub fn build_default_client(config: &ClobConfig) -> Result<Client, ClobError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Client::builder()
        .use_rustls_tls()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .timeout(config.request_timeout)
        .pool_idle_timeout(config.pool_idle_timeout)
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .tcp_keepalive(Duration::from_secs(30))
        .tcp_nodelay(true)
        .build()
        .map_err(|e| ClobError::ClientBuild(e.to_string()))
}

/// How a warming attempt ended. Only ever logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WarmOutcome {
    Head,
    TimeFallback,
    Unavailable,
}

type ClientFactory<T> = Box<dyn Fn() -> Result<T, ClobError> + Send + Sync>;

/// Owner of the shared HTTP client handle.
///
/// Share it behind an [`Arc`] and pass it to whatever issues requests.
/// `set_client` is a plain overwrite: the last writer wins.
pub struct ClientManager<T = Client> {
    shared: RwLock<Option<Arc<T>>>,
    default: Mutex<Option<Arc<T>>>,
    factory: ClientFactory<T>,
    warm_timeout: Duration,
}

impl ClientManager<Client> {
    /// Create a manager whose default client is built from `config`.
    pub fn new(config: &ClobConfig) -> Self {
        let config = config.clone();
        let warm_timeout = config.warm_timeout;
        Self::with_factory(move || build_default_client(&config), warm_timeout)
    }
}

impl Default for ClientManager<Client> {
    fn default() -> Self {
        Self::new(&ClobConfig::default())
    }
}

impl<T: Transport> ClientManager<T> {
    /// Create a manager with a custom default-client factory.
    pub fn with_factory<F>(factory: F, warm_timeout: Duration) -> Self
    where
        F: Fn() -> Result<T, ClobError> + Send + Sync + 'static,
    {
        Self {
            shared: RwLock::new(None),
            default: Mutex::new(None),
            factory: Box::new(factory),
            warm_timeout,
        }
    }

    /// Replace the shared client. `None` clears it.
    ///
    /// The previous handle is only released, never closed; other holders of
    /// the `Arc` keep a working client.
    pub fn set_client(&self, client: Option<Arc<T>>) {
        debug!("client.set_client present={}", client.is_some());
        *self.shared.write().unwrap_or_else(PoisonError::into_inner) = client;
    }

    /// The injected client, if any. Does not fall back to the default.
    pub fn client(&self) -> Option<Arc<T>> {
        self.shared
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The injected client, or the lazily built default one.
    pub fn get_active_client(&self) -> Result<Arc<T>, ClobError> {
        if let Some(client) = self.client() {
            return Ok(client);
        }
        let mut default = self.default.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = default.as_ref() {
            return Ok(Arc::clone(client));
        }
        debug!("client.get_active_client building default client");
        let client = Arc::new((self.factory)()?);
        *default = Some(Arc::clone(&client));
        Ok(client)
    }

    /// Timeout used for each warming probe.
    pub fn warm_timeout(&self) -> Duration {
        self.warm_timeout
    }

    /// Pre-establish a connection to `base_url`.
    ///
    /// Sends a HEAD to `base_url`; if that fails at the request level, sends a
    /// GET to `{base_url}/time`. Every failure is swallowed.
    pub async fn warm_connection(&self, base_url: &str) {
        let outcome = self.probe(base_url).await;
        debug!(
            "client.warm_connection base_url={} outcome={:?}",
            base_url, outcome
        );
    }

    pub(crate) async fn probe(&self, base_url: &str) -> WarmOutcome {
        let client = match self.get_active_client() {
            Ok(client) => client,
            Err(e) => {
                debug!("client.warm_connection no_client error={}", e);
                return WarmOutcome::Unavailable;
            }
        };

        match client.head(base_url, self.warm_timeout).await {
            Ok(()) => return WarmOutcome::Head,
            Err(e) if e.is_request_error() => {
                debug!("client.warm_connection head_failed error={}", e);
            }
            Err(e) => {
                debug!("client.warm_connection head_unusable error={}", e);
                return WarmOutcome::Unavailable;
            }
        }

        let time_url = format!("{}{}", base_url.trim_end_matches('/'), endpoints::TIME);
        match client.get(&time_url, self.warm_timeout).await {
            Ok(()) => WarmOutcome::TimeFallback,
            Err(e) => {
                debug!("client.warm_connection get_failed url={} error={}", time_url, e);
                WarmOutcome::Unavailable
            }
        }
    }
}

impl<T> fmt::Debug for ClientManager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let injected = self
            .shared
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false);
        f.debug_struct("ClientManager")
            .field("injected", &injected)
            .field("warm_timeout", &self.warm_timeout)
            .finish()
    }
}
