/// Endpoint URL composition and raw request plumbing for the CLOB REST API.
///
/// [`ClobApi`] joins the configured host with an endpoint path, hands the
/// result to the query builders, and sends requests through the
/// [`ClientManager`]'s active client. Response bodies are returned as text;
/// decoding them is left to the caller.
use std::sync::Arc;

use log::debug;
use reqwest::{Client, Method};

use crate::client::ClientManager;
use crate::config::ClobConfig;
use crate::endpoints;
use crate::errors::ClobError;
use crate::models::*;
use crate::query;

/// URL builder and request sender bound to one CLOB host.
#[derive(Debug, Clone)]
pub struct ClobApi {
    config: ClobConfig,
    clients: Arc<ClientManager<Client>>,
}

impl ClobApi {
    /// Create an API handle with its own client manager.
    pub fn new(config: ClobConfig) -> Self {
        let clients = Arc::new(ClientManager::new(&config));
        Self { config, clients }
    }

    /// Create an API handle sharing an existing client manager.
    pub fn with_clients(config: ClobConfig, clients: Arc<ClientManager<Client>>) -> Self {
        Self { config, clients }
    }

    pub fn config(&self) -> &ClobConfig {
        &self.config
    }

    pub fn clients(&self) -> &Arc<ClientManager<Client>> {
        &self.clients
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.host, path)
    }

    // -----------------------------------------------------------------------
    // URL composition
    // -----------------------------------------------------------------------

    /// GET /data/trades
    pub fn trades_url(&self, params: Option<&TradeParams>, next_cursor: Option<&str>) -> String {
        query::add_query_trade_params(&self.endpoint(endpoints::TRADES), params, next_cursor)
    }

    /// GET /data/orders
    pub fn open_orders_url(
        &self,
        params: Option<&OpenOrderParams>,
        next_cursor: Option<&str>,
    ) -> String {
        query::add_query_open_orders_params(&self.endpoint(endpoints::ORDERS), params, next_cursor)
    }

    /// DELETE /notifications
    pub fn drop_notifications_url(&self, params: Option<&DropNotificationParams>) -> String {
        query::drop_notifications_query_params(&self.endpoint(endpoints::NOTIFICATIONS), params)
    }

    /// GET /balance-allowance
    pub fn balance_allowance_url(&self, params: Option<&BalanceAllowanceParams>) -> String {
        query::add_balance_allowance_params_to_url(
            &self.endpoint(endpoints::BALANCE_ALLOWANCE),
            params,
        )
    }

    /// GET /order-scoring
    pub fn order_scoring_url(&self, params: Option<&OrderScoringParams>) -> String {
        query::add_order_scoring_params_to_url(&self.endpoint(endpoints::ORDER_SCORING), params)
    }

    /// GET /orders-scoring
    pub fn orders_scoring_url(&self, params: Option<&OrdersScoringParams>) -> String {
        query::add_orders_scoring_params_to_url(&self.endpoint(endpoints::ORDERS_SCORING), params)
    }

    // -----------------------------------------------------------------------
    // Requests
    // -----------------------------------------------------------------------

    /// Warm the connection to the configured host. Never fails.
    pub async fn warm(&self) {
        self.clients.warm_connection(&self.config.host).await;
    }

    /// Send a request through the active client and return the body text.
    ///
    /// Non-success statuses become [`ClobError::Status`] carrying the body.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<String, ClobError> {
        debug!("api.request method={} url={}", method, url);
        let client = self.clients.get_active_client()?;
        let mut builder = client.request(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let resp = builder.send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        debug!(
            "api.request status={} body_len={}",
            status,
            text.len()
        );
        if !status.is_success() {
            return Err(ClobError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }

    /// GET `url` and return the body text.
    pub async fn get(&self, url: &str) -> Result<String, ClobError> {
        self.request(Method::GET, url, None).await
    }

    /// DELETE `url` and return the body text.
    pub async fn delete(&self, url: &str) -> Result<String, ClobError> {
        self.request(Method::DELETE, url, None).await
    }

    /// POST a JSON body to `url` and return the body text.
    pub async fn post(&self, url: &str, body: &serde_json::Value) -> Result<String, ClobError> {
        self.request(Method::POST, url, Some(body)).await
    }

    /// GET /time - server time in seconds, as text.
    pub async fn get_server_time(&self) -> Result<String, ClobError> {
        let url = self.endpoint(endpoints::TIME);
        self.get(&url).await
    }
}
