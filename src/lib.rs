//! Query construction and HTTP client lifecycle for CLOB REST API clients.
//!
//! # What This Crate Provides
//!
//! - Deterministic query-string builders for the paginated and lookup
//!   endpoints: [`query`]
//! - Typed, optional-field parameter objects: [`TradeParams`],
//!   [`OpenOrderParams`], [`BalanceAllowanceParams`] and friends
//! - A shared HTTP client holder with best-effort connection warming:
//!   [`ClientManager`]
//! - Endpoint URL composition and raw request plumbing: [`ClobApi`]
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use clob_http::{ClobApi, ClobConfig, Network, TradeParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), clob_http::ClobError> {
//!     let api = ClobApi::new(ClobConfig::from_network(Network::Polygon));
//!
//!     // Pay the TCP/TLS handshake up front. Never fails.
//!     api.warm().await;
//!
//!     let params = TradeParams::new().with_market("0xabc").with_after(1_450_000);
//!     let url = api.trades_url(Some(&params), Some("MA=="));
//!     let body = api.get(&url).await?;
//!     println!("{body}");
//!     Ok(())
//! }
//! ```
//!
//! # Building Query Strings
//!
//! Builders are pure functions. Present fields are appended in their fixed
//! order; absent fields are skipped. Pagination cursors always go last.
//!
//! ```rust
//! use clob_http::query::add_query_trade_params;
//! use clob_http::TradeParams;
//!
//! let params = TradeParams::new().with_market("10000").with_id("aa-bb");
//! let url = add_query_trade_params("http://tracker", Some(&params), Some("AA=="));
//! assert_eq!(url, "http://tracker?market=10000&id=aa-bb&next_cursor=AA==");
//! ```
//!
//! # Injecting a Client
//!
//! [`ClientManager::set_client`] overrides the client used for warming and
//! requests; passing `None` returns to the lazily built default.
//!
//! ```rust
//! use std::sync::Arc;
//! use clob_http::{ClientManager, ClobConfig};
//!
//! let clients = ClientManager::new(&ClobConfig::default());
//! let custom = Arc::new(reqwest::Client::new());
//! clients.set_client(Some(Arc::clone(&custom)));
//! assert!(Arc::ptr_eq(&clients.get_active_client().unwrap(), &custom));
//! clients.set_client(None);
//! ```
//!
//! # Logging
//!
//! This crate emits debug-level logs through the [`log`](https://docs.rs/log/) facade.
//! Configure any compatible logger in your binary, then set `RUST_LOG=debug`
//! to see query construction and every warming probe.
//!
//! # Errors
//!
//! Fallible operations return [`ClobError`]. Connection warming never does:
//! its failures are logged and dropped.
pub mod api;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod errors;
pub mod models;
pub mod query;

// Re-export primary types for convenience.
pub use api::ClobApi;
pub use client::{build_default_client, ClientManager, Transport};
pub use config::{ClobConfig, Network, DEFAULT_WARM_TIMEOUT};
pub use errors::ClobError;
pub use models::*;
