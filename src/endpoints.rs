//! CLOB REST endpoint paths, relative to the configured host.

/// Server time. Also the fallback target for connection warming.
pub const TIME: &str = "/time";

pub const TRADES: &str = "/data/trades";
pub const ORDERS: &str = "/data/orders";
pub const NOTIFICATIONS: &str = "/notifications";
pub const BALANCE_ALLOWANCE: &str = "/balance-allowance";
pub const ORDER_SCORING: &str = "/order-scoring";
pub const ORDERS_SCORING: &str = "/orders-scoring";
