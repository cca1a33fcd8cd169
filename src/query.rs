/// Query string builders for CLOB endpoints.
///
/// Each builder takes a base URL and an optional parameter object and returns
/// the URL with the present fields appended in their fixed order. Values are
/// concatenated as-is: nothing is percent-encoded, and list values are joined
/// with `,`.
use log::debug;

use crate::models::{
    BalanceAllowanceParams, DropNotificationParams, OpenOrderParams, OrderScoringParams,
    OrdersScoringParams, TradeParams, INITIAL_CURSOR,
};

/// Append `key=value` to `url`, joining with `&` unless no pair has been
/// written after the `?` yet.
pub fn build_query_params(url: &str, key: &str, value: &str) -> String {
    let mut out = String::with_capacity(url.len() + key.len() + value.len() + 2);
    out.push_str(url);
    if !url.ends_with('?') {
        out.push('&');
    }
    out.push_str(key);
    out.push('=');
    out.push_str(value);
    out
}

/// Ordered accumulator of query pairs on top of a base URL.
struct Query {
    url: String,
}

impl Query {
    fn new(base_url: &str) -> Self {
        Self {
            url: base_url.to_string(),
        }
    }

    /// Start the query part; a no-op when the base URL already has one.
    fn open(mut self) -> Self {
        if !self.url.contains('?') {
            self.url.push('?');
        }
        self
    }

    fn push(mut self, key: &str, value: &str) -> Self {
        self.url = build_query_params(&self.url, key, value);
        self
    }

    fn push_opt<V: ToString>(self, key: &str, value: Option<&V>) -> Self {
        match value {
            Some(v) => self.push(key, &v.to_string()),
            None => self,
        }
    }

    fn push_list(self, key: &str, values: Option<&Vec<String>>) -> Self {
        match values {
            Some(values) => self.push(key, &values.join(",")),
            None => self,
        }
    }

    fn finish(self) -> String {
        self.url
    }
}

/// Trade history: `market, asset_id, after, before, maker_address, id`, then
/// `next_cursor` whenever a cursor is given, even without `params`.
pub fn add_query_trade_params(
    base_url: &str,
    params: Option<&TradeParams>,
    next_cursor: Option<&str>,
) -> String {
    debug!(
        "query.trade_params has_params={} next_cursor={:?}",
        params.is_some(),
        next_cursor
    );
    if params.is_none() && next_cursor.is_none() {
        return base_url.to_string();
    }
    let mut query = Query::new(base_url).open();
    if let Some(p) = params {
        query = query
            .push_opt("market", p.market.as_ref())
            .push_opt("asset_id", p.asset_id.as_ref())
            .push_opt("after", p.after.as_ref())
            .push_opt("before", p.before.as_ref())
            .push_opt("maker_address", p.maker_address.as_ref())
            .push_opt("id", p.id.as_ref());
    }
    if let Some(cursor) = next_cursor {
        query = query.push("next_cursor", cursor);
    }
    query.finish()
}

/// Open orders: `market, asset_id, id`, then `next_cursor`, which defaults to
/// [`INITIAL_CURSOR`].
pub fn add_query_open_orders_params(
    base_url: &str,
    params: Option<&OpenOrderParams>,
    next_cursor: Option<&str>,
) -> String {
    let cursor = next_cursor.unwrap_or(INITIAL_CURSOR);
    debug!(
        "query.open_orders_params has_params={} next_cursor={}",
        params.is_some(),
        cursor
    );
    let mut query = Query::new(base_url).open();
    if let Some(p) = params {
        query = query
            .push_opt("market", p.market.as_ref())
            .push_opt("asset_id", p.asset_id.as_ref())
            .push_opt("id", p.id.as_ref());
    }
    query.push("next_cursor", cursor).finish()
}

/// Drop notifications: `ids` as a comma-joined list.
pub fn drop_notifications_query_params(
    base_url: &str,
    params: Option<&DropNotificationParams>,
) -> String {
    match params {
        Some(p) => Query::new(base_url)
            .open()
            .push_list("ids", p.ids.as_ref())
            .finish(),
        None => base_url.to_string(),
    }
}

/// Balance/allowance: `asset_type, token_id, signature_type`.
pub fn add_balance_allowance_params_to_url(
    base_url: &str,
    params: Option<&BalanceAllowanceParams>,
) -> String {
    match params {
        Some(p) => Query::new(base_url)
            .open()
            .push_opt("asset_type", p.asset_type.as_ref())
            .push_opt("token_id", p.token_id.as_ref())
            .push_opt("signature_type", p.signature_type.as_ref())
            .finish(),
        None => base_url.to_string(),
    }
}

/// Single order scoring: `order_id`.
pub fn add_order_scoring_params_to_url(
    base_url: &str,
    params: Option<&OrderScoringParams>,
) -> String {
    match params {
        Some(p) => Query::new(base_url)
            .open()
            .push_opt("order_id", p.order_id.as_ref())
            .finish(),
        None => base_url.to_string(),
    }
}

/// Multi-order scoring: `order_ids` as a comma-joined list.
pub fn add_orders_scoring_params_to_url(
    base_url: &str,
    params: Option<&OrdersScoringParams>,
) -> String {
    match params {
        Some(p) => Query::new(base_url)
            .open()
            .push_list("order_ids", p.order_ids.as_ref())
            .finish(),
        None => base_url.to_string(),
    }
}
