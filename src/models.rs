/// Parameter objects for CLOB query endpoints.
///
/// Every field is optional; `None` means the field is left out of the query
/// string. The declaration order of the fields is the order in which they are
/// serialized by [`crate::query`].
use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::errors::ClobError;

// ---------------------------------------------------------------------------
// Pagination cursors
// ---------------------------------------------------------------------------

/// Cursor for the first page of a paginated endpoint (base64 of `0`).
pub const INITIAL_CURSOR: &str = "MA==";

/// Cursor returned by the server once the last page has been read (base64 of `-1`).
pub const END_CURSOR: &str = "LTE=";

/// Encode a numeric page offset as a pagination cursor.
pub fn encode_cursor(offset: i64) -> String {
    STANDARD.encode(offset.to_string())
}

/// Returns true if the cursor marks the end of a paginated result set.
pub fn is_end_cursor(cursor: &str) -> bool {
    cursor == END_CURSOR
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Kind of asset a balance/allowance lookup refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    Collateral,
    Conditional,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Collateral => "COLLATERAL",
            AssetType::Conditional => "CONDITIONAL",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signature scheme of the account that owns the balance.
///
/// Serialized as its integer code, both in JSON and in query strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SignatureType {
    /// Externally owned account.
    Eoa,
    PolyProxy,
    PolyGnosisSafe,
}

impl SignatureType {
    pub fn code(&self) -> u8 {
        match self {
            SignatureType::Eoa => 0,
            SignatureType::PolyProxy => 1,
            SignatureType::PolyGnosisSafe => 2,
        }
    }
}

impl From<SignatureType> for u8 {
    fn from(value: SignatureType) -> Self {
        value.code()
    }
}

impl TryFrom<u8> for SignatureType {
    type Error = ClobError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(SignatureType::Eoa),
            1 => Ok(SignatureType::PolyProxy),
            2 => Ok(SignatureType::PolyGnosisSafe),
            _ => Err(ClobError::Other(format!("Unknown signature type {code}"))),
        }
    }
}

impl fmt::Display for SignatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ---------------------------------------------------------------------------
// Parameter objects
// ---------------------------------------------------------------------------

/// Filters for the trade history endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    /// Unix timestamp (seconds), inclusive lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<u64>,
    /// Unix timestamp (seconds), inclusive upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maker_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl TradeParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = Some(market.into());
        self
    }

    pub fn with_asset_id(mut self, asset_id: impl Into<String>) -> Self {
        self.asset_id = Some(asset_id.into());
        self
    }

    pub fn with_after(mut self, after: u64) -> Self {
        self.after = Some(after);
        self
    }

    pub fn with_before(mut self, before: u64) -> Self {
        self.before = Some(before);
        self
    }

    pub fn with_maker_address(mut self, maker_address: impl Into<String>) -> Self {
        self.maker_address = Some(maker_address.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Filters for the open orders endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenOrderParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl OpenOrderParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = Some(market.into());
        self
    }

    pub fn with_asset_id(mut self, asset_id: impl Into<String>) -> Self {
        self.asset_id = Some(asset_id.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Notification ids to drop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropNotificationParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
}

impl DropNotificationParams {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: Some(ids.into_iter().map(Into::into).collect()),
        }
    }
}

/// Balance and allowance lookup.
///
/// `token_id` is only meaningful for [`AssetType::Conditional`] assets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceAllowanceParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_type: Option<SignatureType>,
}

impl BalanceAllowanceParams {
    pub fn collateral() -> Self {
        Self {
            asset_type: Some(AssetType::Collateral),
            ..Self::default()
        }
    }

    pub fn conditional(token_id: impl Into<String>) -> Self {
        Self {
            asset_type: Some(AssetType::Conditional),
            token_id: Some(token_id.into()),
            signature_type: None,
        }
    }

    pub fn with_signature_type(mut self, signature_type: SignatureType) -> Self {
        self.signature_type = Some(signature_type);
        self
    }
}

/// Scoring lookup for a single order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderScoringParams {
    #[serde(default, rename = "orderId", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

impl OrderScoringParams {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: Some(order_id.into()),
        }
    }
}

/// Scoring lookup for several orders at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdersScoringParams {
    #[serde(default, rename = "orderIds", skip_serializing_if = "Option::is_none")]
    pub order_ids: Option<Vec<String>>,
}

impl OrdersScoringParams {
    pub fn new<I, S>(order_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            order_ids: Some(order_ids.into_iter().map(Into::into).collect()),
        }
    }
}
