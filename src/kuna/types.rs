use crate::core::errors::KunaError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order types accepted by `/auth/w/order/submit`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Limit,
    Market,
    MarketByQuote,
    LimitStopLoss,
}

impl OrderType {
    /// Wire name of the order type
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Limit => "limit",
            Self::Market => "market",
            Self::MarketByQuote => "market_by_quote",
            Self::LimitStopLoss => "limit_stop_loss",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = KunaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "limit" => Ok(Self::Limit),
            "market" => Ok(Self::Market),
            "market_by_quote" => Ok(Self::MarketByQuote),
            "limit_stop_loss" => Ok(Self::LimitStopLoss),
            other => Err(KunaError::InvalidArgument(format!(
                "\"{}\" is not one of the available order types (limit, market, market_by_quote, limit_stop_loss)",
                other
            ))),
        }
    }
}

/// Order submission request for `/auth/w/order/submit`
///
/// The amount is signed: positive buys the base currency, negative sells it.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    pub symbol: String, // e.g. "btcuah"
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub amount: Decimal, // positive = buy, negative = sell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>, // required for limit orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>, // activation price for limit_stop_loss
}

impl OrderRequest {
    /// Limit order at the given price
    pub fn limit(symbol: impl Into<String>, amount: Decimal, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            order_type: OrderType::Limit,
            amount,
            price: Some(price),
            stop_price: None,
        }
    }

    /// Market order in base-currency units
    pub fn market(symbol: impl Into<String>, amount: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            order_type: OrderType::Market,
            amount,
            price: None,
            stop_price: None,
        }
    }

    /// Market order sized in quote-currency units
    pub fn market_by_quote(symbol: impl Into<String>, amount: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            order_type: OrderType::MarketByQuote,
            amount,
            price: None,
            stop_price: None,
        }
    }

    /// Stop-loss limit order; `stop_price` defaults to `price` upstream when absent
    pub fn limit_stop_loss(
        symbol: impl Into<String>,
        amount: Decimal,
        price: Decimal,
        stop_price: Option<Decimal>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            order_type: OrderType::LimitStopLoss,
            amount,
            price: Some(price),
            stop_price,
        }
    }
}

/// Asset-history filter for `/auth/assets-history`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetHistoryKind {
    Withdraws,
    Deposits,
}

impl AssetHistoryKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Withdraws => "withdraws",
            Self::Deposits => "deposits",
        }
    }
}

impl FromStr for AssetHistoryKind {
    type Err = KunaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "withdraws" => Ok(Self::Withdraws),
            "deposits" => Ok(Self::Deposits),
            other => Err(KunaError::InvalidArgument(format!(
                "asset history type must be \"withdraws\" or \"deposits\", got \"{}\"",
                other
            ))),
        }
    }
}

/// Withdrawal request for `/auth/withdraw`
///
/// `withdraw_type` is a currency code like "btc" or "uah", or "default" for
/// fiat-to-card. Crypto withdrawals set `address`; fiat withdrawals set
/// `gateway` or `withdraw_to`.
#[derive(Debug, Clone, Serialize, Default)]
pub struct WithdrawRequest {
    pub withdraw_type: String,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<serde_json::Value>, // extra gateway-specific params
    #[serde(skip_serializing_if = "Option::is_none")]
    pub withdraw_to: Option<String>, // credit card number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fund_source_id: Option<i64>, // saved fiat withdraw gateway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>, // memo/tag for XRP, EOS, Stellar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_blank_memo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub withdrawall: Option<bool>, // amount includes the fee when true
}

impl WithdrawRequest {
    pub fn new(withdraw_type: impl Into<String>, amount: Decimal) -> Self {
        Self {
            withdraw_type: withdraw_type.into(),
            amount,
            ..Self::default()
        }
    }
}

/// Kuna code creation request for `/auth/kuna_codes`
#[derive(Debug, Clone, Serialize, Default)]
pub struct KunaCodeRequest {
    pub currency: String,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_refundable_before: Option<String>, // ISO-8601 "YYYY-MM-DDThh:mm:ss"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_comment: Option<String>,
}

impl KunaCodeRequest {
    pub fn new(currency: impl Into<String>, amount: Decimal) -> Self {
        Self {
            currency: currency.into(),
            amount,
            ..Self::default()
        }
    }
}

/// Paging and filtering for the issued/redeemed Kuna-code listings
#[derive(Debug, Clone, Serialize, Default)]
pub struct KunaCodePage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>, // default 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>, // default 10
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>, // "redeemed_at", "amount", "created_at"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_dir: Option<String>, // "asc", "desc"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<String>>, // issued-by-me only
}
