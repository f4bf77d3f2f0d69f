//! Deprecated aliases kept for callers of the historical method names.
//!
//! Every alias is a thin shim delegating to the canonical operation; none of
//! them duplicate request logic.

use crate::core::errors::KunaError;
use crate::core::kernel::RestClient;
use crate::kuna::rest::KunaRest;
use crate::kuna::types::OrderRequest;
use rust_decimal::Decimal;
use serde_json::Value;

impl<R: RestClient> KunaRest<R> {
    #[deprecated(note = "use `timestamp()`")]
    pub fn get_server_time(&self) -> Result<Value, KunaError> {
        self.timestamp()
    }

    #[deprecated(note = "use `tickers(Some(&[market]))`")]
    pub fn get_recent_market_data(&self, market: &str) -> Result<Value, KunaError> {
        self.tickers(Some(&[market]))
    }

    #[deprecated(note = "use `book(market)`")]
    pub fn get_order_book(&self, market: &str) -> Result<Value, KunaError> {
        self.book(market)
    }

    #[deprecated(note = "use `history()`")]
    pub fn get_trades_history(&self, _market: &str) -> Result<Value, KunaError> {
        self.history()
    }

    #[deprecated(note = "use `auth_me()`")]
    pub fn get_user_account_info(&self) -> Result<Value, KunaError> {
        self.auth_me()
    }

    #[deprecated(note = "use `auth_r_orders(market)`")]
    pub fn get_orders(&self, market: &str) -> Result<Value, KunaError> {
        self.auth_r_orders(Some(market))
    }

    /// Limit-order shorthand from the v2-era API.
    ///
    /// The side is folded into the sign of the amount: "buy" submits a
    /// positive amount, "sell" a negative one.
    #[deprecated(note = "use `auth_w_order_submit(&OrderRequest)`")]
    pub fn put_order(
        &self,
        side: &str,
        amount: Decimal,
        symbol: &str,
        price: Decimal,
    ) -> Result<Value, KunaError> {
        let amount = match side.to_ascii_lowercase().as_str() {
            "buy" => amount.abs(),
            "sell" => -amount.abs(),
            other => {
                return Err(KunaError::InvalidArgument(format!(
                    "order side must be \"buy\" or \"sell\", got \"{}\"",
                    other
                )))
            }
        };
        self.auth_w_order_submit(&OrderRequest::limit(symbol, amount, price))
    }

    #[deprecated(note = "use `order_cancel(order_id)`")]
    pub fn cancel_order(&self, order_id: i64) -> Result<Value, KunaError> {
        self.order_cancel(order_id)
    }

    #[deprecated(note = "use `auth_r_orders_hist(market)`")]
    pub fn get_trade_history(&self, market: &str) -> Result<Value, KunaError> {
        self.auth_r_orders_hist(Some(market))
    }
}
