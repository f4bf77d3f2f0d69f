use crate::core::errors::KunaError;
use crate::core::kernel::RestClient;
use crate::kuna::types::{
    AssetHistoryKind, KunaCodePage, KunaCodeRequest, OrderRequest, WithdrawRequest,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};

/// Kuna REST API surface
///
/// Public endpoints are unauthenticated GETs and work without credentials;
/// private endpoints are signed POSTs and fail fast with
/// `KunaError::MissingCredentials` when no keys are configured. Responses are
/// returned as `serde_json::Value` - the upstream API is schemaless and most
/// payloads are positional arrays.
///
/// Documentation sources:
/// - <https://docs.kuna.io/docs>
/// - <https://github.com/kunadevelopers/api-docs>
#[derive(Debug)]
pub struct KunaRest<R: RestClient> {
    rest_client: R,
}

/// Join a symbols filter into the `symbols` query value; `None` selects all
/// markets.
pub(crate) fn symbols_param(symbols: Option<&[&str]>) -> String {
    symbols.map_or_else(|| "ALL".to_string(), |s| s.join(","))
}

impl<R: RestClient> KunaRest<R> {
    pub fn new(rest_client: R) -> Self {
        Self { rest_client }
    }

    // PUBLIC API

    /// Kuna server time
    pub fn timestamp(&self) -> Result<Value, KunaError> {
        self.rest_client.get("/timestamp", &[])
    }

    /// List of available currencies
    pub fn currencies(&self) -> Result<Value, KunaError> {
        self.rest_client.get("/currencies", &[])
    }

    /// Exchange rates for all currencies or a specified one
    ///
    /// # Arguments
    /// * `currency` - like "eth" or "uah"; `None` returns all rates
    pub fn exchange_rates(&self, currency: Option<&str>) -> Result<Value, KunaError> {
        match currency {
            Some(currency) => self
                .rest_client
                .get(&format!("/exchange-rates/{}", currency), &[]),
            None => self.rest_client.get("/exchange-rates", &[]),
        }
    }

    /// List of available markets
    pub fn markets(&self) -> Result<Value, KunaError> {
        self.rest_client.get("/markets", &[])
    }

    /// Last ticker for certain or all markets
    ///
    /// # Arguments
    /// * `symbols` - like `&["btcuah", "ethuah"]`; `None` requests all markets
    pub fn tickers(&self, symbols: Option<&[&str]>) -> Result<Value, KunaError> {
        let symbols = symbols_param(symbols);
        self.rest_client.get("/tickers", &[("symbols", &symbols)])
    }

    /// Order book snapshot for a market
    ///
    /// # Arguments
    /// * `market` - like "btcuah"
    pub fn book(&self, market: &str) -> Result<Value, KunaError> {
        self.rest_client.get(&format!("/book/{}", market), &[])
    }

    /// Public trade history - not provided by the upstream API
    pub fn history(&self) -> Result<Value, KunaError> {
        Err(KunaError::NotImplemented(
            "public trade history is not available in the v3 API",
        ))
    }

    /// Price-change chart data - not provided by the upstream API
    pub fn price_changes(&self) -> Result<Value, KunaError> {
        Err(KunaError::NotImplemented(
            "price changes are not available in the v3 API",
        ))
    }

    /// Deposit/withdraw methods and withdrawal fees
    pub fn fees(&self) -> Result<Value, KunaError> {
        self.rest_client.get("/fees", &[])
    }

    /// Check a Kuna code by its first 5 symbols
    pub fn kuna_codes_check(&self, code: &str) -> Result<Value, KunaError> {
        self.rest_client
            .get(&format!("/kuna_codes/{}/check", code), &[])
    }

    // PRIVATE API

    /// Test HTTP connection to the private API
    pub fn http_test(&self) -> Result<Value, KunaError> {
        self.rest_client.post("/http_test", &json!({}))
    }

    /// Information about the user account
    pub fn auth_me(&self) -> Result<Value, KunaError> {
        self.rest_client.post("/auth/me", &json!({}))
    }

    /// Account balance in all wallets
    pub fn auth_r_wallets(&self) -> Result<Value, KunaError> {
        self.rest_client.post("/auth/r/wallets", &json!({}))
    }

    /// Send the trade history for a market as CSV to the account email
    ///
    /// # Arguments
    /// * `market` - like "ethuah"
    /// * `date_from` / `date_to` - UNIX timestamps; upstream defaults to the
    ///   last year when absent
    pub fn auth_history_trades(
        &self,
        market: &str,
        date_from: Option<i64>,
        date_to: Option<i64>,
    ) -> Result<Value, KunaError> {
        let mut body = json!({ "market": market });
        if let Some(from) = date_from {
            body["date_from"] = json!(from);
        }
        if let Some(to) = date_to {
            body["date_to"] = json!(to);
        }
        self.rest_client.post("/auth/history/trades", &body)
    }

    // TRADE API

    /// List of active orders, optionally for a single market
    pub fn auth_r_orders(&self, market: Option<&str>) -> Result<Value, KunaError> {
        let path = match market {
            Some(market) => format!("/auth/r/orders/{}", market),
            None => "/auth/r/orders".to_string(),
        };
        self.rest_client.post(&path, &json!({}))
    }

    /// List of executed orders, optionally for a single market
    pub fn auth_r_orders_hist(&self, market: Option<&str>) -> Result<Value, KunaError> {
        let path = match market {
            Some(market) => format!("/auth/r/orders/{}/hist", market),
            None => "/auth/r/orders/hist".to_string(),
        };
        self.rest_client.post(&path, &json!({}))
    }

    /// List of fills for a certain order
    pub fn auth_r_order_trades(&self, market: &str, order_id: i64) -> Result<Value, KunaError> {
        self.rest_client.post(
            &format!("/auth/r/order/{}:{}/trades", market, order_id),
            &json!({}),
        )
    }

    /// Submit a new order
    ///
    /// The order type is validated at construction time via
    /// [`OrderType`](crate::kuna::types::OrderType); nothing is sent for an
    /// invalid type.
    pub fn auth_w_order_submit(&self, order: &OrderRequest) -> Result<Value, KunaError> {
        let body = serde_json::to_value(order)?;
        self.rest_client.post("/auth/w/order/submit", &body)
    }

    /// Cancel one order
    pub fn order_cancel(&self, order_id: i64) -> Result<Value, KunaError> {
        self.rest_client
            .post("/order/cancel", &json!({ "order_id": order_id }))
    }

    /// Cancel several orders at once
    pub fn order_cancel_multi(&self, order_ids: &[i64]) -> Result<Value, KunaError> {
        self.rest_client
            .post("/order/cancel/multi", &json!({ "order_ids": order_ids }))
    }

    // MERCHANT API

    /// Generate a new crypto deposit address (errors upstream if one exists)
    ///
    /// # Arguments
    /// * `currency` - like "usdt"
    /// * `blockchain` - like "eth" or "trx"
    /// * `callback_url` - POSTed to after a successful deposit
    pub fn auth_payment_requests_address(
        &self,
        currency: &str,
        blockchain: Option<&str>,
        callback_url: Option<&str>,
    ) -> Result<Value, KunaError> {
        let mut body = json!({ "currency": currency });
        if let Some(blockchain) = blockchain {
            body["blockchain"] = json!(blockchain);
        }
        if let Some(url) = callback_url {
            body["callback_url"] = json!(url);
        }
        self.rest_client.post("/auth/payment_requests/address", &body)
    }

    /// Get the deposit address for a currency
    pub fn auth_deposit_info(&self, currency: &str) -> Result<Value, KunaError> {
        self.rest_client
            .post("/auth/deposit/info", &json!({ "currency": currency }))
    }

    /// Deposit fiat money through a payment service
    pub fn auth_deposit(
        &self,
        currency: &str,
        amount: Decimal,
        payment_service: &str,
        deposit_from: &str,
    ) -> Result<Value, KunaError> {
        self.rest_client.post(
            "/auth/deposit",
            &json!({
                "currency": currency,
                "amount": amount,
                "payment_service": payment_service,
                "deposit_from": deposit_from,
            }),
        )
    }

    /// Get info about a deposit by id
    pub fn auth_deposit_details(&self, id: i64) -> Result<Value, KunaError> {
        self.rest_client
            .post("/auth/deposit/details", &json!({ "id": id }))
    }

    /// Create a withdrawal request
    pub fn auth_withdraw(&self, withdraw: &WithdrawRequest) -> Result<Value, KunaError> {
        let body = serde_json::to_value(withdraw)?;
        self.rest_client.post("/auth/withdraw", &body)
    }

    /// Get withdrawal status by id
    pub fn auth_withdraw_details(&self, id: i64) -> Result<Value, KunaError> {
        self.rest_client
            .post("/auth/withdraw/details", &json!({ "id": id }))
    }

    /// Deposit and withdrawal history, optionally filtered by kind
    pub fn assets_history(&self, kind: Option<AssetHistoryKind>) -> Result<Value, KunaError> {
        let path = match kind {
            Some(kind) => format!("/auth/assets-history/{}", kind.as_str()),
            None => "/auth/assets-history".to_string(),
        };
        self.rest_client.post(&path, &json!({}))
    }

    /// Deposit using the default payment service
    pub fn auth_merchant_deposit(
        &self,
        currency: &str,
        amount: Decimal,
        return_url: Option<&str>,
        callback_url: Option<&str>,
    ) -> Result<Value, KunaError> {
        let mut body = json!({
            "currency": currency,
            "amount": amount,
            "payment_service": "default",
        });
        if let Some(url) = return_url {
            body["return_url"] = json!(url);
        }
        if let Some(url) = callback_url {
            body["callback_url"] = json!(url);
        }
        self.rest_client.post("/auth/merchant/deposit", &body)
    }

    /// Available payment services (gateways) for a currency
    pub fn auth_merchant_payment_services(&self, currency: &str) -> Result<Value, KunaError> {
        self.rest_client.post(
            "/auth/merchant/payment_services",
            &json!({ "currency": currency }),
        )
    }

    // KUNA CODES

    /// Create a Kuna code
    pub fn kuna_codes_create(&self, request: &KunaCodeRequest) -> Result<Value, KunaError> {
        let body = serde_json::to_value(request)?;
        self.rest_client.post("/auth/kuna_codes", &body)
    }

    /// Info about a code; available only to its creator
    pub fn auth_kuna_codes_details(&self, id: i64) -> Result<Value, KunaError> {
        self.rest_client
            .post("/auth/kuna_codes/details", &json!({ "id": id }))
    }

    /// Activate (redeem) a Kuna code
    pub fn auth_kuna_codes_redeem(&self, code: &str) -> Result<Value, KunaError> {
        self.rest_client
            .post("/auth/kuna_codes/redeem", &json!({ "code": code }))
    }

    /// All Kuna codes issued by the user
    pub fn auth_kuna_codes_issued_by_me(&self, page: &KunaCodePage) -> Result<Value, KunaError> {
        let body = serde_json::to_value(page)?;
        self.rest_client.post("/auth/kuna_codes/issued-by-me", &body)
    }

    /// All Kuna codes redeemed by the user
    pub fn auth_kuna_codes_redeemed_by_me(&self, page: &KunaCodePage) -> Result<Value, KunaError> {
        let body = serde_json::to_value(page)?;
        self.rest_client
            .post("/auth/kuna_codes/redeemed-by-me", &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records the request instead of hitting the network.
    struct RecordingRest {
        calls: Mutex<Vec<(String, String, String)>>, // (verb, path, payload)
    }

    impl RecordingRest {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }

        fn last(&self) -> (String, String, String) {
            self.calls.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl RestClient for RecordingRest {
        fn get(&self, path: &str, query_params: &[(&str, &str)]) -> Result<Value, KunaError> {
            let query = crate::core::kernel::rest::create_query_string(query_params);
            self.calls
                .lock()
                .unwrap()
                .push(("GET".to_string(), path.to_string(), query));
            Ok(json!([]))
        }

        fn get_json<T: serde::de::DeserializeOwned>(
            &self,
            path: &str,
            query_params: &[(&str, &str)],
        ) -> Result<T, KunaError> {
            let value = self.get(path, query_params)?;
            Ok(serde_json::from_value(value)?)
        }

        fn post(&self, path: &str, body: &Value) -> Result<Value, KunaError> {
            self.calls.lock().unwrap().push((
                "POST".to_string(),
                path.to_string(),
                serde_json::to_string(body).unwrap(),
            ));
            Ok(json!([]))
        }

        fn post_json<T: serde::de::DeserializeOwned>(
            &self,
            path: &str,
            body: &Value,
        ) -> Result<T, KunaError> {
            let value = self.post(path, body)?;
            Ok(serde_json::from_value(value)?)
        }
    }

    fn client() -> KunaRest<RecordingRest> {
        KunaRest::new(RecordingRest::new())
    }

    #[test]
    fn tickers_defaults_to_all_symbols() {
        let api = client();
        api.tickers(None).unwrap();
        assert_eq!(
            api.rest_client.last(),
            ("GET".to_string(), "/tickers".to_string(), "symbols=ALL".to_string())
        );
    }

    #[test]
    fn tickers_joins_symbols_with_commas() {
        let api = client();
        api.tickers(Some(&["a", "b"])).unwrap();
        assert_eq!(api.rest_client.last().2, "symbols=a,b");
    }

    #[test]
    fn symbols_param_handles_both_forms() {
        assert_eq!(symbols_param(None), "ALL");
        assert_eq!(symbols_param(Some(&["btcuah"])), "btcuah");
        assert_eq!(symbols_param(Some(&["a", "b", "c"])), "a,b,c");
    }

    #[test]
    fn optional_market_selects_path() {
        let api = client();

        api.auth_r_orders(None).unwrap();
        assert_eq!(api.rest_client.last().1, "/auth/r/orders");

        api.auth_r_orders(Some("btcuah")).unwrap();
        assert_eq!(api.rest_client.last().1, "/auth/r/orders/btcuah");

        api.auth_r_orders_hist(Some("btcuah")).unwrap();
        assert_eq!(api.rest_client.last().1, "/auth/r/orders/btcuah/hist");

        api.exchange_rates(Some("uah")).unwrap();
        assert_eq!(api.rest_client.last().1, "/exchange-rates/uah");
    }

    #[test]
    fn order_trades_path_joins_market_and_id() {
        let api = client();
        api.auth_r_order_trades("btcuah", 10_000_000).unwrap();
        assert_eq!(api.rest_client.last().1, "/auth/r/order/btcuah:10000000/trades");
    }

    #[test]
    fn empty_bodies_serialize_to_empty_object() {
        let api = client();
        api.auth_me().unwrap();
        let (verb, path, payload) = api.rest_client.last();
        assert_eq!(verb, "POST");
        assert_eq!(path, "/auth/me");
        assert_eq!(payload, "{}");
    }

    #[test]
    fn cancel_bodies_carry_ids() {
        let api = client();

        api.order_cancel(42).unwrap();
        assert_eq!(api.rest_client.last().2, r#"{"order_id":42}"#);

        api.order_cancel_multi(&[1, 2, 3]).unwrap();
        assert_eq!(api.rest_client.last().2, r#"{"order_ids":[1,2,3]}"#);
    }

    #[test]
    fn assets_history_paths() {
        let api = client();

        api.assets_history(None).unwrap();
        assert_eq!(api.rest_client.last().1, "/auth/assets-history");

        api.assets_history(Some(AssetHistoryKind::Deposits)).unwrap();
        assert_eq!(api.rest_client.last().1, "/auth/assets-history/deposits");
    }

    #[test]
    fn merchant_deposit_pins_default_service() {
        let api = client();
        api.auth_merchant_deposit("uah", rust_decimal_macros::dec!(100), None, None)
            .unwrap();
        let (_, path, payload) = api.rest_client.last();
        assert_eq!(path, "/auth/merchant/deposit");
        let body: Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(body["payment_service"], "default");
        assert!(body.get("return_url").is_none());
    }

    #[test]
    fn unimplemented_endpoints_signal_clearly() {
        let api = client();
        assert!(matches!(api.history(), Err(KunaError::NotImplemented(_))));
        assert!(matches!(api.price_changes(), Err(KunaError::NotImplemented(_))));
        assert!(api.rest_client.calls.lock().unwrap().is_empty());
    }
}
