use crate::core::errors::KunaError;
use crate::core::kernel::signer::Signer;
use reqwest::blocking::{Client, Response};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{instrument, trace};

/// REST client trait for making HTTP requests
///
/// Every Kuna operation is a single synchronous request/response pair: public
/// endpoints are plain GETs, authenticated endpoints are signed POSTs with a
/// JSON body. There is no retry, pooling, or rate-limit logic at this layer.
pub trait RestClient: Send + Sync {
    /// Make an unauthenticated GET request
    ///
    /// # Arguments
    /// * `path` - The API endpoint path (without the version prefix)
    /// * `query_params` - Query parameters as key-value pairs
    ///
    /// # Returns
    /// The response body as a JSON value
    fn get(&self, path: &str, query_params: &[(&str, &str)]) -> Result<Value, KunaError>;

    /// Make an unauthenticated GET request with strongly-typed response
    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query_params: &[(&str, &str)],
    ) -> Result<T, KunaError>;

    /// Make a signed POST request
    ///
    /// # Arguments
    /// * `path` - The API endpoint path (without the version prefix)
    /// * `body` - Request body as JSON value (`{}` when the endpoint takes none)
    ///
    /// # Returns
    /// The response body as a JSON value
    fn post(&self, path: &str, body: &Value) -> Result<Value, KunaError>;

    /// Make a signed POST request with strongly-typed response
    fn post_json<T: DeserializeOwned>(&self, path: &str, body: &Value) -> Result<T, KunaError>;
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Path prefix carrying the API version, e.g. `/v3`
    pub prefix: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl RestClientConfig {
    /// Create a new configuration
    pub fn new(base_url: String, prefix: String) -> Self {
        Self {
            base_url,
            prefix,
            timeout_seconds: 30,
            user_agent: concat!("kunax/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl RestClientBuilder {
    /// Create a new builder with the given configuration
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            signer: None,
        }
    }

    /// Set the signer for authenticated requests
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Build the REST client
    pub fn build(self) -> Result<ReqwestRest, KunaError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()?;

        Ok(ReqwestRest {
            client,
            config: self.config,
            signer: self.signer,
        })
    }
}

/// Implementation of `RestClient` using blocking reqwest
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .field("has_signer", &self.signer.is_some())
            .finish_non_exhaustive()
    }
}

/// Current epoch milliseconds as the request nonce.
///
/// The wall clock only moves forward in practice, which gives the
/// strictly-increasing property the server checks for replay protection.
pub(crate) fn nonce_millis() -> Result<u64, KunaError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .map_err(|e| KunaError::Encoding(format!("system clock before epoch: {}", e)))
}

/// Join query parameters into a `k=v&k=v` string.
///
/// Values are plain ASCII identifiers on this API (`symbols=a,b` is sent
/// literally), so no percent-encoding is applied.
pub(crate) fn create_query_string(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// Extract the server's error message from a response body.
///
/// The API reports failures as `{"messages": [...]}`; when the body is not
/// JSON (or has no `messages` field), the raw text is carried instead.
pub(crate) fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map
            .get("messages")
            .map_or_else(|| body.to_string(), ToString::to_string),
        _ => body.to_string(),
    }
}

impl ReqwestRest {
    /// Build the version-prefixed URI for an endpoint, query included.
    ///
    /// This is the exact string covered by the signature, so it must match
    /// what goes on the wire byte for byte.
    fn build_uri(&self, path: &str, query_params: &[(&str, &str)]) -> String {
        if query_params.is_empty() {
            format!("{}{}", self.config.prefix, path)
        } else {
            format!(
                "{}{}?{}",
                self.config.prefix,
                path,
                create_query_string(query_params)
            )
        }
    }

    /// Handle the response and extract JSON
    #[instrument(skip(self, response), fields(status = %response.status()))]
    fn handle_response(&self, response: Response) -> Result<Value, KunaError> {
        let status = response.status();
        let response_text = response.text()?;

        trace!("Response body: {}", response_text);

        if status.is_success() {
            Ok(serde_json::from_str(&response_text)?)
        } else {
            Err(KunaError::Api {
                status: status.as_u16(),
                message: extract_error_message(&response_text),
            })
        }
    }

    /// Make a request with the given parameters
    #[instrument(skip(self, body), fields(method = %method, path = %path))]
    fn make_request(
        &self,
        method: Method,
        path: &str,
        query_params: &[(&str, &str)],
        body: Option<&Value>,
    ) -> Result<Value, KunaError> {
        let uri = self.build_uri(path, query_params);
        let url = format!("{}{}", self.config.base_url, uri);

        let mut request = self
            .client
            .request(method, &url)
            .header("accept", "application/json")
            .header("content-type", "application/json");

        if let Some(body) = body {
            // Signed before any network I/O; credential and encoding
            // failures must surface without touching the wire.
            let signer = self.signer.as_ref().ok_or_else(|| {
                KunaError::MissingCredentials(
                    "authenticated endpoint requires a public and private key".to_string(),
                )
            })?;

            let body_str = serde_json::to_string(body)?;
            let nonce = nonce_millis()?.to_string();
            let headers = signer.sign_request(&uri, &body_str, &nonce)?;

            for (key, value) in headers {
                request = request.header(&key, &value);
            }
            request = request.body(body_str);
        }

        let response = request.send()?;
        self.handle_response(response)
    }
}

impl RestClient for ReqwestRest {
    #[instrument(skip(self, query_params), fields(path = %path, param_count = query_params.len()))]
    fn get(&self, path: &str, query_params: &[(&str, &str)]) -> Result<Value, KunaError> {
        self.make_request(Method::GET, path, query_params, None)
    }

    #[instrument(skip(self, query_params), fields(path = %path, param_count = query_params.len()))]
    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query_params: &[(&str, &str)],
    ) -> Result<T, KunaError> {
        let value = self.make_request(Method::GET, path, query_params, None)?;
        Ok(serde_json::from_value(value)?)
    }

    #[instrument(skip(self, body), fields(path = %path))]
    fn post(&self, path: &str, body: &Value) -> Result<Value, KunaError> {
        self.make_request(Method::POST, path, &[], Some(body))
    }

    #[instrument(skip(self, body), fields(path = %path))]
    fn post_json<T: DeserializeOwned>(&self, path: &str, body: &Value) -> Result<T, KunaError> {
        let value = self.make_request(Method::POST, path, &[], Some(body))?;
        Ok(serde_json::from_value(value)?)
    }
}
