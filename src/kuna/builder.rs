use crate::core::config::KunaConfig;
use crate::core::errors::KunaError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig};
use crate::kuna::rest::KunaRest;
use crate::kuna::signer::KunaSigner;
use std::sync::Arc;
use tracing::warn;

const DEFAULT_BASE_URL: &str = "https://api.kuna.io";
const API_PREFIX: &str = "/v3";

const KEYS_NEEDED_MESSAGE: &str = "client initialized without a public or private key; \
     only the public API is available. \
     Get keys from https://kuna.io/settings/api_tokens";

/// Ready-to-use client over the blocking transport
pub type KunaClient = KunaRest<ReqwestRest>;

/// Builder for creating Kuna API clients
///
/// Without credentials the client serves the public API only; authenticated
/// calls fail fast with `KunaError::MissingCredentials`.
pub struct KunaBuilder {
    config: KunaConfig,
    timeout_seconds: u64,
    user_agent: Option<String>,
}

impl KunaBuilder {
    /// Create a new `KunaBuilder` with default settings
    pub fn new() -> Self {
        Self {
            config: KunaConfig::read_only(),
            timeout_seconds: 30,
            user_agent: None,
        }
    }

    /// Set the client configuration
    pub fn with_config(mut self, config: KunaConfig) -> Self {
        self.config = config;
        self
    }

    /// Set API credentials
    pub fn with_credentials(mut self, public_key: String, private_key: String) -> Self {
        let quiet = self.config.quiet;
        let base_url = self.config.base_url.take();
        self.config = KunaConfig::new(public_key, private_key).quiet(quiet);
        self.config.base_url = base_url;
        self
    }

    /// Set base URL for the REST API
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.config.base_url = Some(base_url);
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    /// Suppress the warning emitted when building without credentials
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.config.quiet = quiet;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<KunaClient, KunaError> {
        let base_url = self
            .config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut rest_config = RestClientConfig::new(base_url, API_PREFIX.to_string())
            .with_timeout(self.timeout_seconds);
        if let Some(user_agent) = self.user_agent {
            rest_config = rest_config.with_user_agent(user_agent);
        }

        let mut rest_builder = RestClientBuilder::new(rest_config);

        if self.config.has_credentials() {
            let signer = Arc::new(KunaSigner::new(
                self.config.public_key().to_string(),
                self.config.private_key().to_string(),
            ));
            rest_builder = rest_builder.with_signer(signer);
        } else if !self.config.quiet {
            warn!("{}", KEYS_NEEDED_MESSAGE);
        }

        let rest = rest_builder.build()?;

        Ok(KunaRest::new(rest))
    }
}

impl Default for KunaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a client for the public API only
pub fn build_public_client() -> Result<KunaClient, KunaError> {
    KunaBuilder::new().with_quiet(true).build()
}

/// Create a client with the given credentials
pub fn build_client(config: KunaConfig) -> Result<KunaClient, KunaError> {
    KunaBuilder::new().with_config(config).build()
}
