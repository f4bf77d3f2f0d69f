use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;

/// API credential pair and client options.
///
/// The public key identifies the account and is sent in the `kun-apikey`
/// header; the private key is used only as HMAC key material and is never
/// transmitted. Both are held behind [`Secret`] so they cannot leak through
/// `Debug` or `Serialize` output.
#[derive(Debug, Clone)]
pub struct KunaConfig {
    pub public_key: Secret<String>,
    pub private_key: Secret<String>,
    pub base_url: Option<String>,
    /// Suppress the warning emitted when the client is built without
    /// credentials. Per-client replacement for a process-wide warnings
    /// filter.
    pub quiet: bool,
}

// Custom Serialize implementation - never expose secrets in serialization
impl Serialize for KunaConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("KunaConfig", 4)?;
        state.serialize_field("public_key", "[REDACTED]")?;
        state.serialize_field("private_key", "[REDACTED]")?;
        state.serialize_field("base_url", &self.base_url)?;
        state.serialize_field("quiet", &self.quiet)?;
        state.end()
    }
}

// Custom Deserialize implementation
impl<'de> Deserialize<'de> for KunaConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct KunaConfigHelper {
            public_key: String,
            private_key: String,
            base_url: Option<String>,
            #[serde(default)]
            quiet: bool,
        }

        let helper = KunaConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            public_key: Secret::new(helper.public_key),
            private_key: Secret::new(helper.private_key),
            base_url: helper.base_url,
            quiet: helper.quiet,
        })
    }
}

impl KunaConfig {
    /// Create a new configuration with API credentials
    #[must_use]
    pub fn new(public_key: String, private_key: String) -> Self {
        Self {
            public_key: Secret::new(public_key),
            private_key: Secret::new(private_key),
            base_url: None,
            quiet: false,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `KUNA_PUBLIC_KEY`
    /// - `KUNA_PRIVATE_KEY`
    /// - `KUNA_BASE_URL` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        let public_key = env::var("KUNA_PUBLIC_KEY")
            .map_err(|_| ConfigError::MissingEnvironmentVariable("KUNA_PUBLIC_KEY".to_string()))?;

        let private_key = env::var("KUNA_PRIVATE_KEY")
            .map_err(|_| ConfigError::MissingEnvironmentVariable("KUNA_PRIVATE_KEY".to_string()))?;

        let base_url = env::var("KUNA_BASE_URL").ok();

        Ok(Self {
            public_key: Secret::new(public_key),
            private_key: Secret::new(private_key),
            base_url,
            quiet: false,
        })
    }

    /// Create configuration from a .env file and environment variables
    ///
    /// Loads environment variables from a .env file (if it exists), then
    /// reads the configuration using the standard variable names.
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file() -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(".env")
    }

    /// Create configuration from a specific .env file path
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                // .env file doesn't exist, continue with system env vars
            }
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env()
    }

    /// Create configuration for public endpoints only.
    /// No credentials are required for the public API.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            public_key: Secret::new(String::new()),
            private_key: Secret::new(String::new()),
            base_url: None,
            quiet: false,
        }
    }

    /// Check if this configuration has valid credentials for authenticated operations
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.public_key.expose_secret().is_empty() && !self.private_key.expose_secret().is_empty()
    }

    /// Set custom base URL
    #[must_use]
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Suppress the missing-credentials warning
    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Get public key (use carefully - exposes secret)
    pub fn public_key(&self) -> &str {
        self.public_key.expose_secret()
    }

    /// Get private key (use carefully - exposes secret)
    pub fn private_key(&self) -> &str {
        self.private_key.expose_secret()
    }
}

impl Default for KunaConfig {
    fn default() -> Self {
        Self::read_only()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
