//! Signed REST client for the Kuna cryptocurrency exchange (API v3).
//!
//! Public endpoints work without credentials; authenticated endpoints sign
//! every request with `HEX(HMAC-SHA384(uri + nonce + body, private_key))` and
//! send the `kun-apikey` / `kun-nonce` / `kun-signature` header triple.
//!
//! ```rust,no_run
//! use kunax::KunaBuilder;
//!
//! # fn main() -> Result<(), kunax::KunaError> {
//! let client = KunaBuilder::new()
//!     .with_credentials("public".to_string(), "private".to_string())
//!     .build()?;
//!
//! let markets = client.markets()?;
//! let wallets = client.auth_r_wallets()?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod kuna;

pub use crate::core::{config::KunaConfig, errors::KunaError};
pub use crate::kuna::{
    build_client, build_public_client, AssetHistoryKind, KunaBuilder, KunaClient, KunaCodePage,
    KunaCodeRequest, KunaRest, KunaSigner, OrderRequest, OrderType, WithdrawRequest,
};
