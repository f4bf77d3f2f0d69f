pub mod builder;
pub mod compat;
pub mod rest;
pub mod signer;
pub mod types;

// Re-export main components
pub use builder::{build_client, build_public_client, KunaBuilder, KunaClient};
pub use rest::KunaRest;
pub use signer::KunaSigner;
pub use types::{
    AssetHistoryKind, KunaCodePage, KunaCodeRequest, OrderRequest, OrderType, WithdrawRequest,
};
