/// Transport kernel - generic HTTP layer for the exchange client
///
/// The kernel contains only transport logic and generic interfaces: an HTTP
/// client abstraction and a pluggable signing interface. It knows nothing
/// about individual endpoints.
///
/// - `RestClient`: blocking HTTP interface; public GETs and signed POSTs
/// - `Signer`: pluggable request authentication
///
/// Every operation is a single synchronous request/response exchange. There
/// is deliberately no retry, pooling, pagination, or rate-limit machinery in
/// this layer.
pub mod rest;
pub mod signer;

// Re-export key types for convenience
pub use rest::{ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
pub use signer::{SignatureResult, Signer};
