use crate::core::errors::KunaError;
use std::collections::HashMap;

/// Result type for signing operations: authentication headers to attach.
pub type SignatureResult = Result<HashMap<String, String>, KunaError>;

/// Signer trait for request authentication
///
/// Implementations turn a request into the set of authentication headers the
/// exchange expects. The transport serializes the body exactly once and hands
/// the same string to the signer and to the wire, so the signed bytes are the
/// sent bytes.
pub trait Signer: Send + Sync {
    /// Sign a request and return the headers to include
    ///
    /// # Arguments
    /// * `uri` - Version-prefixed request path, query string already appended
    /// * `body` - Canonical JSON body (`"{}"` for an empty body)
    /// * `nonce` - Base-10 epoch milliseconds, string form
    fn sign_request(&self, uri: &str, body: &str, nonce: &str) -> SignatureResult;
}
