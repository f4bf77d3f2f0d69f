use crate::core::errors::KunaError;
use crate::core::kernel::{SignatureResult, Signer};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, Secret};
use sha2::Sha384;
use std::collections::HashMap;

type HmacSha384 = Hmac<Sha384>;

/// Request signer for the Kuna v3 API.
///
/// The signature scheme is `HEX(HMAC-SHA384(uri + nonce + body, private_key))`
/// with both the payload and the key treated as ASCII byte strings. The
/// private key is used exclusively as HMAC key material; it never appears in
/// a URL, body, or header.
pub struct KunaSigner {
    public_key: String,
    private_key: Secret<String>,
}

impl KunaSigner {
    pub fn new(public_key: String, private_key: String) -> Self {
        Self {
            public_key,
            private_key: Secret::new(private_key),
        }
    }

    /// Compute the lowercase hex signature for a request.
    ///
    /// Pure and deterministic: identical inputs always produce the identical
    /// 96-character digest. Fails with `KunaError::Encoding` when the payload
    /// or the key contains a non-ASCII character, before any HMAC is run.
    pub fn signature(&self, uri: &str, nonce: &str, body: &str) -> Result<String, KunaError> {
        let payload = format!("{}{}{}", uri, nonce, body);
        if !payload.is_ascii() {
            return Err(KunaError::Encoding(
                "signed payload contains non-ASCII characters".to_string(),
            ));
        }

        let key = self.private_key.expose_secret();
        if !key.is_ascii() {
            return Err(KunaError::Encoding(
                "private key contains non-ASCII characters".to_string(),
            ));
        }

        let mut mac = HmacSha384::new_from_slice(key.as_bytes())
            .map_err(|e| KunaError::Encoding(format!("invalid HMAC key: {}", e)))?;
        mac.update(payload.as_bytes());

        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

impl Signer for KunaSigner {
    fn sign_request(&self, uri: &str, body: &str, nonce: &str) -> SignatureResult {
        let signature = self.signature(uri, nonce, body)?;

        let mut headers = HashMap::new();
        headers.insert("kun-apikey".to_string(), self.public_key.clone());
        headers.insert("kun-nonce".to_string(), nonce.to_string());
        headers.insert("kun-signature".to_string(), signature);

        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> KunaSigner {
        KunaSigner::new("public".to_string(), "secret".to_string())
    }

    #[test]
    fn reference_vector() {
        let sig = signer().signature("/v3/auth/me", "1612345678901", "{}").unwrap();
        assert_eq!(
            sig,
            "d4e44eb5c402eba5fd56c4e1520af67e29218a7c12f454dfe2423c083f193bdc213c2dde5b0cbde82bd294fb95789056"
        );
    }

    #[test]
    fn reference_vector_with_body() {
        let signer = KunaSigner::new("public".to_string(), "another-secret".to_string());
        let sig = signer
            .signature(
                "/v3/auth/w/order/submit",
                "1700000000000",
                r#"{"symbol":"btcuah","type":"limit","amount":"1.5","price":"600"}"#,
            )
            .unwrap();
        assert_eq!(
            sig,
            "8bc50dc707f388d8a09956495c2c897e60ae058756f41afd41fd270b01190b6289df0646d076c23de70580d081cd4bfe"
        );
    }

    #[test]
    fn signature_is_deterministic() {
        let a = signer().signature("/v3/auth/me", "1612345678901", "{}").unwrap();
        let b = signer().signature("/v3/auth/me", "1612345678901", "{}").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 96);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn single_character_perturbations_change_signature() {
        let base = signer().signature("/v3/auth/me", "1612345678901", "{}").unwrap();
        let uri = signer().signature("/v3/auth/mf", "1612345678901", "{}").unwrap();
        let nonce = signer().signature("/v3/auth/me", "1612345678902", "{}").unwrap();
        let body = signer().signature("/v3/auth/me", "1612345678901", "{ }").unwrap();

        assert_ne!(base, uri);
        assert_ne!(base, nonce);
        assert_ne!(base, body);
        assert_ne!(uri, nonce);
    }

    #[test]
    fn key_changes_signature() {
        let a = signer().signature("/v3/auth/me", "1612345678901", "{}").unwrap();
        let other = KunaSigner::new("public".to_string(), "secret2".to_string());
        let b = other.signature("/v3/auth/me", "1612345678901", "{}").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn non_ascii_payload_is_rejected() {
        let err = signer()
            .signature("/v3/auth/me", "1612345678901", r#"{"comment":"привіт"}"#)
            .unwrap_err();
        assert!(matches!(err, KunaError::Encoding(_)));
    }

    #[test]
    fn non_ascii_key_is_rejected() {
        let bad = KunaSigner::new("public".to_string(), "ключ".to_string());
        let err = bad.signature("/v3/auth/me", "1612345678901", "{}").unwrap_err();
        assert!(matches!(err, KunaError::Encoding(_)));
    }

    #[test]
    fn headers_carry_key_nonce_and_signature() {
        let headers = signer()
            .sign_request("/v3/auth/me", "{}", "1612345678901")
            .unwrap();
        assert_eq!(headers.get("kun-apikey").unwrap(), "public");
        assert_eq!(headers.get("kun-nonce").unwrap(), "1612345678901");
        assert_eq!(
            headers.get("kun-signature").unwrap(),
            "d4e44eb5c402eba5fd56c4e1520af67e29218a7c12f454dfe2423c083f193bdc213c2dde5b0cbde82bd294fb95789056"
        );
    }
}
