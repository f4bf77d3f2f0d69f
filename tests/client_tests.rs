use kunax::{
    build_public_client, KunaBuilder, KunaConfig, KunaError, KunaSigner, OrderRequest, OrderType,
};
use rust_decimal_macros::dec;

/// Create a configuration with dummy credentials
fn create_test_config() -> KunaConfig {
    KunaConfig::new("test_public_key".to_string(), "test_private_key".to_string())
}

#[test]
fn public_client_builds_without_credentials() {
    let client = build_public_client();
    assert!(client.is_ok());
}

#[test]
fn authenticated_call_without_credentials_fails_fast() {
    let client = build_public_client().unwrap();

    // No keys configured: these must fail before any network I/O.
    for result in [
        client.auth_me(),
        client.auth_r_wallets(),
        client.auth_r_orders(None),
        client.order_cancel(1),
        client.assets_history(None),
        client.auth_kuna_codes_redeem("857ny-XXXXX"),
    ] {
        match result {
            Err(KunaError::MissingCredentials(msg)) => {
                assert!(msg.contains("key"));
            }
            other => panic!("expected MissingCredentials, got {:?}", other.err()),
        }
    }
}

#[test]
fn order_submit_with_invalid_type_never_reaches_the_wire() {
    let err = "invalid_type".parse::<OrderType>().unwrap_err();
    assert!(matches!(err, KunaError::InvalidArgument(_)));
    assert!(err.to_string().contains("invalid_type"));
}

#[test]
fn order_request_body_matches_the_wire_format() {
    let order = OrderRequest::limit("ethuah", dec!(1.0), dec!(600.0));
    let body = serde_json::to_value(&order).unwrap();
    assert_eq!(body["symbol"], "ethuah");
    assert_eq!(body["type"], "limit");
}

#[test]
fn signature_matches_reference_implementation() {
    let signer = KunaSigner::new("public".to_string(), "secret".to_string());
    let signature = signer.signature("/v3/auth/me", "1612345678901", "{}").unwrap();
    assert_eq!(
        signature,
        "d4e44eb5c402eba5fd56c4e1520af67e29218a7c12f454dfe2423c083f193bdc213c2dde5b0cbde82bd294fb95789056"
    );
}

#[test]
fn signer_rejects_non_ascii_input_before_hashing() {
    let signer = KunaSigner::new("public".to_string(), "secret".to_string());
    let err = signer
        .signature("/v3/auth/me", "1612345678901", "{\"note\":\"ціна\"}")
        .unwrap_err();
    assert!(matches!(err, KunaError::Encoding(_)));
}

#[test]
fn builder_carries_credentials_into_a_working_client() {
    let client = KunaBuilder::new()
        .with_config(create_test_config())
        .with_timeout(5)
        .build();
    assert!(client.is_ok());
}

#[test]
fn config_never_leaks_secrets() {
    let config = create_test_config();
    let shown = format!("{:?}", config);
    assert!(!shown.contains("test_private_key"));
}
