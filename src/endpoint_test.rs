use super::*;

#[test]
fn resolve_uses_separate_port_by_default() {
    let endpoint = Endpoint::resolve("127.0.0.1", 8080).expect("endpoint");
    assert_eq!(endpoint.http_url("/"), "http://127.0.0.1:8080/");
}

#[test]
fn embedded_port_overrides_port_argument() {
    let endpoint = Endpoint::resolve("example.com:9001", 8080).expect("endpoint");
    assert_eq!(
        endpoint.http_url("/multipart"),
        "http://example.com:9001/multipart"
    );
}

#[test]
fn ws_url_shares_authority_with_http_url() {
    let endpoint = Endpoint::resolve("localhost", 8080).expect("endpoint");
    assert_eq!(endpoint.ws_url("/ws/"), "ws://localhost:8080/ws/");
    assert_eq!(endpoint.http_url("/ws/"), "http://localhost:8080/ws/");
}

#[test]
fn resolve_rejects_unparseable_embedded_port() {
    let err = Endpoint::resolve("example.com:abc", 8080).expect_err("port should be invalid");
    assert!(matches!(err, ProbeError::InvalidPort(value) if value == "abc"));
}

#[test]
fn resolve_rejects_out_of_range_embedded_port() {
    let err = Endpoint::resolve("localhost:70000", 8080).expect_err("port should overflow");
    assert!(matches!(err, ProbeError::InvalidPort(value) if value == "70000"));
}

#[test]
fn resolve_splits_at_first_colon_only() {
    let err = Endpoint::resolve("host:90:91", 8080).expect_err("second colon should fail");
    assert!(matches!(err, ProbeError::InvalidPort(value) if value == "90:91"));
}
