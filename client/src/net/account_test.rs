use super::*;

#[test]
fn default_gateway_targets_create_account_endpoint() {
    let gateway = HttpAccountGateway::default();
    assert_eq!(gateway.endpoint(), "https://ops-adduser.builtwithdark.com/v3/create-account");
}

#[test]
fn transport_error_formats_detail() {
    let err = TransportError("dns lookup failed".to_owned());
    assert_eq!(err.to_string(), "transport failure: dns lookup failed");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_gateway_reports_transport_failure_outside_browser() {
    let gateway = HttpAccountGateway::new("http://localhost:1/unused");
    let req = SignupRequest {
        name: "n".to_owned(),
        email: "e@example.com".to_owned(),
        username: "u".to_owned(),
    };
    let result = futures::executor::block_on(gateway.create_account(&req));
    assert_eq!(result, Err(TransportError("not available on server".to_owned())));
}
