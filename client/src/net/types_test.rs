use super::*;

#[test]
fn signup_request_serializes_expected_field_names() {
    let req = SignupRequest {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        username: "ada".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "username": "ada",
        })
    );
}

#[test]
fn account_response_success_is_exactly_200() {
    assert!(AccountResponse::new(200, "").is_success());
    assert!(!AccountResponse::new(201, "created").is_success());
    assert!(!AccountResponse::new(204, "").is_success());
    assert!(!AccountResponse::new(404, "username taken").is_success());
}
