use axum::http::header::LOCATION;
use axum::response::IntoResponse;

use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn legacy_signup_page_redirects_permanently() {
    let resp = redirect_legacy_signup().await.into_response();
    assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(resp.headers()[LOCATION], "/signup");
}

#[test]
fn base_routes_build_without_leptos_config() {
    let _router = base_routes(Path::new("public"));
}
