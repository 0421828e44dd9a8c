//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches a few plain HTTP routes together with Leptos SSR rendering under a
//! single Axum router. Known pages are server-rendered from the client route
//! list; anything else falls through to static files or the app's 404 page.

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::error::ServerError;

/// Non-Leptos routes: health probe, legacy redirects, static assets.
fn base_routes(assets_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/signup.html", get(redirect_legacy_signup))
        .nest_service("/assets", ServeDir::new(assets_dir))
}

/// Full site router: base routes + Leptos SSR + `/pkg` bundle + 404 fallback.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn app(config: &SiteConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(www_client::app::App);
    tracing::debug!(count = routes.len(), "leptos routes registered");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || www_client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(www_client::app::shell))
        .with_state(leptos_options);

    Ok(base_routes(&config.assets_dir)
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// The pre-SPA site served the form as a static page.
async fn redirect_legacy_signup() -> Redirect {
    Redirect::permanent("/signup")
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
