mod config;
mod error;
mod routes;

use crate::config::SiteConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, ".env present but unreadable; using process environment");
        }
    }

    let config = SiteConfig::from_env()?;
    let app = routes::app(&config)?;

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind { addr: config.addr, source })?;

    tracing::info!(addr = %config.addr, assets = %config.assets_dir.display(), "darklang-www listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
