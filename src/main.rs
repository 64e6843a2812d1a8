//! koleso-web server entrypoint

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use koleso_web::config::Config;
use koleso_web::pricing::{self, PriceBook};
use koleso_web::routes::site;
use koleso_web::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // The price book is immutable for the lifetime of the process.
    let book = match &config.price_book_path {
        Some(path) => PriceBook::from_json_file(path)
            .with_context(|| format!("loading price book from {}", path.display()))?,
        None => PriceBook::builtin(),
    };

    let state = AppState {
        book: Arc::new(book),
        config: Arc::new(config.clone()),
    };

    let app = Router::new()
        .route("/", get(site::home))
        .route("/health", get(site::health))
        .nest("/api/pricing", pricing::router())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .fallback(site::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = config.bind_addr();
    info!("koleso-web listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
