mod catalog;
mod config;
mod db;
mod entities;
mod error;
mod models;
mod routes;
mod seed;
mod templates;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{catalog::Catalog, config::Config};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/movies", get(routes::movie_list))
        .route("/movie/{movie_id}", get(routes::movie_detail))
        .route("/cinemas", get(routes::cinema_list))
        .route("/cinema/{cinema_code}", get(routes::cinema_detail))
        .route("/showtimes", get(routes::showtime_list))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,gishe=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let catalog = Catalog::new(db);

    if config.seed_demo_data {
        seed::seed_if_empty(&catalog).await?;
    }

    let state = Arc::new(AppState { catalog });

    let app = router(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
