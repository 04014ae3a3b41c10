mod config;
mod db;
mod entities;
mod error;
mod models;
mod routes;
mod store;
mod templates;
mod tmdb;

use std::{sync::Arc, time::Duration};

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{config::Config, store::MovieStore, tmdb::TmdbClient};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: MovieStore,
    pub tmdb: Arc<TmdbClient>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,movielog=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let http = reqwest::Client::builder()
        .user_agent("movielog/0.1")
        .timeout(Duration::from_secs(30))
        .build()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let store = MovieStore::new(db);

    let tmdb =
        TmdbClient::new(http, config.tmdb_api_key.clone(), config.tmdb_base_url.clone());

    let state = Arc::new(AppState { config: config.clone(), store, tmdb: Arc::new(tmdb) });

    let app = Router::new()
        .route("/", get(routes::home))
        .route("/add", get(routes::add_page).post(routes::add_submit))
        .route("/select/{id}", get(routes::select))
        .route("/edit/{id}", get(routes::edit_page).post(routes::edit_submit))
        .route("/delete/{id}", get(routes::delete))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
