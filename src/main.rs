use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    http::Method,
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::app::{envy::Envy, errors::DefaultApiError};

mod app;
mod logos;
mod media;
mod records;
#[cfg(test)]
mod test_util;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(envy: Envy) -> Self {
        return Self {
            envy: Arc::new(envy),
            client: reqwest::Client::new(),
        };
    }
}

pub fn router(state: AppState) -> Router {
    let max_upload_bytes = state.envy.max_upload_bytes();

    Router::new()
        .route("/", get(app::controller::get_root))
        // logos
        .route("/generate-logo", post(logos::controller::generate_logo))
        .route(
            "/upload-logo",
            post(logos::controller::upload_logo).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    if envy.openai_api_key().is_none() {
        tracing::warn!("OPENAI_API_KEY is not set, /generate-logo will fail");
    }

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);
    let rate_limit = envy.rate_limit_per_sec();
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS]);

    let state = AppState::new(envy);

    // app
    let app = router(state)
        // layers
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    tracing::warn!(%err, "request rejected by service layer");
                    DefaultApiError::ServiceUnavailable.value()
                }))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(rate_limit, Duration::from_secs(1))),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("server error");
}
