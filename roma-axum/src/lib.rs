#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod analysis_routes;
mod data_routes;
mod page;

use aide::{
    axum::{ApiRouter, routing::get},
    openapi::OpenApi,
};
use axum::{Extension, Json, http::StatusCode};
use roma_core::{
    models::Dataset,
    ports::{Application, DataSource as _},
};
use schemars::JsonSchema;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{Level, event};

mod openapi;
use openapi::{api_docs, docs_routes};

pub mod config;
use config::AxumConfig;

/// Response for the health check endpoint
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Construct the full router (dashboard page, JSON API and docs) with the
/// given state and config.
///
/// The generated OpenAPI document is returned alongside the router so that
/// it can be written out without starting a server.
pub fn router<T: ApiApplication>(state: T, config: AxumConfig) -> (axum::Router, OpenApi) {
    let mut api = OpenApi::default();
    let router = ApiRouter::new()
        .api_route("/health", get(health_check))
        .nest(
            "/api",
            data_routes::router().merge(analysis_routes::router()),
        )
        .nest_api_service("/docs", docs_routes())
        .finish_api_with(&mut api, api_docs)
        .route("/", axum::routing::get(page::dashboard::<T>));

    let router = if config.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    let docs = api.clone();
    let router = router
        .layer(Extension(Arc::new(api))) // keep the document behind an Arc, it is cloned into every request
        .with_state(state);

    (router, docs)
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: ApiApplication>(
    config: AxumConfig,
    app: T,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening for requests on {}", listener.local_addr()?);

    let (service, _) = router(app, config);
    axum::serve(listener, service).await
}

/// Regenerate the dataset for a single request.
///
/// Every request starts from a fresh table; nothing is cached between
/// requests.
pub(crate) fn load_dataset<T: ApiApplication>(app: &T) -> Result<Dataset, (StatusCode, String)> {
    app.source().load().map_err(|err| {
        event!(Level::ERROR, err = err.to_string());
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to load market data".to_string(),
        )
    })
}

/// Axum imposes all sorts of constraints on what can pass for state. This
/// trait, coupled with a blanket implementation, specifies it all upfront and
/// in one place. If a function takes a generic `T: ApiApplication`, then
/// everything one might reasonably want to do should work.
pub trait ApiApplication:
    Clone
    + Send
    + Sync
    + 'static
    + Application<Source: Send + Sync + 'static, Forecaster: Send + Sync + 'static>
{
}

// this is the blanket implementation
impl<T: Clone + Send + Sync + 'static> ApiApplication for T where
    T: Application<Source: Send + Sync + 'static, Forecaster: Send + Sync + 'static>
{
}
