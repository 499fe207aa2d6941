//! HTTP surface: a single `GET /gqlMedia?query=...` route.

use crate::catalog::Catalog;
use crate::executor::{Executor, Response};
use crate::resolver::Resolver;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Path of the query endpoint.
pub const QUERY_PATH: &str = "/gqlMedia";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub executor: Executor,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            executor: Executor::new(Resolver::new(catalog)),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct QueryParams {
    #[serde(default)]
    pub query: String,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(QUERY_PATH, get(query_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Always answers 200; failures travel in the envelope's `errors`.
async fn query_handler(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Json<Response> {
    Json(state.executor.execute(&params.query))
}
