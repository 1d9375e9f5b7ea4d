use axum::{
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(handlers::system::health_get))
        .route("/params", get(handlers::params::params_get).post(handlers::params::params_post))
        .route("/params/duplicates", get(handlers::params::duplicates_get))
        .route("/params/rewritten", get(handlers::params::rewritten_get))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
