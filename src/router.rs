use crate::db::IdentityStorage;
use crate::handlers;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct PalmgateState {
    pub storage: IdentityStorage,
}

impl PalmgateState {
    pub fn new(storage: IdentityStorage) -> Self {
        Self { storage }
    }
}

/// Build the axum router. CORS is wide open so a browser frontend can call
/// the API from any origin.
pub fn palmgate_router(state: PalmgateState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/signin", post(handlers::auth::signin))
        .route("/palm/status", get(handlers::palm::status))
        .route("/palm/register", post(handlers::palm::register))
        .route("/palm/verify", post(handlers::palm::verify))
        .layer(cors)
        .with_state(state)
}
