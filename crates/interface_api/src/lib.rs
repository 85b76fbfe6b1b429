//! HTTP API Layer
//!
//! This crate provides the REST API for the expense-splitting service using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: request handlers per resource
//! - **Auth**: basic-auth extractor with constant-time credential checks
//! - **DTOs**: request/response data transfer objects with input validation
//! - **Error handling**: consistent error responses mapped from the domain
//!   taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(service, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use domain_split::SplitService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{bills, groups, health, transactions, users};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: SplitService,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - The application service with its stores already injected
/// * `config` - API configuration
pub fn create_router(service: SplitService, config: ApiConfig) -> Router {
    let state = AppState { service, config };

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let user_routes = Router::new()
        .route("/", post(users::create_user).get(users::list_users))
        .route("/me", get(users::me))
        .route("/:id", get(users::get_user));

    let group_routes = Router::new()
        .route("/", post(groups::create_group))
        .route("/:id", get(groups::get_group))
        .route("/:id/members", post(groups::add_member));

    let bill_routes = Router::new()
        .route("/", post(bills::create_bill))
        .route("/:id", get(bills::get_bill))
        .route("/:id/owed", get(bills::amount_owed));

    let transaction_routes = Router::new().route("/", post(transactions::create_transaction));

    Router::new()
        .merge(public_routes)
        .nest("/users", user_routes)
        .nest("/groups", group_routes)
        .nest("/bills", bill_routes)
        .nest("/transactions", transaction_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
