//! Route definitions for the Warehouse Inventory Management Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Entry and exit tickets
        .nest("/tickets", ticket_routes())
        // Stock status reporting
        .nest("/stock", stock_routes())
}

/// Ticket creation and read-back routes
fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route("/entry", post(handlers::create_entry_ticket))
        .route("/entry/:ticket_id", get(handlers::get_entry_ticket))
        .route("/exit", post(handlers::create_exit_ticket))
        .route("/exit/:ticket_id", get(handlers::get_exit_ticket))
}

/// Stock status routes
fn stock_routes() -> Router<AppState> {
    Router::new().route("/critical", get(handlers::list_critical_stock))
}
