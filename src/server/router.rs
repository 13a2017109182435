//! Router builder for directory routes

use crate::server::handlers::{
    AppState, get_installer, health, list_card_images, list_hero_images, list_installers,
    request_quote,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Build the directory routes
///
/// - GET /installers - Filtered, sorted listing
/// - GET /installers/{id} - One installer with resolved images
/// - POST /installers/{id}/quotes - Submit a quote request
/// - GET /images/cards - Card image pool
/// - GET /images/hero - Hero image pool
/// - GET /health - Liveness probe
pub fn build_directory_routes(state: AppState) -> Router {
    Router::new()
        .route("/installers", get(list_installers))
        .route("/installers/{id}", get(get_installer))
        .route("/installers/{id}/quotes", post(request_quote))
        .route("/images/cards", get(list_card_images))
        .route("/images/hero", get(list_hero_images))
        .route("/health", get(health))
        .with_state(state)
}
