// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, header},
    middleware,
    routing::{get, post},
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::{
    handlers::{qr, quiz},
    state::AppState,
    utils::window::window_middleware,
};

/// Assembles the main application router.
///
/// * Login, quiz, submission and QR page are only served inside the access window.
/// * Confirmation page and QR download are always available.
/// * Every response is marked non-cacheable.
pub fn create_router(state: AppState) -> Router {
    let gated_routes = Router::new()
        .route("/", get(quiz::login))
        .route("/start_quiz", post(quiz::start_quiz))
        .route("/submit", post(quiz::submit))
        .route("/qr", get(qr::qr_page))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            window_middleware,
        ));

    let open_routes = Router::new()
        .route("/response_saved", get(quiz::response_saved))
        .route("/download_qr", get(qr::download_qr));

    Router::new()
        .merge(gated_routes)
        .merge(open_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            HeaderValue::from_static("0"),
        ))
        .with_state(state)
}
