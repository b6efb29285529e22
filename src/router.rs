//! Router configuration

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers::{self, pages};
use crate::routes::{self, PAGES};
use crate::state::AppState;

/// Create the main router with all pages, health and static files.
pub fn create_router(state: AppState) -> Router {
    for page in PAGES {
        tracing::debug!(
            "Page route {} -> {}.html{}",
            page.path,
            page.template,
            page.param.map(|p| format!(" (param: {})", p)).unwrap_or_default()
        );
    }

    Router::new()
        .route(routes::INDEX, get(pages::index))
        .route(routes::LOGIN, get(pages::login))
        .route(routes::REGISTER, get(pages::register))
        .route(routes::SEARCH, get(pages::search))
        .route(routes::ROUTE_DETAIL, get(pages::route_detail))
        .route(routes::TRIP_DASHBOARD, get(pages::trip_dashboard))
        .route(routes::TRIP_RECORD, get(pages::trip_record))
        .route(routes::TRIP_SUMMARY, get(pages::trip_summary))
        .route(routes::TRIP_HISTORY, get(pages::trip_history))
        .route(routes::TRIP_DETAIL, get(pages::trip_detail))
        .route(routes::PATH_MANUAL, get(pages::manual_path_entry))
        .route(routes::PROFILE, get(pages::profile))
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::OPENAPI_JSON, get(handlers::openapi_handler))
        .nest_service(routes::STATIC, ServeDir::new(&state.config.static_dir))
        .fallback(handlers::not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
