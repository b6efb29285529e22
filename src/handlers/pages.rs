//! HTML page handlers
//!
//! Each handler selects a template, fills in the request context and
//! forwards path parameters unchanged.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::error::PageError;
use crate::state::AppState;
use crate::templates::{
    IndexTemplate, LoginTemplate, ManualPathTemplate, NotFoundTemplate, PageContext,
    ProfileTemplate, RegisterTemplate, RouteDetailTemplate, SearchTemplate, TripDashboardTemplate,
    TripDetailTemplate, TripHistoryTemplate, TripRecordTemplate, TripSummaryTemplate,
};

type PageResult = Result<Html<String>, PageError>;

fn render(template: impl Template, uri: &Uri) -> PageResult {
    let html = template.render()?;
    tracing::debug!("Rendered page for {}", uri.path());
    Ok(Html(html))
}

/// GET / handler
pub async fn index(State(state): State<AppState>, uri: Uri) -> PageResult {
    render(IndexTemplate { ctx: PageContext::new(&state, &uri) }, &uri)
}

/// GET /login handler
pub async fn login(State(state): State<AppState>, uri: Uri) -> PageResult {
    render(LoginTemplate { ctx: PageContext::new(&state, &uri) }, &uri)
}

/// GET /register handler
pub async fn register(State(state): State<AppState>, uri: Uri) -> PageResult {
    render(RegisterTemplate { ctx: PageContext::new(&state, &uri) }, &uri)
}

/// GET /search handler
pub async fn search(State(state): State<AppState>, uri: Uri) -> PageResult {
    render(SearchTemplate { ctx: PageContext::new(&state, &uri) }, &uri)
}

/// GET /search/route/{route_id} handler
pub async fn route_detail(
    State(state): State<AppState>,
    uri: Uri,
    Path(route_id): Path<String>,
) -> PageResult {
    render(
        RouteDetailTemplate {
            ctx: PageContext::new(&state, &uri),
            route_id,
        },
        &uri,
    )
}

/// GET /trip/dashboard handler
pub async fn trip_dashboard(State(state): State<AppState>, uri: Uri) -> PageResult {
    render(TripDashboardTemplate { ctx: PageContext::new(&state, &uri) }, &uri)
}

/// GET /trip/record handler
pub async fn trip_record(State(state): State<AppState>, uri: Uri) -> PageResult {
    render(TripRecordTemplate { ctx: PageContext::new(&state, &uri) }, &uri)
}

/// GET /trip/summary/{trip_id} handler
pub async fn trip_summary(
    State(state): State<AppState>,
    uri: Uri,
    Path(trip_id): Path<String>,
) -> PageResult {
    render(
        TripSummaryTemplate {
            ctx: PageContext::new(&state, &uri),
            trip_id,
        },
        &uri,
    )
}

/// GET /trip/history handler
pub async fn trip_history(State(state): State<AppState>, uri: Uri) -> PageResult {
    render(TripHistoryTemplate { ctx: PageContext::new(&state, &uri) }, &uri)
}

/// GET /trip/detail/{trip_id} handler
pub async fn trip_detail(
    State(state): State<AppState>,
    uri: Uri,
    Path(trip_id): Path<String>,
) -> PageResult {
    render(
        TripDetailTemplate {
            ctx: PageContext::new(&state, &uri),
            trip_id,
        },
        &uri,
    )
}

/// GET /path/manual handler
pub async fn manual_path_entry(State(state): State<AppState>, uri: Uri) -> PageResult {
    render(ManualPathTemplate { ctx: PageContext::new(&state, &uri) }, &uri)
}

/// GET /profile handler
pub async fn profile(State(state): State<AppState>, uri: Uri) -> PageResult {
    render(ProfileTemplate { ctx: PageContext::new(&state, &uri) }, &uri)
}

/// Fallback for unmatched paths
pub async fn not_found_handler(State(state): State<AppState>, uri: Uri) -> Response {
    tracing::debug!("No route for {}", uri.path());
    match render(NotFoundTemplate { ctx: PageContext::new(&state, &uri) }, &uri) {
        Ok(html) => (StatusCode::NOT_FOUND, html).into_response(),
        Err(err) => err.into_response(),
    }
}
