//! Askama templates
//!
//! One struct per page. Every page extends `base.html`, which reads the
//! shared request context from the `ctx` field.

use askama::Template;
use axum::http::Uri;

use crate::models::SERVICE_NAME;
use crate::state::AppState;

/// Request-scoped values available to every template.
pub struct PageContext {
    pub api_gateway_url: String,
    pub current_path: String,
    pub service: &'static str,
}

impl PageContext {
    pub fn new(state: &AppState, uri: &Uri) -> Self {
        Self {
            api_gateway_url: state.config.api_gateway_url.clone(),
            current_path: uri.path().to_string(),
            service: SERVICE_NAME,
        }
    }

    /// Whether the navigation entry for `prefix` should be highlighted.
    pub fn is_active(&self, prefix: &str) -> bool {
        if prefix == "/" {
            return self.current_path == "/";
        }
        self.current_path == prefix
            || self
                .current_path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "search/search.html")]
pub struct SearchTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "search/route_detail.html")]
pub struct RouteDetailTemplate {
    pub ctx: PageContext,
    pub route_id: String,
}

#[derive(Template)]
#[template(path = "trip/dashboard.html")]
pub struct TripDashboardTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "trip/record.html")]
pub struct TripRecordTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "trip/summary.html")]
pub struct TripSummaryTemplate {
    pub ctx: PageContext,
    pub trip_id: String,
}

#[derive(Template)]
#[template(path = "trip/history.html")]
pub struct TripHistoryTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "trip/detail.html")]
pub struct TripDetailTemplate {
    pub ctx: PageContext,
    pub trip_id: String,
}

#[derive(Template)]
#[template(path = "path/manual_entry.html")]
pub struct ManualPathTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "profile/profile.html")]
pub struct ProfileTemplate {
    pub ctx: PageContext,
}

/// Rendered by the router fallback for unmatched paths.
#[derive(Template)]
#[template(path = "errors/not_found.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
}
