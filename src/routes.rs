// Route path constants - single source of truth for all page and API paths

pub const INDEX: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const SEARCH: &str = "/search";
pub const ROUTE_DETAIL: &str = "/search/route/{route_id}";
pub const TRIP_DASHBOARD: &str = "/trip/dashboard";
pub const TRIP_RECORD: &str = "/trip/record";
pub const TRIP_SUMMARY: &str = "/trip/summary/{trip_id}";
pub const TRIP_HISTORY: &str = "/trip/history";
pub const TRIP_DETAIL: &str = "/trip/detail/{trip_id}";
pub const PATH_MANUAL: &str = "/path/manual";
pub const PROFILE: &str = "/profile";

pub const HEALTH: &str = "/health";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const STATIC: &str = "/static";

/// One entry of the page route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRoute {
    pub path: &'static str,
    /// Template identifier, relative to `templates/` without the extension
    pub template: &'static str,
    /// Name of the path parameter forwarded into the template, if any
    pub param: Option<&'static str>,
}

impl PageRoute {
    const fn new(path: &'static str, template: &'static str) -> Self {
        Self { path, template, param: None }
    }

    const fn with_param(path: &'static str, template: &'static str, param: &'static str) -> Self {
        Self { path, template, param: Some(param) }
    }
}

/// Every HTML page the frontend serves.
pub const PAGES: &[PageRoute] = &[
    PageRoute::new(INDEX, "index"),
    PageRoute::new(LOGIN, "auth/login"),
    PageRoute::new(REGISTER, "auth/register"),
    PageRoute::new(SEARCH, "search/search"),
    PageRoute::with_param(ROUTE_DETAIL, "search/route_detail", "route_id"),
    PageRoute::new(TRIP_DASHBOARD, "trip/dashboard"),
    PageRoute::new(TRIP_RECORD, "trip/record"),
    PageRoute::with_param(TRIP_SUMMARY, "trip/summary", "trip_id"),
    PageRoute::new(TRIP_HISTORY, "trip/history"),
    PageRoute::with_param(TRIP_DETAIL, "trip/detail", "trip_id"),
    PageRoute::new(PATH_MANUAL, "path/manual_entry"),
    PageRoute::new(PROFILE, "profile/profile"),
];
