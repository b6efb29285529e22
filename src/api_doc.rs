use utoipa::OpenApi;

use crate::handlers;
use crate::models::HealthResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "bbp-frontend",
        version = "1.0.0",
        description = "Server-rendered pages for the BBP platform"
    ),
    paths(
        handlers::health::health_handler
    ),
    components(
        schemas(
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations")
    )
)]
pub struct ApiDoc;
