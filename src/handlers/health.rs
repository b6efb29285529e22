use crate::api_doc::ApiDoc;
use crate::models::HealthResponse;
use crate::routes;
use axum::{http::StatusCode, Json};
use utoipa::OpenApi;

/// GET /health handler - Health check endpoint
///
/// The frontend has no backing resources of its own, so it is healthy
/// whenever it can answer requests.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (StatusCode::OK, Json(HealthResponse::healthy()))
}

/// GET /api-docs/openapi.json handler
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route(routes::HEALTH, get(health_handler))
            .route(routes::OPENAPI_JSON, get(openapi_handler))
    }

    #[tokio::test]
    async fn test_health_endpoint_healthy() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"status":"healthy","service":"frontend"}"#);

        let response_json: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.status, "healthy");
        assert_eq!(response_json.service, "frontend");
    }

    #[tokio::test]
    async fn test_openapi_documents_health() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(doc["paths"]["/health"]["get"].is_object());
        assert!(doc["components"]["schemas"]["HealthResponse"].is_object());
    }
}
