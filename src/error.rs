use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Error type for page handlers
///
/// Page handlers only fail when a compiled template cannot be rendered;
/// unmatched paths are answered by the router fallback instead.
#[derive(Debug)]
pub enum PageError {
    /// Template rendering failed
    Render(askama::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            PageError::Render(err) => {
                tracing::error!("Template rendering failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The page could not be rendered.",
                )
            }
        };

        let body = Html(format!(
            "<!DOCTYPE html><html><head><title>{code}</title></head>\
             <body><h1>{code}</h1><p>{message}</p></body></html>",
            code = status,
            message = message,
        ));

        (status, body).into_response()
    }
}

impl From<askama::Error> for PageError {
    fn from(err: askama::Error) -> Self {
        PageError::Render(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_render_error_is_internal_server_error() {
        let response = PageError::Render(askama::Error::from(std::fmt::Error)).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("500 Internal Server Error"));
    }
}
