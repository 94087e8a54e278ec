use crate::shared::error::MonitorError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Error returned by every handler
///
/// The status is taken from the first `MonitorError` in the cause chain:
/// request errors are 400, a missing catalogue entity is 404, upstream
/// failures are 502. Anything else is a 500. The body is always
/// `{"error": "<message>"}` and never carries partial data.
#[derive(Debug)]
pub struct ApiError(anyhow::Error);

impl ApiError {
    fn monitor_error(&self) -> Option<&MonitorError> {
        self.0
            .chain()
            .find_map(|cause| cause.downcast_ref::<MonitorError>())
    }

    /// Catalogue and stream failures are already logged by the use case that hit them
    fn logged_upstream(&self) -> bool {
        self.monitor_error().is_some_and(|error| {
            error.is_upstream_error() || matches!(error, MonitorError::CatalogueNotFound { .. })
        })
    }

    pub fn status(&self) -> StatusCode {
        self.monitor_error()
            .map(|error| match error {
                MonitorError::Validation { .. } | MonitorError::InvalidScope { .. } => {
                    StatusCode::BAD_REQUEST
                }
                MonitorError::CatalogueNotFound { .. } => StatusCode::NOT_FOUND,
                MonitorError::CatalogueFetch { .. } | MonitorError::StreamRead { .. } => {
                    StatusCode::BAD_GATEWAY
                }
                MonitorError::ConfigError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            })
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<E: Into<anyhow::Error>> From<E> for ApiError {
    fn from(error: E) -> Self {
        Self(error.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = format!("{:#}", self.0);

        if self.logged_upstream() {
            tracing::debug!(status = status.as_u16(), "Upstream failure returned");
        } else if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %message, "Request rejected");
        }

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
