use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::debug;

/// Failure body shared by every route: `{"status_code": .., "detail": ..}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self { status, detail: detail.into() }
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "status_code": self.status.as_u16(),
            "detail": self.detail,
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let status = match e {
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        Self::new(status, e.message())
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self {
        debug!(rejection = %r, "json body rejected");
        Self::unprocessable(r.body_text())
    }
}

impl From<QueryRejection> for JsonApiError {
    fn from(r: QueryRejection) -> Self {
        debug!(rejection = %r, "query string rejected");
        Self::unprocessable(r.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_and_fixed_detail() {
        let e: JsonApiError = ServiceError::NotFound("Data not found!".into()).into();
        assert_eq!(e, JsonApiError::new(StatusCode::NOT_FOUND, "Data not found!"));

        let e: JsonApiError = ServiceError::Validation("Provide all function headers.".into()).into();
        assert_eq!(e.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(e.detail, "Provide all function headers.");
    }

    #[test]
    fn response_carries_status() {
        let resp = JsonApiError::new(StatusCode::NOT_FOUND, "x").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
