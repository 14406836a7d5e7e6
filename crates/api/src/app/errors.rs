use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use sweetshop_auth::AuthzError;
use sweetshop_core::DomainError;

/// Everything a handler can fail with. Rendered as `{"error", "message"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Authz(#[from] AuthzError),

    #[error("malformed request body: {0}")]
    Body(#[from] JsonRejection),

    #[error("malformed query string: {0}")]
    Query(#[from] QueryRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Domain(err) => domain_status(err),
            Self::Authz(AuthzError::Unauthenticated) => StatusCode::UNAUTHORIZED,
            Self::Authz(AuthzError::Forbidden(_)) => StatusCode::FORBIDDEN,
            Self::Body(_) | Self::Query(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Domain(err) => err.code(),
            Self::Authz(AuthzError::Unauthenticated) => "unauthenticated",
            Self::Authz(AuthzError::Forbidden(_)) => "forbidden",
            Self::Body(_) | Self::Query(_) => "invalid_input",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        json_error(status, self.code(), self.to_string())
    }
}

fn domain_status(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NotFound => StatusCode::NOT_FOUND,
        DomainError::InsufficientStock => StatusCode::CONFLICT,
        DomainError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        DomainError::InvalidInput(_) | DomainError::InvalidId(_) => StatusCode::BAD_REQUEST,
        DomainError::InvariantViolation(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use sweetshop_auth::Permission;

    use super::*;

    #[test]
    fn domain_errors_map_to_statuses() {
        let cases = [
            (DomainError::NotFound, StatusCode::NOT_FOUND, "not_found"),
            (DomainError::InsufficientStock, StatusCode::CONFLICT, "insufficient_stock"),
            (DomainError::InvalidCredentials, StatusCode::UNAUTHORIZED, "invalid_credentials"),
            (DomainError::invalid_input("x"), StatusCode::BAD_REQUEST, "invalid_input"),
            (DomainError::invalid_id("x"), StatusCode::BAD_REQUEST, "invalid_id"),
            (DomainError::invariant("x"), StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation"),
        ];

        for (err, status, code) in cases {
            let api = ApiError::from(err);
            assert_eq!(api.status(), status);
            assert_eq!(api.code(), code);
        }
    }

    #[test]
    fn authz_errors_map_to_401_and_403() {
        let anon = ApiError::from(AuthzError::Unauthenticated);
        assert_eq!(anon.status(), StatusCode::UNAUTHORIZED);

        let denied = ApiError::from(AuthzError::Forbidden(Permission::ManageItems));
        assert_eq!(denied.status(), StatusCode::FORBIDDEN);
        assert_eq!(denied.code(), "forbidden");
    }
}
