use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::dto::{LoginRequest, RegisterRequest, SessionResponse};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(current))
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/logout", post(logout))
}

pub async fn current(Extension(services): Extension<Arc<AppServices>>) -> Json<SessionResponse> {
    let identity = services.session.current();
    Json(SessionResponse {
        authenticated: identity.is_some(),
        identity,
    })
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let identity = services.session.login(&body.email, &body.password)?;
    tracing::info!(identity_id = %identity.id, admin = identity.is_admin, "logged in");
    Ok(Json(identity))
}

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let identity = services
        .session
        .register(&body.name, &body.email, &body.password)?;
    tracing::info!(identity_id = %identity.id, "registered");
    Ok((StatusCode::CREATED, Json(identity)))
}

pub async fn logout(Extension(services): Extension<Arc<AppServices>>) -> StatusCode {
    services.session.logout();
    StatusCode::NO_CONTENT
}
