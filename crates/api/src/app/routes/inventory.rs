use std::sync::Arc;

use axum::{extract::Extension, routing::get, Json, Router};

use sweetshop_auth::Permission;
use sweetshop_inventory::InventorySummary;

use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::authz::authorize_request;
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new().route("/summary", get(summary))
}

/// Admin dashboard counters.
pub async fn summary(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> Result<Json<InventorySummary>, ApiError> {
    authorize_request(&session, Permission::ReadSummary)?;
    Ok(Json(InventorySummary::from_sweets(&services.inventory.snapshot())))
}
