use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use sweetshop_auth::Permission;
use sweetshop_inventory::{featured, NewSweet, SweetId, SweetPatch};

use crate::app::dto::{self, CatalogQuery, RestockRequest, SweetResponse};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::authz::authorize_request;
use crate::context::SessionContext;

/// Items shown on the home page.
pub const FEATURED_COUNT: usize = 4;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/featured", get(featured_items))
        .route("/:id", get(get_item).patch(update_item).delete(delete_item))
        .route("/:id/purchase", post(purchase_item))
        .route("/:id/restock", post(restock_item))
}

fn parse_id(raw: &str) -> Result<SweetId, ApiError> {
    Ok(raw.parse::<SweetId>()?)
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<CatalogQuery>, QueryRejection>,
) -> Result<Json<Vec<SweetResponse>>, ApiError> {
    let Query(query) = query?;
    let filter = query.into_filter()?;

    let hits = filter.apply(&services.inventory.snapshot());
    Ok(Json(dto::sweets_to_json(&hits)))
}

pub async fn featured_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> Json<Vec<SweetResponse>> {
    let picks = featured(&services.inventory.snapshot(), FEATURED_COUNT);
    Json(dto::sweets_to_json(&picks))
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<SweetResponse>, ApiError> {
    let sweet = services.inventory.get(parse_id(&id)?)?;
    Ok(Json(SweetResponse::from(&sweet)))
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    body: Result<Json<NewSweet>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let admin = authorize_request(&session, Permission::ManageItems)?;
    let Json(body) = body?;

    let sweet = services.inventory.add(body)?;
    tracing::info!(sweet_id = %sweet.sweet_id(), by = %admin.id, "sweet added");

    Ok((StatusCode::CREATED, Json(SweetResponse::from(&sweet))))
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
    body: Result<Json<SweetPatch>, JsonRejection>,
) -> Result<Json<SweetResponse>, ApiError> {
    authorize_request(&session, Permission::ManageItems)?;
    let id = parse_id(&id)?;
    let Json(patch) = body?;

    let sweet = services.inventory.update(id, patch)?;
    Ok(Json(SweetResponse::from(&sweet)))
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
) -> Result<Json<SweetResponse>, ApiError> {
    let admin = authorize_request(&session, Permission::ManageItems)?;
    let id = parse_id(&id)?;

    let removed = services.inventory.delete(id)?;
    tracing::info!(sweet_id = %id, by = %admin.id, "sweet deleted");

    Ok(Json(SweetResponse::from(&removed)))
}

pub async fn purchase_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
) -> Result<Json<SweetResponse>, ApiError> {
    let buyer = authorize_request(&session, Permission::Purchase)?;
    let id = parse_id(&id)?;

    let sweet = services.inventory.purchase(id)?;
    tracing::info!(sweet_id = %id, by = %buyer.id, remaining = sweet.quantity(), "sweet purchased");

    Ok(Json(SweetResponse::from(&sweet)))
}

pub async fn restock_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
    body: Result<Json<RestockRequest>, JsonRejection>,
) -> Result<Json<SweetResponse>, ApiError> {
    authorize_request(&session, Permission::ManageItems)?;
    let id = parse_id(&id)?;
    let Json(body) = body?;

    let sweet = services.inventory.restock(id, body.amount)?;
    Ok(Json(SweetResponse::from(&sweet)))
}
