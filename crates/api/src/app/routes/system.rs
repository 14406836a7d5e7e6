use axum::{http::StatusCode, Json};

use sweetshop_inventory::Category;

use crate::app::dto::CategoryResponse;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Category table in display order, for filter dropdowns and badges.
pub async fn categories() -> Json<Vec<CategoryResponse>> {
    Json(Category::ALL.into_iter().map(CategoryResponse::from).collect())
}
