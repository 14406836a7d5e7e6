use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sweetshop_auth::Identity;
use sweetshop_core::DomainResult;
use sweetshop_inventory::{CatalogFilter, Category, Sweet};

#[derive(Debug, Serialize)]
pub struct SweetResponse {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub category_label: &'static str,
    pub category_color: &'static str,
    pub price: Decimal,
    pub quantity: u32,
    pub in_stock: bool,
    pub description: String,
    pub image: String,
}

impl From<&Sweet> for SweetResponse {
    fn from(sweet: &Sweet) -> Self {
        Self {
            id: sweet.sweet_id().to_string(),
            name: sweet.name().to_string(),
            category: sweet.category(),
            category_label: sweet.category().label(),
            category_color: sweet.category().color(),
            price: sweet.price().amount(),
            quantity: sweet.quantity(),
            in_stock: !sweet.is_out_of_stock(),
            description: sweet.description().to_string(),
            image: sweet.image().to_string(),
        }
    }
}

pub fn sweets_to_json(sweets: &[Sweet]) -> Vec<SweetResponse> {
    sweets.iter().map(SweetResponse::from).collect()
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub name: Category,
    pub label: &'static str,
    pub color: &'static str,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            name: category,
            label: category.label(),
            color: category.color(),
        }
    }
}

/// `GET /items` query string. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub min_price: Option<Decimal>,
    #[serde(default)]
    pub max_price: Option<Decimal>,
}

impl CatalogQuery {
    pub fn into_filter(self) -> DomainResult<CatalogFilter> {
        let category = match self.category.as_deref().map(str::trim) {
            None | Some("") | Some("all") => None,
            Some(name) => Some(name.parse::<Category>()?),
        };

        CatalogFilter::new()
            .with_query(self.q.unwrap_or_default())
            .with_category(category)
            .with_price_range(self.min_price, self.max_price)
    }
}

#[derive(Debug, Deserialize)]
pub struct RestockRequest {
    pub amount: i64,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    pub identity: Option<Identity>,
}
