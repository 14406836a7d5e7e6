//! Read-side queries over a catalog snapshot: search filter, featured list,
//! dashboard summary.

use rust_decimal::Decimal;
use serde::Serialize;

use sweetshop_core::{DomainError, DomainResult};

use crate::{Category, Sweet};

/// Shop search filter.
///
/// All predicates must hold for a sweet to match. Order of the input snapshot
/// is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    query: String,
    category: Option<Category>,
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring over name and description.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into().to_lowercase();
        self
    }

    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    /// Inclusive price bounds; `None` leaves that side open.
    pub fn with_price_range(
        mut self,
        min: Option<Decimal>,
        max: Option<Decimal>,
    ) -> DomainResult<Self> {
        if min.is_some_and(|m| m < Decimal::ZERO) || max.is_some_and(|m| m < Decimal::ZERO) {
            return Err(DomainError::invalid_input("price bounds cannot be negative"));
        }
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(DomainError::invalid_input(
                    "min_price cannot be greater than max_price",
                ));
            }
        }
        self.min_price = min;
        self.max_price = max;
        Ok(self)
    }

    pub fn matches(&self, sweet: &Sweet) -> bool {
        let matches_query = self.query.is_empty()
            || sweet.name().to_lowercase().contains(&self.query)
            || sweet.description().to_lowercase().contains(&self.query);
        let matches_category = self.category.is_none_or(|c| c == sweet.category());
        let price = sweet.price().amount();
        let matches_price = self.min_price.is_none_or(|lo| price >= lo)
            && self.max_price.is_none_or(|hi| price <= hi);

        matches_query && matches_category && matches_price
    }

    pub fn apply(&self, sweets: &[Sweet]) -> Vec<Sweet> {
        sweets.iter().filter(|s| self.matches(s)).cloned().collect()
    }
}

/// First `n` sweets in display order (home page "favorites").
pub fn featured(sweets: &[Sweet], n: usize) -> Vec<Sweet> {
    sweets.iter().take(n).cloned().collect()
}

/// Admin dashboard counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub total_items: usize,
    pub total_stock: u64,
    pub out_of_stock: usize,
}

impl InventorySummary {
    pub fn from_sweets(sweets: &[Sweet]) -> Self {
        sweets.iter().fold(Self::default(), |mut acc, s| {
            acc.total_items += 1;
            acc.total_stock += u64::from(s.quantity());
            if s.is_out_of_stock() {
                acc.out_of_stock += 1;
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sweetshop_core::Aggregate;

    use super::*;
    use crate::{AddSweet, NewSweet, SweetCommand, SweetId};

    fn sweet(name: &str, description: &str, category: Category, cents: i64, quantity: i64) -> Sweet {
        let id = SweetId::generate();
        let mut s = Sweet::empty(id);
        s.execute(&SweetCommand::Add(AddSweet {
            sweet_id: id,
            sweet: NewSweet {
                name: name.to_string(),
                category,
                price: Decimal::new(cents, 2),
                quantity,
                description: Some(description.to_string()),
                image: None,
            },
            occurred_at: Utc::now(),
        }))
        .unwrap();
        s
    }

    fn shelf() -> Vec<Sweet> {
        vec![
            sweet("Dark Truffle", "Rich cocoa", Category::Chocolate, 399, 10),
            sweet("Sour Worms", "Tangy gummy worms", Category::Gummy, 249, 0),
            sweet("Rainbow Pop", "Swirled lollipop", Category::Lollipop, 199, 4),
            sweet("Mint Crisp", "Chocolate coated mint", Category::Mint, 12_500, 2),
        ]
    }

    fn names(sweets: &[Sweet]) -> Vec<&str> {
        sweets.iter().map(|s| s.name()).collect()
    }

    #[test]
    fn empty_filter_matches_everything_in_order() {
        let all = shelf();
        assert_eq!(names(&CatalogFilter::new().apply(&all)), names(&all));
    }

    #[test]
    fn query_searches_name_and_description_case_insensitively() {
        let all = shelf();
        let hits = CatalogFilter::new().with_query("CHOCOLATE").apply(&all);
        assert_eq!(names(&hits), vec!["Mint Crisp"]);

        let hits = CatalogFilter::new().with_query("truffle").apply(&all);
        assert_eq!(names(&hits), vec!["Dark Truffle"]);
    }

    #[test]
    fn category_and_price_combine() {
        let all = shelf();
        let hits = CatalogFilter::new()
            .with_price_range(Some(Decimal::ZERO), Some(Decimal::ONE_HUNDRED))
            .unwrap()
            .apply(&all);
        assert_eq!(names(&hits), vec!["Dark Truffle", "Sour Worms", "Rainbow Pop"]);

        let hits = CatalogFilter::new()
            .with_category(Some(Category::Gummy))
            .with_price_range(None, Some(Decimal::new(249, 2)))
            .unwrap()
            .apply(&all);
        assert_eq!(names(&hits), vec!["Sour Worms"]);
    }

    #[test]
    fn inverted_or_negative_range_is_invalid() {
        let inverted = CatalogFilter::new().with_price_range(Some(Decimal::TEN), Some(Decimal::ONE));
        assert!(matches!(inverted, Err(DomainError::InvalidInput(_))));

        let negative = CatalogFilter::new().with_price_range(Some(Decimal::NEGATIVE_ONE), None);
        assert!(matches!(negative, Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn featured_takes_first_n() {
        let all = shelf();
        assert_eq!(names(&featured(&all, 2)), vec!["Dark Truffle", "Sour Worms"]);
        assert_eq!(featured(&all, 10).len(), 4);
    }

    #[test]
    fn summary_counts_stock() {
        let summary = InventorySummary::from_sweets(&shelf());
        assert_eq!(
            summary,
            InventorySummary {
                total_items: 4,
                total_stock: 16,
                out_of_stock: 1,
            }
        );
    }
}
