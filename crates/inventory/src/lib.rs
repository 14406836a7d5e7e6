//! Inventory domain module.
//!
//! Business rules for the sweet catalog, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod category;
pub mod price;
pub mod sweet;

pub use catalog::{CatalogFilter, InventorySummary, featured};
pub use category::Category;
pub use price::Price;
pub use sweet::{
    AddSweet, DEFAULT_DESCRIPTION, DEFAULT_IMAGE, DeleteSweet, NewSweet, PurchaseSweet,
    RestockSweet, Sweet, SweetAdded, SweetChanges, SweetCommand, SweetDeleted, SweetEvent,
    SweetId, SweetPatch, SweetPurchased, SweetRestocked, SweetUpdated, UpdateSweet,
};
