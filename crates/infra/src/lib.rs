//! Infrastructure layer: the in-memory stores that own shop state.

pub mod inventory_store;
pub mod seed;
pub mod session_store;

pub use inventory_store::InventoryStore;
pub use session_store::SessionStore;
