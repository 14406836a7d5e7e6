//! `sweetshop-auth`: stub session identity and role-based gating.
//!
//! Credentials are checked only against format predicates; nothing here is a
//! security boundary. The crate is decoupled from HTTP and storage.

pub mod authorize;
pub mod identity;
pub mod permissions;
pub mod roles;

pub use authorize::{AuthzError, authorize, permissions_for};
pub use identity::{Identity, MIN_PASSWORD_LEN};
pub use permissions::Permission;
pub use roles::Role;
