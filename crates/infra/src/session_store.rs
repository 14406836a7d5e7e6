//! The single current session identity.

use std::sync::{PoisonError, RwLock};

use sweetshop_auth::Identity;
use sweetshop_core::{DomainResult, Entity};

/// Holds at most one identity.
///
/// absent → present on successful login/register, present → absent on logout.
/// Failed calls leave the current identity as it was; a successful login while
/// logged in replaces it.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: RwLock<Option<Identity>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&self, email: &str, password: &str) -> DomainResult<Identity> {
        let identity = Identity::from_login(email, password)?;
        self.replace(identity.clone());
        Ok(identity)
    }

    pub fn register(&self, name: &str, email: &str, password: &str) -> DomainResult<Identity> {
        let identity = Identity::from_registration(name, email, password)?;
        self.replace(identity.clone());
        Ok(identity)
    }

    pub fn logout(&self) {
        let previous = self.current.write().unwrap_or_else(PoisonError::into_inner).take();
        if let Some(identity) = previous {
            tracing::debug!(identity_id = %identity.id, "session cleared");
        }
    }

    pub fn current(&self) -> Option<Identity> {
        self.current.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().unwrap_or_else(PoisonError::into_inner).is_some()
    }

    fn replace(&self, identity: Identity) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let switched = current.as_ref().is_some_and(|prev| !prev.same_entity(&identity));
        tracing::debug!(
            identity_id = %identity.id,
            is_admin = identity.is_admin,
            switched,
            "session established"
        );
        *current = Some(identity);
    }
}
