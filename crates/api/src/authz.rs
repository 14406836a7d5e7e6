//! API-side authorization guard.
//!
//! Gates operations at the route boundary, before the store is touched, so
//! the stores themselves stay auth-agnostic.

use sweetshop_auth::{AuthzError, Identity, Permission, authorize};

use crate::context::SessionContext;

/// Check that the request's session may perform `required`.
///
/// Returns the acting identity for logging.
pub fn authorize_request(
    session: &SessionContext,
    required: Permission,
) -> Result<&Identity, AuthzError> {
    authorize(session.identity(), required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_requests_are_unauthenticated() {
        let session = SessionContext::default();
        assert_eq!(
            authorize_request(&session, Permission::Purchase),
            Err(AuthzError::Unauthenticated)
        );
    }

    #[test]
    fn customers_purchase_but_do_not_manage() {
        let session = SessionContext::new(Some(Identity::from_login("sam@shop.test", "secret").unwrap()));

        assert!(authorize_request(&session, Permission::Purchase).is_ok());
        assert!(matches!(
            authorize_request(&session, Permission::ManageItems),
            Err(AuthzError::Forbidden(_))
        ));
    }

    #[test]
    fn admins_pass_every_gate() {
        let session = SessionContext::new(Some(Identity::from_login("admin@shop.test", "secret").unwrap()));

        for perm in [Permission::Purchase, Permission::ManageItems, Permission::ReadSummary] {
            let who = authorize_request(&session, perm).unwrap();
            assert!(who.is_admin);
        }
    }
}
