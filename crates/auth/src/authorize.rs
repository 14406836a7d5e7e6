use thiserror::Error;

use crate::{Identity, Permission, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("login required")]
    Unauthenticated,

    #[error("forbidden: missing permission '{0}'")]
    Forbidden(Permission),
}

/// Role to permission policy.
///
/// `admin` grants everything; `customer` may purchase.
pub fn permissions_for(roles: &[Role]) -> Vec<Permission> {
    if roles.contains(&Role::Admin) {
        return vec![Permission::All];
    }

    let mut perms = Vec::new();
    if roles.contains(&Role::Customer) {
        perms.push(Permission::Purchase);
    }
    perms
}

/// Gate an operation on the current session identity.
///
/// Returns the identity on success so callers can log who acted.
pub fn authorize(
    identity: Option<&Identity>,
    required: Permission,
) -> Result<&Identity, AuthzError> {
    let identity = identity.ok_or(AuthzError::Unauthenticated)?;

    if permissions_for(&identity.roles())
        .into_iter()
        .any(|held| held.covers(required))
    {
        Ok(identity)
    } else {
        Err(AuthzError::Forbidden(required))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Identity {
        Identity::from_login("a@b.com", "secret1").unwrap()
    }

    fn admin() -> Identity {
        Identity::from_login("admin@x.com", "secret1").unwrap()
    }

    #[test]
    fn anonymous_is_unauthenticated() {
        assert_eq!(
            authorize(None, Permission::Purchase).unwrap_err(),
            AuthzError::Unauthenticated
        );
    }

    #[test]
    fn customers_may_purchase_but_not_manage() {
        let who = customer();
        assert!(authorize(Some(&who), Permission::Purchase).is_ok());
        assert_eq!(
            authorize(Some(&who), Permission::ManageItems).unwrap_err(),
            AuthzError::Forbidden(Permission::ManageItems)
        );
    }

    #[test]
    fn admins_may_do_everything() {
        let who = admin();
        for perm in [Permission::Purchase, Permission::ManageItems, Permission::ReadSummary] {
            assert_eq!(authorize(Some(&who), perm).unwrap().email, "admin@x.com");
        }
        assert!(permissions_for(&who.roles()).iter().all(|p| *p == Permission::All));
    }
}
