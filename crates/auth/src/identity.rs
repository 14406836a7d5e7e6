//! Session identity derived from credentials.
//!
//! This is stub authentication: the password is only checked for length and
//! never stored or compared against anything. `is_admin` comes from a
//! substring match on the email. Do not use outside a demo.

use serde::{Deserialize, Serialize};

use sweetshop_core::{DomainError, DomainResult, Entity, IdentityId};

use crate::Role;

/// Minimum password length (in characters) accepted by login and register.
pub const MIN_PASSWORD_LEN: usize = 6;

/// The currently authenticated actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: IdentityId,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
}

impl Identity {
    /// Derive an identity from login credentials.
    ///
    /// Succeeds iff `email` is non-empty and `password` has at least
    /// [`MIN_PASSWORD_LEN`] characters. The name is the local part of the
    /// email; admin iff the email contains `"admin"`.
    pub fn from_login(email: &str, password: &str) -> DomainResult<Self> {
        if email.is_empty() || !long_enough(password) {
            return Err(DomainError::InvalidCredentials);
        }

        let local_part = email.split('@').next().unwrap_or_default();

        Ok(Self {
            id: IdentityId::for_email(email),
            email: email.to_string(),
            name: local_part.to_string(),
            is_admin: email.contains("admin"),
        })
    }

    /// Derive an identity from a registration form. Never an admin.
    pub fn from_registration(name: &str, email: &str, password: &str) -> DomainResult<Self> {
        if name.is_empty() {
            return Err(DomainError::invalid_input("name is required"));
        }
        if email.is_empty() {
            return Err(DomainError::invalid_input("email is required"));
        }
        if !long_enough(password) {
            return Err(DomainError::invalid_input(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        Ok(Self {
            id: IdentityId::for_email(email),
            email: email.to_string(),
            name: name.to_string(),
            is_admin: false,
        })
    }

    pub fn roles(&self) -> Vec<Role> {
        if self.is_admin {
            vec![Role::Customer, Role::Admin]
        } else {
            vec![Role::Customer]
        }
    }
}

impl Entity for Identity {
    type Id = IdentityId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn long_enough(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_derives_name_from_local_part() {
        let identity = Identity::from_login("a@b.com", "secret1").unwrap();
        assert_eq!(identity.name, "a");
        assert_eq!(identity.email, "a@b.com");
        assert!(!identity.is_admin);
        assert_eq!(identity.roles(), vec![Role::Customer]);
    }

    #[test]
    fn login_flags_admin_emails() {
        let identity = Identity::from_login("admin@x.com", "secret1").unwrap();
        assert!(identity.is_admin);
        assert!(identity.roles().contains(&Role::Admin));
    }

    #[test]
    fn login_rejects_short_password_or_empty_email() {
        assert_eq!(
            Identity::from_login("a@b.com", "abc").unwrap_err(),
            DomainError::InvalidCredentials
        );
        assert_eq!(
            Identity::from_login("", "secret1").unwrap_err(),
            DomainError::InvalidCredentials
        );
    }

    #[test]
    fn login_without_at_uses_whole_email_as_name() {
        let identity = Identity::from_login("shopper", "secret1").unwrap();
        assert_eq!(identity.name, "shopper");
    }

    #[test]
    fn same_email_same_identity() {
        let first = Identity::from_login("a@b.com", "secret1").unwrap();
        let again = Identity::from_login("a@b.com", "another-password").unwrap();
        assert!(first.same_entity(&again));
    }

    #[test]
    fn register_is_never_admin() {
        let identity = Identity::from_registration("Ada", "admin@x.com", "secret1").unwrap();
        assert_eq!(identity.name, "Ada");
        assert!(!identity.is_admin);
    }

    #[test]
    fn register_validates_every_field() {
        for (name, email, password) in [
            ("", "a@b.com", "secret1"),
            ("Ada", "", "secret1"),
            ("Ada", "a@b.com", "12345"),
        ] {
            let err = Identity::from_registration(name, email, password).unwrap_err();
            assert!(matches!(err, DomainError::InvalidInput(_)));
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: login outcome depends only on the two format predicates.
            #[test]
            fn login_predicate(email in "[a-z@.]{0,12}", password in ".{0,10}") {
                let ok = !email.is_empty() && password.chars().count() >= MIN_PASSWORD_LEN;
                let result = Identity::from_login(&email, &password);
                prop_assert_eq!(result.is_ok(), ok);
                if let Ok(identity) = result {
                    prop_assert_eq!(identity.is_admin, email.contains("admin"));
                    prop_assert!(email.starts_with(&identity.name));
                }
            }
        }
    }
}
