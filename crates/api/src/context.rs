use sweetshop_auth::Identity;

/// Session context for a request.
///
/// Snapshot of the session identity taken when the request entered the
/// router. Handlers that change the session (login, logout) go through the
/// store directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    identity: Option<Identity>,
}

impl SessionContext {
    pub fn new(identity: Option<Identity>) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}
