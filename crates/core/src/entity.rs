//! Entity trait: identity + continuity across state changes.

/// Something that keeps its identity while its attributes change.
///
/// A sweet stays the same sweet after a restock; a session identity stays the
/// same actor across logins with the same email.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Two entities are the same thing iff their ids match, whatever their attributes.
    fn same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
