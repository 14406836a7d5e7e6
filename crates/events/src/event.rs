use chrono::{DateTime, Utc};

/// A domain-agnostic event.
///
/// Events are immutable facts about a committed change.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "inventory.sweet.purchased").
    fn event_type(&self) -> &'static str;

    /// When the change happened.
    fn occurred_at(&self) -> DateTime<Utc>;
}
