//! Change events and in-process fan-out.
//!
//! Stores publish what they committed; presentation layers subscribe to learn
//! about changes without polling the snapshot.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
