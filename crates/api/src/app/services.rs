//! Store wiring shared by every handler.

use sweetshop_core::DomainResult;
use sweetshop_events::InMemoryEventBus;
use sweetshop_infra::{InventoryStore, SessionStore, seed::seed_catalog};
use sweetshop_inventory::SweetEvent;

use crate::config::ApiConfig;

pub type SweetBus = InMemoryEventBus<SweetEvent>;

/// Process-wide state: one inventory and one session per service instance.
#[derive(Debug)]
pub struct AppServices {
    pub inventory: InventoryStore<SweetBus>,
    pub session: SessionStore,
}

impl AppServices {
    /// Empty catalog, nobody logged in.
    pub fn new() -> Self {
        Self {
            inventory: InventoryStore::new(SweetBus::new()),
            session: SessionStore::new(),
        }
    }

    /// Catalog pre-filled with the starter sweets.
    pub fn seeded() -> DomainResult<Self> {
        Ok(Self {
            inventory: InventoryStore::with_sweets(SweetBus::new(), seed_catalog())?,
            session: SessionStore::new(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> DomainResult<Self> {
        if config.seed_catalog {
            Self::seeded()
        } else {
            Ok(Self::new())
        }
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::new()
    }
}

/// Log every committed inventory change on a background thread.
///
/// The thread exits when the bus is dropped.
pub fn spawn_activity_log(services: &AppServices) -> std::thread::JoinHandle<()> {
    let sub = services.inventory.subscribe();
    std::thread::spawn(move || {
        for event in sub {
            tracing::info!(
                event_type = sweetshop_events::Event::event_type(&event),
                sweet_id = %event.sweet_id(),
                "inventory changed"
            );
        }
    })
}
