//! The sweet collection and its transactions.
//!
//! Every mutation runs `handle` + `apply` on the target sweet while holding
//! the collection's write lock, then publishes the produced events before the
//! lock is released. Observers therefore never see a checked-but-not-yet-
//! decremented purchase, and bus order matches commit order.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use sweetshop_core::{Aggregate, DomainError, DomainResult};
use sweetshop_events::{Event, EventBus, Subscription};
use sweetshop_inventory::{
    AddSweet, DeleteSweet, NewSweet, PurchaseSweet, RestockSweet, Sweet, SweetCommand, SweetEvent,
    SweetId, SweetPatch, UpdateSweet,
};

/// Ordered, lock-protected collection of sweets.
///
/// Insertion order is display order; update/purchase/restock keep a sweet in
/// its slot, delete removes the slot, add appends.
#[derive(Debug)]
pub struct InventoryStore<B> {
    sweets: RwLock<Vec<Sweet>>,
    bus: B,
}

impl<B> InventoryStore<B>
where
    B: EventBus<SweetEvent>,
{
    pub fn new(bus: B) -> Self {
        Self {
            sweets: RwLock::new(Vec::new()),
            bus,
        }
    }

    /// Store pre-populated with `sweets`, in order.
    pub fn with_sweets(bus: B, sweets: impl IntoIterator<Item = NewSweet>) -> DomainResult<Self> {
        let store = Self::new(bus);
        for fields in sweets {
            store.add(fields)?;
        }
        Ok(store)
    }

    /// Copy of the current collection, in display order.
    pub fn snapshot(&self) -> Vec<Sweet> {
        self.read().clone()
    }

    pub fn get(&self, id: SweetId) -> DomainResult<Sweet> {
        self.read()
            .iter()
            .find(|s| s.sweet_id() == id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Subscribe to committed change events.
    pub fn subscribe(&self) -> Subscription<SweetEvent> {
        self.bus.subscribe()
    }

    /// Append a new sweet under a freshly assigned id.
    pub fn add(&self, fields: NewSweet) -> DomainResult<Sweet> {
        let mut sweets = self.write();

        let mut sweet_id = SweetId::generate();
        while sweets.iter().any(|s| s.sweet_id() == sweet_id) {
            sweet_id = SweetId::generate();
        }

        let mut sweet = Sweet::empty(sweet_id);
        let events = sweet.execute(&SweetCommand::Add(AddSweet {
            sweet_id,
            sweet: fields,
            occurred_at: Utc::now(),
        }))?;

        sweets.push(sweet.clone());
        self.publish(&events);

        Ok(sweet)
    }

    /// Merge `patch` onto the sweet; unspecified fields stay as they are.
    pub fn update(&self, id: SweetId, patch: SweetPatch) -> DomainResult<Sweet> {
        self.mutate(SweetCommand::Update(UpdateSweet {
            sweet_id: id,
            patch,
            occurred_at: Utc::now(),
        }))
    }

    /// Remove the sweet; returns the removed snapshot.
    pub fn delete(&self, id: SweetId) -> DomainResult<Sweet> {
        self.mutate(SweetCommand::Delete(DeleteSweet {
            sweet_id: id,
            occurred_at: Utc::now(),
        }))
    }

    /// Sell exactly one unit.
    ///
    /// Fails with `InsufficientStock` at zero stock and `NotFound` for an
    /// unknown id; state is untouched on failure.
    pub fn purchase(&self, id: SweetId) -> DomainResult<Sweet> {
        self.mutate(SweetCommand::Purchase(PurchaseSweet {
            sweet_id: id,
            occurred_at: Utc::now(),
        }))
    }

    /// Add `amount` units. Negative amounts are rejected, zero is a no-op.
    pub fn restock(&self, id: SweetId, amount: i64) -> DomainResult<Sweet> {
        self.mutate(SweetCommand::Restock(RestockSweet {
            sweet_id: id,
            amount,
            occurred_at: Utc::now(),
        }))
    }

    fn mutate(&self, command: SweetCommand) -> DomainResult<Sweet> {
        let id = command.sweet_id();
        let mut sweets = self.write();

        let idx = sweets
            .iter()
            .position(|s| s.sweet_id() == id)
            .ok_or(DomainError::NotFound)?;
        let slot = sweets.get_mut(idx).ok_or(DomainError::NotFound)?;

        let events = slot.execute(&command)?;
        let sweet = slot.clone();

        if matches!(command, SweetCommand::Delete(_)) {
            sweets.remove(idx);
        }
        self.publish(&events);

        Ok(sweet)
    }

    fn publish(&self, events: &[SweetEvent]) {
        for event in events {
            tracing::debug!(
                sweet_id = %event.sweet_id(),
                event_type = event.event_type(),
                "inventory change committed"
            );
            if let Err(err) = self.bus.publish(event.clone()) {
                tracing::warn!(
                    error = ?err,
                    event_type = event.event_type(),
                    "failed to publish inventory event"
                );
            }
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Sweet>> {
        // `apply` cannot fail halfway, so a poisoned lock still guards consistent data.
        self.sweets.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Sweet>> {
        self.sweets.write().unwrap_or_else(PoisonError::into_inner)
    }
}
