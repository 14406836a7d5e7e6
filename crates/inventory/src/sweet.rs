use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sweetshop_core::{Aggregate, AggregateId, AggregateRoot, DomainError};
use sweetshop_events::Event;

use crate::{Category, Price};

/// Description given to sweets added without one.
pub const DEFAULT_DESCRIPTION: &str = "Delicious sweet treat";

/// Image given to sweets added without one.
pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1582058091505-f87a2e55a40f?w=400&h=300&fit=crop";

/// Sweet identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SweetId(pub AggregateId);

impl SweetId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }

    /// Fresh, time-ordered identifier.
    pub fn generate() -> Self {
        Self(AggregateId::new())
    }
}

impl core::fmt::Display for SweetId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for SweetId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Aggregate root: a sellable catalog entry.
///
/// # Invariants
/// - `quantity` is a `u32`, and no command can produce an event that would
///   take it below zero or past `u32::MAX`.
/// - `name` is never blank once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sweet {
    id: SweetId,
    name: String,
    category: Category,
    price: Price,
    quantity: u32,
    description: String,
    image: String,
    version: u64,
    created: bool,
}

impl Sweet {
    /// Create an empty, not-yet-created aggregate instance.
    pub fn empty(id: SweetId) -> Self {
        Self {
            id,
            name: String::new(),
            category: Category::Other,
            price: Price::ZERO,
            quantity: 0,
            description: String::new(),
            image: String::new(),
            version: 0,
            created: false,
        }
    }

    pub fn sweet_id(&self) -> SweetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }
}

impl AggregateRoot for Sweet {
    type Id = SweetId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Fields for a new sweet, as supplied by the caller (unvalidated).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSweet {
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    pub quantity: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Partial update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweetPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Command: AddSweet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddSweet {
    pub sweet_id: SweetId,
    pub sweet: NewSweet,
    pub occurred_at: DateTime<Utc>,
}

/// Command: UpdateSweet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSweet {
    pub sweet_id: SweetId,
    pub patch: SweetPatch,
    pub occurred_at: DateTime<Utc>,
}

/// Command: DeleteSweet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteSweet {
    pub sweet_id: SweetId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: PurchaseSweet (exactly one unit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSweet {
    pub sweet_id: SweetId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RestockSweet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestockSweet {
    pub sweet_id: SweetId,
    pub amount: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweetCommand {
    Add(AddSweet),
    Update(UpdateSweet),
    Delete(DeleteSweet),
    Purchase(PurchaseSweet),
    Restock(RestockSweet),
}

impl SweetCommand {
    pub fn sweet_id(&self) -> SweetId {
        match self {
            SweetCommand::Add(c) => c.sweet_id,
            SweetCommand::Update(c) => c.sweet_id,
            SweetCommand::Delete(c) => c.sweet_id,
            SweetCommand::Purchase(c) => c.sweet_id,
            SweetCommand::Restock(c) => c.sweet_id,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

/// Event: SweetAdded (all fields validated and defaulted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweetAdded {
    pub sweet_id: SweetId,
    pub name: String,
    pub category: Category,
    pub price: Price,
    pub quantity: u32,
    pub description: String,
    pub image: String,
    pub occurred_at: DateTime<Utc>,
}

/// Validated subset of fields changed by an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweetChanges {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub price: Option<Price>,
    pub quantity: Option<u32>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl SweetChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Event: SweetUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweetUpdated {
    pub sweet_id: SweetId,
    pub changes: SweetChanges,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SweetDeleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweetDeleted {
    pub sweet_id: SweetId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SweetPurchased. `remaining` is the stock after the sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweetPurchased {
    pub sweet_id: SweetId,
    pub remaining: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SweetRestocked. `quantity` is the stock after the restock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweetRestocked {
    pub sweet_id: SweetId,
    pub amount: u32,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweetEvent {
    Added(SweetAdded),
    Updated(SweetUpdated),
    Deleted(SweetDeleted),
    Purchased(SweetPurchased),
    Restocked(SweetRestocked),
}

impl SweetEvent {
    pub fn sweet_id(&self) -> SweetId {
        match self {
            SweetEvent::Added(e) => e.sweet_id,
            SweetEvent::Updated(e) => e.sweet_id,
            SweetEvent::Deleted(e) => e.sweet_id,
            SweetEvent::Purchased(e) => e.sweet_id,
            SweetEvent::Restocked(e) => e.sweet_id,
        }
    }
}

impl Event for SweetEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SweetEvent::Added(_) => "inventory.sweet.added",
            SweetEvent::Updated(_) => "inventory.sweet.updated",
            SweetEvent::Deleted(_) => "inventory.sweet.deleted",
            SweetEvent::Purchased(_) => "inventory.sweet.purchased",
            SweetEvent::Restocked(_) => "inventory.sweet.restocked",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            SweetEvent::Added(e) => e.occurred_at,
            SweetEvent::Updated(e) => e.occurred_at,
            SweetEvent::Deleted(e) => e.occurred_at,
            SweetEvent::Purchased(e) => e.occurred_at,
            SweetEvent::Restocked(e) => e.occurred_at,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Aggregate
// ─────────────────────────────────────────────────────────────────────────────

impl Aggregate for Sweet {
    type Command = SweetCommand;
    type Event = SweetEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            SweetEvent::Added(e) => {
                self.id = e.sweet_id;
                self.name = e.name.clone();
                self.category = e.category;
                self.price = e.price;
                self.quantity = e.quantity;
                self.description = e.description.clone();
                self.image = e.image.clone();
                self.created = true;
            }
            SweetEvent::Updated(e) => {
                let c = &e.changes;
                if let Some(name) = &c.name {
                    self.name = name.clone();
                }
                if let Some(category) = c.category {
                    self.category = category;
                }
                if let Some(price) = c.price {
                    self.price = price;
                }
                if let Some(quantity) = c.quantity {
                    self.quantity = quantity;
                }
                if let Some(description) = &c.description {
                    self.description = description.clone();
                }
                if let Some(image) = &c.image {
                    self.image = image.clone();
                }
            }
            SweetEvent::Deleted(_) => {
                self.created = false;
            }
            SweetEvent::Purchased(e) => {
                self.quantity = e.remaining;
            }
            SweetEvent::Restocked(e) => {
                self.quantity = e.quantity;
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            SweetCommand::Add(cmd) => self.handle_add(cmd),
            SweetCommand::Update(cmd) => self.handle_update(cmd),
            SweetCommand::Delete(cmd) => self.handle_delete(cmd),
            SweetCommand::Purchase(cmd) => self.handle_purchase(cmd),
            SweetCommand::Restock(cmd) => self.handle_restock(cmd),
        }
    }
}

impl Sweet {
    fn ensure_live(&self, sweet_id: SweetId) -> Result<(), DomainError> {
        if !self.created {
            return Err(DomainError::not_found());
        }
        if self.id != sweet_id {
            return Err(DomainError::invariant("sweet_id mismatch"));
        }
        Ok(())
    }

    fn handle_add(&self, cmd: &AddSweet) -> Result<Vec<SweetEvent>, DomainError> {
        if self.created {
            return Err(DomainError::invariant("sweet already exists"));
        }
        let s = &cmd.sweet;

        Ok(vec![SweetEvent::Added(SweetAdded {
            sweet_id: cmd.sweet_id,
            name: validate_name(&s.name)?,
            category: s.category,
            price: Price::new(s.price)?,
            quantity: validate_quantity(s.quantity)?,
            description: or_default(s.description.as_deref(), DEFAULT_DESCRIPTION),
            image: or_default(s.image.as_deref(), DEFAULT_IMAGE),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_update(&self, cmd: &UpdateSweet) -> Result<Vec<SweetEvent>, DomainError> {
        self.ensure_live(cmd.sweet_id)?;
        let p = &cmd.patch;

        let changes = SweetChanges {
            name: p.name.as_deref().map(validate_name).transpose()?,
            category: p.category,
            price: p.price.map(Price::new).transpose()?,
            quantity: p.quantity.map(validate_quantity).transpose()?,
            description: p.description.clone(),
            image: p.image.clone(),
        };

        if changes.is_empty() {
            return Ok(vec![]);
        }

        Ok(vec![SweetEvent::Updated(SweetUpdated {
            sweet_id: cmd.sweet_id,
            changes,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_delete(&self, cmd: &DeleteSweet) -> Result<Vec<SweetEvent>, DomainError> {
        self.ensure_live(cmd.sweet_id)?;

        Ok(vec![SweetEvent::Deleted(SweetDeleted {
            sweet_id: cmd.sweet_id,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_purchase(&self, cmd: &PurchaseSweet) -> Result<Vec<SweetEvent>, DomainError> {
        self.ensure_live(cmd.sweet_id)?;

        let remaining = self
            .quantity
            .checked_sub(1)
            .ok_or(DomainError::InsufficientStock)?;

        Ok(vec![SweetEvent::Purchased(SweetPurchased {
            sweet_id: cmd.sweet_id,
            remaining,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_restock(&self, cmd: &RestockSweet) -> Result<Vec<SweetEvent>, DomainError> {
        self.ensure_live(cmd.sweet_id)?;

        if cmd.amount < 0 {
            return Err(DomainError::invalid_input("restock amount cannot be negative"));
        }
        if cmd.amount == 0 {
            return Ok(vec![]);
        }

        let amount = u32::try_from(cmd.amount)
            .map_err(|_| DomainError::invalid_input("restock amount too large"))?;
        let quantity = self
            .quantity
            .checked_add(amount)
            .ok_or_else(|| DomainError::invalid_input("restock would overflow stock"))?;

        Ok(vec![SweetEvent::Restocked(SweetRestocked {
            sweet_id: cmd.sweet_id,
            amount,
            quantity,
            occurred_at: cmd.occurred_at,
        })])
    }
}

fn validate_name(name: &str) -> Result<String, DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::invalid_input("name cannot be empty"));
    }
    Ok(name.to_string())
}

fn validate_quantity(quantity: i64) -> Result<u32, DomainError> {
    if quantity < 0 {
        return Err(DomainError::invalid_input("quantity cannot be negative"));
    }
    u32::try_from(quantity).map_err(|_| DomainError::invalid_input("quantity too large"))
}

fn or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    fn new_sweet(quantity: i64) -> NewSweet {
        NewSweet {
            name: "Sea Salt Caramel".to_string(),
            category: Category::Caramel,
            price: Decimal::new(450, 2),
            quantity,
            description: None,
            image: None,
        }
    }

    fn created(quantity: i64) -> Sweet {
        let id = SweetId::generate();
        let mut sweet = Sweet::empty(id);
        sweet
            .execute(&SweetCommand::Add(AddSweet {
                sweet_id: id,
                sweet: new_sweet(quantity),
                occurred_at: now(),
            }))
            .unwrap();
        sweet
    }

    fn purchase(sweet: &Sweet) -> SweetCommand {
        SweetCommand::Purchase(PurchaseSweet {
            sweet_id: sweet.sweet_id(),
            occurred_at: now(),
        })
    }

    fn restock(sweet: &Sweet, amount: i64) -> SweetCommand {
        SweetCommand::Restock(RestockSweet {
            sweet_id: sweet.sweet_id(),
            amount,
            occurred_at: now(),
        })
    }

    #[test]
    fn add_fills_defaults() {
        let sweet = created(3);

        assert_eq!(sweet.name(), "Sea Salt Caramel");
        assert_eq!(sweet.quantity(), 3);
        assert_eq!(sweet.description(), DEFAULT_DESCRIPTION);
        assert_eq!(sweet.image(), DEFAULT_IMAGE);
        assert_eq!(sweet.version(), 1);
    }

    #[test]
    fn add_rejects_blank_name_and_negative_numbers() {
        let id = SweetId::generate();
        let sweet = Sweet::empty(id);

        let mut blank = new_sweet(1);
        blank.name = "   ".to_string();
        let mut cheap = new_sweet(1);
        cheap.price = Decimal::new(-1, 0);

        for fields in [blank, cheap, new_sweet(-1)] {
            let err = sweet
                .handle(&SweetCommand::Add(AddSweet {
                    sweet_id: id,
                    sweet: fields,
                    occurred_at: now(),
                }))
                .unwrap_err();
            assert!(matches!(err, DomainError::InvalidInput(_)));
        }
    }

    #[test]
    fn purchase_decrements_by_one() {
        let mut sweet = created(2);

        let events = sweet.execute(&purchase(&sweet)).unwrap();

        let SweetEvent::Purchased(e) = &events[0] else {
            panic!("expected SweetPurchased event");
        };
        assert_eq!(e.remaining, 1);
        assert_eq!(sweet.quantity(), 1);
    }

    #[test]
    fn purchase_at_zero_is_insufficient_stock_and_changes_nothing() {
        let sweet = created(0);
        let before = sweet.clone();

        let err = sweet.handle(&purchase(&sweet)).unwrap_err();

        assert_eq!(err, DomainError::InsufficientStock);
        assert_eq!(sweet, before);
    }

    #[test]
    fn purchase_on_missing_sweet_is_not_found() {
        let sweet = Sweet::empty(SweetId::generate());
        assert_eq!(sweet.handle(&purchase(&sweet)).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn restock_adds_amount() {
        let mut sweet = created(0);
        sweet.execute(&restock(&sweet, 5)).unwrap();
        assert_eq!(sweet.quantity(), 5);
    }

    #[test]
    fn restock_rejects_negative_and_ignores_zero() {
        let mut sweet = created(4);

        let err = sweet.handle(&restock(&sweet, -2)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        assert!(sweet.execute(&restock(&sweet, 0)).unwrap().is_empty());
        assert_eq!(sweet.quantity(), 4);
    }

    #[test]
    fn restock_rejects_overflow() {
        let sweet = created(i64::from(u32::MAX));
        let err = sweet.handle(&restock(&sweet, 1)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn update_merges_only_given_fields() {
        let mut sweet = created(7);

        sweet
            .execute(&SweetCommand::Update(UpdateSweet {
                sweet_id: sweet.sweet_id(),
                patch: SweetPatch {
                    price: Some(Decimal::new(500, 2)),
                    description: Some("Now with more salt".to_string()),
                    ..SweetPatch::default()
                },
                occurred_at: now(),
            }))
            .unwrap();

        assert_eq!(sweet.price().amount(), Decimal::new(500, 2));
        assert_eq!(sweet.description(), "Now with more salt");
        assert_eq!(sweet.name(), "Sea Salt Caramel");
        assert_eq!(sweet.quantity(), 7);
    }

    #[test]
    fn empty_patch_emits_nothing() {
        let sweet = created(1);
        let events = sweet
            .handle(&SweetCommand::Update(UpdateSweet {
                sweet_id: sweet.sweet_id(),
                patch: SweetPatch::default(),
                occurred_at: now(),
            }))
            .unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn commands_for_another_sweet_are_rejected() {
        let sweet = created(1);
        let other = SweetCommand::Purchase(PurchaseSweet {
            sweet_id: SweetId::generate(),
            occurred_at: now(),
        });
        assert!(matches!(
            sweet.handle(&other).unwrap_err(),
            DomainError::InvariantViolation(_)
        ));
    }

    #[test]
    fn event_types_are_namespaced() {
        let mut sweet = created(1);
        let events = sweet.execute(&purchase(&sweet)).unwrap();
        assert_eq!(events[0].event_type(), "inventory.sweet.purchased");
        assert_eq!(events[0].sweet_id(), sweet.sweet_id());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Purchase,
            Restock(i64),
            SetQuantity(i64),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                3 => Just(Op::Purchase),
                1 => (-5i64..20).prop_map(Op::Restock),
                1 => (-5i64..20).prop_map(Op::SetQuantity),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: stock tracks successful operations exactly and never underflows.
            #[test]
            fn stock_never_goes_negative(start in 0i64..5, ops in prop::collection::vec(op(), 0..60)) {
                let mut sweet = created(start);
                let mut expected = start;

                for op in ops {
                    let cmd = match op {
                        Op::Purchase => purchase(&sweet),
                        Op::Restock(n) => restock(&sweet, n),
                        Op::SetQuantity(q) => SweetCommand::Update(UpdateSweet {
                            sweet_id: sweet.sweet_id(),
                            patch: SweetPatch { quantity: Some(q), ..SweetPatch::default() },
                            occurred_at: now(),
                        }),
                    };

                    let before = sweet.clone();
                    match (sweet.execute(&cmd), op) {
                        (Ok(_), Op::Purchase) => expected -= 1,
                        (Ok(_), Op::Restock(n)) => expected += n,
                        (Ok(_), Op::SetQuantity(q)) => expected = q,
                        (Err(_), _) => prop_assert_eq!(&sweet, &before),
                    }

                    prop_assert!(expected >= 0);
                    prop_assert_eq!(i64::from(sweet.quantity()), expected);
                }
            }
        }
    }
}
