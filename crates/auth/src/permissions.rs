use serde::{Deserialize, Serialize};

/// What an identity may do. Serialized as dotted names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    /// Grants everything.
    #[serde(rename = "*")]
    All,
    /// Buy one unit of a sweet.
    #[serde(rename = "inventory.items.purchase")]
    Purchase,
    /// Add, edit, delete and restock sweets.
    #[serde(rename = "inventory.items.manage")]
    ManageItems,
    /// Read the admin dashboard counters.
    #[serde(rename = "inventory.summary.read")]
    ReadSummary,
}

impl Permission {
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::All => "*",
            Permission::Purchase => "inventory.items.purchase",
            Permission::ManageItems => "inventory.items.manage",
            Permission::ReadSummary => "inventory.summary.read",
        }
    }

    /// Whether holding `self` is enough for `required`.
    pub fn covers(self, required: Permission) -> bool {
        self == Permission::All || self == required
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
