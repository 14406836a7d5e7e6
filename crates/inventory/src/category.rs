use core::str::FromStr;

use serde::{Deserialize, Serialize};

use sweetshop_core::DomainError;

/// Closed set of catalog categories.
///
/// Adding a variant forces every table below to be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Chocolate,
    Gummy,
    Lollipop,
    Caramel,
    Mint,
    Fruit,
    Other,
}

impl Category {
    /// Every category, in the order the shop lists them.
    pub const ALL: [Category; 7] = [
        Category::Chocolate,
        Category::Gummy,
        Category::Lollipop,
        Category::Caramel,
        Category::Mint,
        Category::Fruit,
        Category::Other,
    ];

    /// Wire name (lowercase).
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Chocolate => "chocolate",
            Category::Gummy => "gummy",
            Category::Lollipop => "lollipop",
            Category::Caramel => "caramel",
            Category::Mint => "mint",
            Category::Fruit => "fruit",
            Category::Other => "other",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Chocolate => "Chocolate",
            Category::Gummy => "Gummy",
            Category::Lollipop => "Lollipop",
            Category::Caramel => "Caramel",
            Category::Mint => "Mint",
            Category::Fruit => "Fruit",
            Category::Other => "Other",
        }
    }

    /// Badge colour token used by the storefront theme.
    pub fn color(self) -> &'static str {
        match self {
            Category::Chocolate => "chocolate",
            Category::Gummy => "strawberry",
            Category::Lollipop => "blueberry",
            Category::Caramel => "caramel",
            Category::Mint => "mint",
            Category::Fruit => "lemon",
            Category::Other => "secondary",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                DomainError::invalid_input(format!(
                    "unknown category '{s}' (expected one of: chocolate, gummy, lollipop, caramel, mint, fruit, other)"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_every_wire_name() {
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>().unwrap(), c);
        }
        assert_eq!(" Gummy ".parse::<Category>().unwrap(), Category::Gummy);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "licorice".parse::<Category>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn presentation_table() {
        assert_eq!(Category::Gummy.label(), "Gummy");
        assert_eq!(Category::Gummy.color(), "strawberry");
        assert_eq!(Category::Fruit.color(), "lemon");
        assert_eq!(Category::Other.color(), "secondary");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Category::Lollipop).unwrap();
        assert_eq!(json, "\"lollipop\"");
        let back: Category = serde_json::from_str("\"caramel\"").unwrap();
        assert_eq!(back, Category::Caramel);
    }
}
