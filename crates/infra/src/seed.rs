//! Starter catalog loaded when the service is configured to seed.

use rust_decimal::Decimal;

use sweetshop_inventory::{Category, NewSweet};

fn sweet(
    name: &str,
    category: Category,
    cents: i64,
    quantity: i64,
    description: &str,
    image: &str,
) -> NewSweet {
    NewSweet {
        name: name.to_string(),
        category,
        price: Decimal::new(cents, 2),
        quantity,
        description: Some(description.to_string()),
        image: Some(image.to_string()),
    }
}

/// Starter sweets, one per category plus an out-of-stock gummy.
pub fn seed_catalog() -> Vec<NewSweet> {
    vec![
        sweet(
            "Belgian Dark Truffles",
            Category::Chocolate,
            1299,
            25,
            "Silky ganache rolled in cocoa, 70% Belgian dark chocolate",
            "https://images.unsplash.com/photo-1548907040-4baa42d10919?w=400&h=300&fit=crop",
        ),
        sweet(
            "Rainbow Gummy Bears",
            Category::Gummy,
            599,
            40,
            "Chewy fruit-flavoured bears in six colours",
            "https://images.unsplash.com/photo-1582058091505-f87a2e55a40f?w=400&h=300&fit=crop",
        ),
        sweet(
            "Swirl Lollipops",
            Category::Lollipop,
            349,
            60,
            "Giant hand-pulled swirl pops",
            "https://images.unsplash.com/photo-1575224300306-1b8da36134ec?w=400&h=300&fit=crop",
        ),
        sweet(
            "Salted Caramel Chews",
            Category::Caramel,
            799,
            15,
            "Buttery caramels finished with sea salt flakes",
            "https://images.unsplash.com/photo-1581798459219-318e76aecc7b?w=400&h=300&fit=crop",
        ),
        sweet(
            "Peppermint Pillows",
            Category::Mint,
            449,
            30,
            "Soft melt-away peppermint puffs",
            "https://images.unsplash.com/photo-1621939514649-280e2ee25f60?w=400&h=300&fit=crop",
        ),
        sweet(
            "Citrus Fruit Slices",
            Category::Fruit,
            549,
            20,
            "Sugared orange, lemon and lime jelly slices",
            "https://images.unsplash.com/photo-1599599810769-bcde5a160d32?w=400&h=300&fit=crop",
        ),
        sweet(
            "Sour Watermelon Wedges",
            Category::Gummy,
            499,
            0,
            "Sweet, sour and back in stock soon",
            "https://images.unsplash.com/photo-1499195333224-3ce974eecb47?w=400&h=300&fit=crop",
        ),
        sweet(
            "Honeycomb Crunch",
            Category::Other,
            699,
            12,
            "Golden honeycomb toffee, dipped halfway in milk chocolate",
            "https://images.unsplash.com/photo-1587132137056-bfbf0166836e?w=400&h=300&fit=crop",
        ),
    ]
}
