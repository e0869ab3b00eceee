//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Market item data structure (matches backend entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i32,
    pub unit: String,
}

/// Item category options for the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Vegetable,
    Fruit,
    Grain,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Vegetable, Category::Fruit, Category::Grain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vegetable => "Vegetable",
            Category::Fruit => "Fruit",
            Category::Grain => "Grain",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Vegetable" => Some(Category::Vegetable),
            "Fruit" => Some(Category::Fruit),
            "Grain" => Some(Category::Grain),
            _ => None,
        }
    }
}

/// Measurement unit options for the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Kg,
    Gram,
    Dozen,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Kg, Unit::Gram, Unit::Dozen];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kg => "Kg",
            Unit::Gram => "Gram",
            Unit::Dozen => "Dozen",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Kg" => Some(Unit::Kg),
            "Gram" => Some(Unit::Gram),
            "Dozen" => Some(Unit::Dozen),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_str("Meat"), None);
        assert_eq!(Category::from_str(""), None);
    }

    #[test]
    fn test_unit_round_trip() {
        for unit in Unit::ALL {
            assert_eq!(Unit::from_str(unit.as_str()), Some(unit));
        }
        assert_eq!(Unit::from_str("Litre"), None);
    }

    #[test]
    fn test_market_item_deserialize() {
        let json = r#"{"id":5,"name":"Tomato","category":"Vegetable","price":2.5,"quantity":10,"unit":"Kg"}"#;
        let item: MarketItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 5);
        assert_eq!(item.name, "Tomato");
        assert_eq!(item.category, "Vegetable");
        assert_eq!(item.price, 2.5);
        assert_eq!(item.quantity, 10);
        assert_eq!(item.unit, "Kg");
    }
}
