//! Form State
//!
//! The single record currently being created or edited, plus validation.
//! All fields are kept as strings; the backend coerces numerics.

use crate::models::MarketItem;

/// Form state for the create/edit form. Field order matches the table columns
/// and determines which missing field is reported first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemForm {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
    pub unit: String,
}

impl ItemForm {
    /// Populate the form from an existing item for editing
    pub fn from_item(item: &MarketItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            category: item.category.clone(),
            price: item.price.to_string(),
            quantity: item.quantity.to_string(),
            unit: item.unit.clone(),
        }
    }

    /// Fields in declaration order, paired with their user-facing names
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("id", &self.id),
            ("name", &self.name),
            ("category", &self.category),
            ("price", &self.price),
            ("quantity", &self.quantity),
            ("unit", &self.unit),
        ]
    }

    /// Every field must be non-empty after trimming. Returns the message for
    /// the first failing field. No type or range checks happen client-side.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in self.fields() {
            if value.trim().is_empty() {
                return Err(format!("Please fill out the {} field.", name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ItemForm {
        ItemForm {
            id: "1".to_string(),
            name: "Tomato".to_string(),
            category: "Vegetable".to_string(),
            price: "2.5".to_string(),
            quantity: "10".to_string(),
            unit: "Kg".to_string(),
        }
    }

    #[test]
    fn test_validate_full_form_passes() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_form_names_id_first() {
        let err = ItemForm::default().validate().unwrap_err();
        assert_eq!(err, "Please fill out the id field.");
    }

    #[test]
    fn test_validate_reports_first_empty_field_in_order() {
        let mut form = filled_form();
        form.category = String::new();
        form.unit = String::new();
        // category comes before unit in declaration order
        assert_eq!(
            form.validate().unwrap_err(),
            "Please fill out the category field."
        );
    }

    #[test]
    fn test_validate_rejects_whitespace_only() {
        let mut form = filled_form();
        form.name = "   ".to_string();
        assert_eq!(
            form.validate().unwrap_err(),
            "Please fill out the name field."
        );
    }

    #[test]
    fn test_from_item_stringifies_numerics() {
        let item = MarketItem {
            id: 7,
            name: "Rice".to_string(),
            category: "Grain".to_string(),
            price: 1.25,
            quantity: 3,
            unit: "Kg".to_string(),
        };
        let form = ItemForm::from_item(&item);
        assert_eq!(form.id, "7");
        assert_eq!(form.price, "1.25");
        assert_eq!(form.quantity, "3");
        assert!(form.validate().is_ok());
    }
}
