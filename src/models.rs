//! Frontend Models
//!
//! Data structures matching the menu backend's JSON representation.

use serde::{Deserialize, Serialize};

/// A menu plate as the backend returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: u64,
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl Food {
    /// Copy of this plate with the availability flag flipped
    pub fn with_available_toggled(&self) -> Food {
        Food {
            available: !self.available,
            ..self.clone()
        }
    }
}

/// Create/update payload; `id` and `available` are backend-owned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDraft {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

impl FoodDraft {
    /// Full replacement record for PUT, re-attaching the backend-owned fields
    pub fn into_food(self, id: u64, available: bool) -> Food {
        Food {
            id,
            name: self.name,
            image: self.image,
            price: self.price,
            description: self.description,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> FoodDraft {
        FoodDraft {
            name: "Taco".to_string(),
            image: "https://example.com/taco.png".to_string(),
            price: "9.90".to_string(),
            description: "Crunchy".to_string(),
        }
    }

    #[test]
    fn test_into_food_keeps_backend_fields() {
        let food = sample_draft().into_food(7, true);

        assert_eq!(food.id, 7);
        assert!(food.available);
        assert_eq!(food.name, "Taco");
        assert_eq!(food.price, "9.90");
    }

    #[test]
    fn test_toggle_flips_only_availability() {
        let food = sample_draft().into_food(3, true);
        let toggled = food.with_available_toggled();

        assert!(!toggled.available);
        assert_eq!(toggled.id, food.id);
        assert_eq!(toggled.name, food.name);
        assert_eq!(toggled.image, food.image);
        assert_eq!(toggled.price, food.price);
        assert_eq!(toggled.description, food.description);
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let food = sample_draft().into_food(3, true);

        assert_eq!(food.with_available_toggled().with_available_toggled(), food);
    }

    #[test]
    fn test_deserializes_backend_payload() {
        let json = r#"{
            "id": 1,
            "name": "Pizza",
            "image": "https://example.com/pizza.png",
            "price": "19.90",
            "description": "Wood-fired",
            "available": true
        }"#;

        let food: Food = serde_json::from_str(json).expect("valid payload");
        assert_eq!(food.id, 1);
        assert_eq!(food.name, "Pizza");
        assert!(food.available);
    }
}
