//! Menu Collection State Helpers
//!
//! Pure patch operations applied to the local plate list after a backend
//! call succeeds. The controller is the single writer; each helper mutates
//! the list in place and preserves the order of untouched plates.

use crate::models::Food;

/// Append a newly created plate to the end of the list
pub fn append_food(foods: &mut Vec<Food>, created: Food) {
    foods.push(created);
}

/// Replace the plate with the matching id in place; unknown ids are a no-op
pub fn replace_food(foods: &mut Vec<Food>, updated: Food) {
    if let Some(food) = foods.iter_mut().find(|food| food.id == updated.id) {
        *food = updated;
    }
}

/// Remove the plate with the given id; unknown ids are a no-op
pub fn remove_food(foods: &mut Vec<Food>, id: u64) {
    foods.retain(|food| food.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_food(id: u64, name: &str) -> Food {
        Food {
            id,
            name: name.to_string(),
            image: format!("https://example.com/{}.png", id),
            price: "10.00".to_string(),
            description: format!("Plate {}", id),
            available: true,
        }
    }

    #[test]
    fn test_append_keeps_existing_order() {
        let mut foods = vec![make_food(1, "Pizza"), make_food(2, "Taco")];

        append_food(&mut foods, make_food(7, "Ramen"));

        assert_eq!(foods.len(), 3);
        assert_eq!(foods[0].id, 1);
        assert_eq!(foods[1].id, 2);
        assert_eq!(foods[2].id, 7);
        assert_eq!(foods[2].name, "Ramen");
    }

    #[test]
    fn test_replace_in_place() {
        let mut foods = vec![make_food(1, "Pizza"), make_food(2, "Taco"), make_food(3, "Ramen")];
        let mut updated = make_food(2, "Burrito");
        updated.price = "12.50".to_string();

        replace_food(&mut foods, updated);

        // Same position, same length, other plates untouched
        assert_eq!(foods.len(), 3);
        assert_eq!(foods[0].name, "Pizza");
        assert_eq!(foods[1].name, "Burrito");
        assert_eq!(foods[1].price, "12.50");
        assert_eq!(foods[2].name, "Ramen");
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let mut foods = vec![make_food(1, "Pizza")];
        let before = foods.clone();

        replace_food(&mut foods, make_food(99, "Ghost"));

        assert_eq!(foods, before);
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut foods = vec![make_food(1, "Pizza"), make_food(2, "Taco"), make_food(3, "Ramen")];

        remove_food(&mut foods, 2);

        assert_eq!(foods.len(), 2);
        assert_eq!(foods[0].id, 1);
        assert_eq!(foods[1].id, 3);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut foods = vec![make_food(1, "Pizza")];

        remove_food(&mut foods, 99);

        assert_eq!(foods.len(), 1);
    }

    #[test]
    fn test_delete_last_plate_empties_list() {
        let mut foods = vec![make_food(1, "Pizza")];

        remove_food(&mut foods, 1);

        assert!(foods.is_empty());
    }

    #[test]
    fn test_toggle_then_replace_patches_availability() {
        let mut foods = vec![make_food(1, "Pizza"), make_food(2, "Taco")];
        let toggled = foods[1].with_available_toggled();

        replace_food(&mut foods, toggled);

        assert!(!foods[1].available);
        assert_eq!(foods[1].name, "Taco");
        assert!(foods[0].available);
    }
}
