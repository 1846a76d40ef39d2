//! UI Components
//!
//! Reusable Leptos components.

mod add_food_modal;
mod delete_confirm_button;
mod edit_food_modal;
mod food_card;
mod header;

pub use add_food_modal::AddFoodModal;
pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_food_modal::EditFoodModal;
pub use food_card::FoodCard;
pub use header::Header;
