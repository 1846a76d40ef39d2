//! Food Card Component
//!
//! Renders one plate with its availability switch, edit trigger, and
//! inline delete confirmation.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::Food;

/// One plate in the menu grid
#[component]
pub fn FoodCard(
    food: Food,
    #[prop(into)] on_edit: Callback<Food>,
    #[prop(into)] on_delete: Callback<u64>,
    #[prop(into)] on_toggle_available: Callback<Food>,
) -> impl IntoView {
    let id = food.id;
    let available = food.available;
    let edit_food = food.clone();
    let toggle_food = food.clone();

    let card_class = if available { "food-card" } else { "food-card unavailable" };

    view! {
        <section class=card_class>
            <header class="food-card-image">
                <img src=food.image.clone() alt=food.name.clone()/>
            </header>
            <div class="food-card-body">
                <h2>{food.name.clone()}</h2>
                <p>{food.description.clone()}</p>
                <p class="food-price">"$ "<b>{food.price.clone()}</b></p>
            </div>
            <footer class="food-card-footer">
                <div class="food-card-actions">
                    <button
                        type="button"
                        class="icon-btn edit-btn"
                        on:click=move |_| on_edit.run(edit_food.clone())
                    >
                        "✎"
                    </button>
                    <DeleteConfirmButton
                        button_class="icon-btn delete-btn"
                        on_confirm=Callback::new(move |_| on_delete.run(id))
                    />
                </div>
                <div class="availability">
                    <span>{if available { "Available" } else { "Unavailable" }}</span>
                    <label class="availability-switch">
                        <input
                            type="checkbox"
                            prop:checked=available
                            on:change=move |_| on_toggle_available.run(toggle_food.clone())
                        />
                        <span class="slider"></span>
                    </label>
                </div>
            </footer>
        </section>
    }
}
