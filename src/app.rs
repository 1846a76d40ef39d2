//! Plateboard App
//!
//! Root component: loads the menu once on mount, mediates the four
//! mutations against the backend, and patches the local list with each
//! outcome.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{AddFoodModal, EditFoodModal, FoodCard, Header};
use crate::models::{Food, FoodDraft};
use crate::store;

#[component]
pub fn App() -> impl IntoView {
    let (foods, set_foods) = signal(Vec::<Food>::new());
    let (editing_food, set_editing_food) = signal::<Option<Food>>(None);
    let (add_modal_open, set_add_modal_open) = signal(false);
    let (edit_modal_open, set_edit_modal_open) = signal(false);

    // Load the menu once on mount; reads no signals, so it never reruns
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_foods().await {
                Ok(loaded) => {
                    log::debug!("loaded {} plates", loaded.len());
                    set_foods.set(loaded);
                }
                Err(err) => log::error!("load plates failed: {}", err),
            }
        });
    });

    let toggle_add_modal = Callback::new(move |_: ()| {
        set_add_modal_open.update(|open| *open = !*open);
    });

    let toggle_edit_modal = Callback::new(move |_: ()| {
        set_edit_modal_open.update(|open| *open = !*open);
    });

    let handle_add_food = Callback::new(move |draft: FoodDraft| {
        spawn_local(async move {
            match api::create_food(&draft).await {
                Ok(created) => set_foods.update(|foods| store::append_food(foods, created)),
                Err(err) => log::error!("create plate failed: {}", err),
            }
        });
    });

    // Target id and current availability come from the editing snapshot,
    // not from the form
    let handle_update_food = Callback::new(move |draft: FoodDraft| {
        let Some(editing) = editing_food.get_untracked() else {
            log::warn!("update requested with no plate selected for editing");
            return;
        };
        spawn_local(async move {
            let record = draft.into_food(editing.id, editing.available);
            match api::update_food(record.id, &record).await {
                Ok(updated) => set_foods.update(|foods| store::replace_food(foods, updated)),
                Err(err) => log::error!("update plate failed: {}", err),
            }
        });
    });

    let handle_delete_food = Callback::new(move |id: u64| {
        spawn_local(async move {
            match api::delete_food(id).await {
                Ok(()) => set_foods.update(|foods| store::remove_food(foods, id)),
                Err(err) => log::error!("delete plate failed: {}", err),
            }
        });
    });

    // Availability applies the locally toggled copy; the PUT response body
    // is not consulted
    let handle_toggle_available = Callback::new(move |food: Food| {
        spawn_local(async move {
            let toggled = food.with_available_toggled();
            match api::update_food(toggled.id, &toggled).await {
                Ok(_) => set_foods.update(|foods| store::replace_food(foods, toggled)),
                Err(err) => log::error!("toggle availability failed: {}", err),
            }
        });
    });

    let handle_edit_food = Callback::new(move |food: Food| {
        set_editing_food.set(Some(food));
        toggle_edit_modal.run(());
    });

    view! {
        <Header on_open_add_modal=toggle_add_modal/>

        <AddFoodModal
            is_open=add_modal_open
            on_close=toggle_add_modal
            on_add_food=handle_add_food
        />

        <EditFoodModal
            is_open=edit_modal_open
            editing_food=editing_food
            on_close=toggle_edit_modal
            on_update_food=handle_update_food
        />

        <main class="foods-grid">
            <For
                each=move || foods.get()
                key=|food| {
                    // Key on the mutable fields so an in-place replacement
                    // re-renders the card
                    (
                        food.id,
                        food.available,
                        food.name.clone(),
                        food.image.clone(),
                        food.price.clone(),
                        food.description.clone(),
                    )
                }
                children=move |food| {
                    view! {
                        <FoodCard
                            food=food
                            on_edit=handle_edit_food
                            on_delete=handle_delete_food
                            on_toggle_available=handle_toggle_available
                        />
                    }
                }
            />
        </main>

        <p class="plate-count">{move || format!("{} plates", foods.get().len())}</p>
    }
}
