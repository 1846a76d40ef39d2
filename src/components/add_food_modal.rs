//! Add Food Modal Component
//!
//! Modal form for creating a new plate.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::FoodDraft;

/// Modal form for adding a plate; closes itself after submitting
#[component]
pub fn AddFoodModal(
    is_open: ReadSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_add_food: Callback<FoodDraft>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (image, set_image) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().is_empty() { return; }

        on_add_food.run(FoodDraft {
            name: name.get(),
            image: image.get(),
            price: price.get(),
            description: description.get(),
        });

        set_name.set(String::new());
        set_image.set(String::new());
        set_price.set(String::new());
        set_description.set(String::new());
        on_close.run(());
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <form class="food-form" on:submit=submit>
                        <h2>"New plate"</h2>
                        <input
                            type="text"
                            placeholder="Plate name"
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_name.set(input.value());
                            }
                        />
                        <input
                            type="text"
                            placeholder="Image URL"
                            prop:value=move || image.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_image.set(input.value());
                            }
                        />
                        <input
                            type="text"
                            placeholder="Price"
                            prop:value=move || price.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_price.set(input.value());
                            }
                        />
                        <textarea
                            placeholder="Description"
                            prop:value=move || description.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                set_description.set(area.value());
                            }
                        ></textarea>
                        <button type="submit">"Add plate"</button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
