//! Todo Form Component
//!
//! Draft inputs for creating a task, or updating one when edit mode is
//! active. Enter in either field submits through the form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::use_controller;

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctrl = use_controller();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            if let Err(e) = ctrl.submit().await {
                web_sys::console::error_1(&format!("Failed to save task: {}", e).into());
            }
        });
    };

    view! {
        <form class="todo-form" on:submit=submit>
            <input
                type="text"
                class="draft-input"
                placeholder="Title"
                prop:value=move || ctrl.draft_title()
                on:input=move |ev| ctrl.set_draft_title(event_target_value(&ev))
            />
            <input
                type="text"
                class="draft-input"
                placeholder="Description"
                prop:value=move || ctrl.draft_description()
                on:input=move |ev| ctrl.set_draft_description(event_target_value(&ev))
            />
            <button type="submit" class="submit-btn">
                {move || if ctrl.is_editing() { "Update" } else { "Add" }}
            </button>
        </form>
    }
}
