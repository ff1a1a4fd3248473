//! Task List Component
//!
//! Renders the cached collection. Rows address the controller by their
//! position in the list; the controller resolves positions to ids.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::use_controller;
use crate::models::Task;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctrl = use_controller();

    let rows = move || ctrl.tasks().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <ul class="task-list">
            <For
                each=rows
                // Key on the mutable fields so toggles and edits re-render the row
                key=|(_, task)| (task.id, task.updated_at, task.is_completed)
                children=move |(index, task)| view! { <TaskRow index=index task=task /> }
            />
        </ul>

        <Show when=move || ctrl.tasks().is_empty()>
            <p class="empty-hint">"No tasks yet. Add your first todo!"</p>
        </Show>
    }
}

/// A single task row with toggle, edit and delete affordances
#[component]
fn TaskRow(index: usize, task: Task) -> impl IntoView {
    let ctrl = use_controller();

    let completed = task.is_completed;
    let title = task.title.clone();
    let description = task.description.clone();
    let toggle_label = format!(
        "Mark task \"{}\" as {}",
        task.title,
        if completed { "incomplete" } else { "complete" }
    );
    let edit_label = format!("Edit task: {}", task.title);
    let delete_label = format!("Delete task: {}", task.title);

    view! {
        <li class=if completed { "task-row completed" } else { "task-row" }>
            <button
                class="toggle-btn"
                aria-label=toggle_label
                on:click=move |_| {
                    spawn_local(async move {
                        if let Err(e) = ctrl.toggle_complete(index).await {
                            web_sys::console::error_1(
                                &format!("Failed to toggle completion: {}", e).into(),
                            );
                        }
                    });
                }
            >
                <span class="task-title">{title}</span>
                <span class="task-description">{description}</span>
            </button>

            <span class="row-actions">
                <button
                    class="edit-btn"
                    aria-label=edit_label
                    on:click=move |_| ctrl.begin_edit(index)
                >
                    "✎"
                </button>
                <button
                    class="delete-btn"
                    aria-label=delete_label
                    on:click=move |_| {
                        spawn_local(async move {
                            if let Err(e) = ctrl.delete(index).await {
                                web_sys::console::error_1(
                                    &format!("Failed to delete task: {}", e).into(),
                                );
                            }
                        });
                    }
                >
                    "×"
                </button>
            </span>
        </li>
    }
}
