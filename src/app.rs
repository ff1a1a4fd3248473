//! Todo Frontend App
//!
//! Root component: creates the controller, shares it via context and
//! fetches the collection once on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpApi;
use crate::components::{TaskList, TodoForm};
use crate::controller::AppController;

#[component]
pub fn App() -> impl IntoView {
    let ctrl = AppController::new(HttpApi);
    provide_context(ctrl);

    // Load tasks once on mount; failures only reach the console
    Effect::new(move |_| {
        spawn_local(async move {
            if let Err(e) = ctrl.load().await {
                web_sys::console::error_1(&format!("Failed to fetch todos: {}", e).into());
            }
        });
    });

    view! {
        <div class="app-shell">
            <main class="todo-card">
                <h1>"Todo App"</h1>
                <TodoForm />
                <TaskList />
            </main>
        </div>
    }
}
