//! UI Components
//!
//! Leptos components binding the controller to the page.

mod todo_form;
mod task_list;

pub use todo_form::TodoForm;
pub use task_list::TaskList;
