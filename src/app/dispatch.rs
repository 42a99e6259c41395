//! Action execution against the store.
//!
//! [`dispatch`] runs one [`Action`] against a [`Store`] and maps the outcome to
//! the [`Event`] that folds it back into application state. It is the only
//! place where the app layer touches the store, keeping the event handler pure.
//!
//! Errors are carried as their display message: that is the contract of the
//! mock API (callers distinguish failures by message text), and it is what the
//! state machine surfaces to the user. Nothing here retries; retry
//! responsibility stays with the caller.

use crate::app::actions::Action;
use crate::app::handler::Event;
use crate::store::Store;

/// Executes one action against the store and returns the resulting event.
pub fn dispatch(store: &mut dyn Store, action: Action) -> Event {
    match action {
        Action::FetchContacts => match store.get_contacts() {
            Ok(contacts) => Event::ContactsLoaded(contacts),
            Err(e) => {
                tracing::debug!(error = %e, "contact fetch failed");
                Event::ContactsFailed(e.to_string())
            }
        },

        Action::FetchTasks => match store.get_tasks() {
            Ok(tasks) => Event::TasksLoaded(tasks),
            Err(e) => {
                tracing::debug!(error = %e, "task fetch failed");
                Event::TasksFailed(e.to_string())
            }
        },

        Action::FetchContactTasks { contact_id } => {
            match store.get_contact_tasks(&contact_id) {
                Ok(tasks) => Event::ContactTasksLoaded { contact_id, tasks },
                Err(e) => {
                    tracing::debug!(error = %e, contact_id = %contact_id, "contact task fetch failed");
                    Event::TasksFailed(e.to_string())
                }
            }
        }

        Action::CreateTask(input) => match store.create_task(input) {
            Ok(task) => Event::TaskCreated(task),
            Err(e) => {
                tracing::debug!(error = %e, "task creation failed");
                Event::TaskFailed(e.to_string())
            }
        },

        Action::UpdateTask { id, patch } => match store.update_task(&id, patch) {
            Ok(task) => Event::TaskUpdated(task),
            Err(e) => {
                tracing::debug!(error = %e, task_id = %id, "task update failed");
                Event::TaskFailed(e.to_string())
            }
        },

        Action::DeleteTask { id } => match store.delete_task(&id) {
            Ok(()) => Event::TaskDeleted { id },
            Err(e) => {
                tracing::debug!(error = %e, task_id = %id, "task deletion failed");
                Event::TaskFailed(e.to_string())
            }
        },
    }
}
