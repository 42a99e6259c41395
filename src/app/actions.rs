//! Actions representing store operations requested by the event handler.
//!
//! Actions bridge pure state transitions and effectful store calls: the event
//! handler returns a `Vec<Action>` after processing each event, and the host
//! executes them via [`dispatch`](crate::app::dispatch), feeding the resulting
//! events back into the handler. This mirrors the boundary between an
//! interactive page and its remote API.

use crate::domain::{NewTask, TaskPatch};

/// Store operations requested by the event handler.
///
/// Each variant maps one-to-one onto a [`Store`](crate::store::Store) method.
/// The handler never calls the store directly; it stays pure and emits these
/// instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Loads the full contact list.
    FetchContacts,

    /// Loads the full task list.
    FetchTasks,

    /// Loads the tasks owned by one contact.
    ///
    /// Emitted when a contact is selected, refreshing its task panel.
    FetchContactTasks {
        /// Id of the selected contact.
        contact_id: String,
    },

    /// Creates a task from the submitted form.
    CreateTask(NewTask),

    /// Applies a partial update to a task.
    ///
    /// Covers both completion toggles and form edits.
    UpdateTask {
        /// Id of the task to update.
        id: String,
        /// Fields to overwrite; `None` fields are left unchanged.
        patch: TaskPatch,
    },

    /// Permanently deletes a task.
    DeleteTask {
        /// Id of the task to delete.
        id: String,
    },
}
