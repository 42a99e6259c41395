//! Store abstraction for the mock API surface.
//!
//! This module defines the [`Store`] trait the app layer's dispatcher works
//! against. The trait covers exactly the operations the orchestration layer
//! uses, not a generic ORM; each method corresponds to one mock API call.
//!
//! Read operations take `&mut self` because every call, reads included, goes
//! through the fault policy and advances its RNG.

use crate::domain::error::Result;
use crate::domain::{Contact, NewTask, Task, TaskPatch};

/// The mock API surface: contact reads and task CRUD.
///
/// Implemented by [`MemoryStore`](crate::store::MemoryStore). Every operation
/// may fail with an injected transient error before its own validation or
/// lookup runs.
pub trait Store: Send {
    /// Returns a copy of all contacts, unfiltered and unsorted.
    ///
    /// # Errors
    ///
    /// Returns an error only when a transient failure is injected.
    fn get_contacts(&mut self) -> Result<Vec<Contact>>;

    /// Returns the contact with the given id.
    ///
    /// # Errors
    ///
    /// Returns `Contact not found` when the id does not resolve, or the
    /// injected transient error. The transient check runs first, so either
    /// outcome is possible for an unknown id.
    fn get_contact(&mut self, id: &str) -> Result<Contact>;

    /// Returns a copy of all tasks.
    ///
    /// # Errors
    ///
    /// Returns an error only when a transient failure is injected.
    fn get_tasks(&mut self) -> Result<Vec<Task>>;

    /// Returns all tasks owned by the given contact id.
    ///
    /// An unknown contact id yields an empty vec, never an error; orphaned
    /// tasks are reachable the same way.
    ///
    /// # Errors
    ///
    /// Returns an error only when a transient failure is injected.
    fn get_contact_tasks(&mut self, contact_id: &str) -> Result<Vec<Task>>;

    /// Validates and appends a new task, returning the stored record.
    ///
    /// # Errors
    ///
    /// Returns the injected transient error, or a validation error for a
    /// missing contact id, a missing/whitespace title, or an over-long title.
    fn create_task(&mut self, input: NewTask) -> Result<Task>;

    /// Applies a partial update to a task, returning the updated record.
    ///
    /// `updated_at` is refreshed even when the patch changes nothing.
    ///
    /// # Errors
    ///
    /// Returns the injected transient error, `Invalid task ID` for an empty
    /// id, `Task not found` for an unresolved id, or a validation error for an
    /// empty or over-long supplied title.
    fn update_task(&mut self, id: &str, patch: TaskPatch) -> Result<Task>;

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns the injected transient error, `Invalid task ID` for an empty
    /// id, or `Task not found` for an unresolved id (including an id deleted
    /// by an earlier call).
    fn delete_task(&mut self, id: &str) -> Result<()>;
}
