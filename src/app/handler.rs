//! Event processing and state transition logic.
//!
//! [`handle_event`] is the single entry point for everything that happens to
//! the application: user input, debounce ticks, and the result events produced
//! by [`dispatch`](crate::app::dispatch). It mutates [`AppState`] and returns
//! the store actions the host should execute next, keeping the flow
//! unidirectional:
//!
//! ```text
//! input -> Event -> handle_event -> state mutation + Vec<Action>
//!             ^                                          |
//!             └───────────── dispatch(store) ────────────┘
//! ```
//!
//! Form submission pre-validates client-side: an empty or over-long title
//! sets the error locally and emits no action; the store re-validates on its
//! side regardless.

use std::time::Instant;

use crate::app::actions::Action;
use crate::app::state::{AppState, TaskForm};
use crate::domain::{normalize_description, Contact, NewTask, SortDirection, SortField, Task,
    TaskPatch, MAX_TITLE_LEN};

/// Events driving the application: user intents and store results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Requests a full reload of contacts and tasks.
    Refresh,

    /// A search keystroke. Filtering only reacts once the debounce window
    /// elapses (see [`Event::Tick`]).
    SearchInput(String),

    /// Clock tick advancing the search debouncer.
    Tick,

    /// A sort button press. Re-selecting the active field toggles the
    /// direction; a new field starts ascending. Either way pagination resets.
    SortBy(SortField),

    /// Jumps to a 1-based page (clamped during derivation).
    GoToPage(usize),
    /// Moves one page back, stopping at the first.
    PrevPage,
    /// Moves one page forward, stopping at the last.
    NextPage,

    /// Selects a contact, closing any open task form.
    SelectContact(String),
    /// Clears the contact selection.
    ClearSelection,

    /// Opens a blank task form for the selected contact.
    OpenTaskForm,
    /// Opens the task form pre-filled from an existing task.
    EditTask(String),
    /// Closes the task form, discarding drafts.
    CloseTaskForm,
    /// Updates the title draft.
    TitleInput(String),
    /// Updates the description draft.
    DescriptionInput(String),
    /// Submits the task form (create or update, depending on the form mode).
    SubmitTaskForm,

    /// Flips a task's completion flag.
    ToggleTask(String),
    /// Requests permanent deletion of a task.
    DeleteTaskRequested(String),

    /// Contacts arrived from the store.
    ContactsLoaded(Vec<Contact>),
    /// The contact fetch failed; the message is surfaced for manual retry.
    ContactsFailed(String),
    /// The full task list arrived from the store.
    TasksLoaded(Vec<Task>),
    /// A task fetch failed. Logged but not surfaced; the stale task list
    /// stays in place.
    TasksFailed(String),
    /// One contact's tasks arrived; replaces that contact's cached tasks.
    ContactTasksLoaded {
        contact_id: String,
        tasks: Vec<Task>,
    },
    /// A task was created; folds into state and closes the form.
    TaskCreated(Task),
    /// A task was updated; replaces the cached record.
    TaskUpdated(Task),
    /// A task was deleted.
    TaskDeleted { id: String },
    /// A task mutation failed; the message is surfaced.
    TaskFailed(String),
}

/// Processes one event: mutates state and returns follow-up store actions.
pub fn handle_event(state: &mut AppState, event: Event) -> Vec<Action> {
    match event {
        Event::Refresh => {
            state.loading = true;
            state.error = None;
            vec![Action::FetchContacts, Action::FetchTasks]
        }

        Event::SearchInput(term) => {
            state.record_search_input(term, Instant::now());
            vec![]
        }

        Event::Tick => {
            state.flush_search_at(Instant::now());
            vec![]
        }

        Event::SortBy(field) => {
            if state.sort_by == field {
                state.sort_direction = state.sort_direction.toggled();
            } else {
                state.sort_by = field;
                state.sort_direction = SortDirection::Asc;
            }
            state.current_page = 1;
            vec![]
        }

        Event::GoToPage(page) => {
            state.current_page = page;
            vec![]
        }

        Event::PrevPage => {
            state.current_page = state.current_page.saturating_sub(1).max(1);
            vec![]
        }

        Event::NextPage => {
            let total_pages = state.visible_page().total_pages;
            state.current_page = (state.current_page + 1).min(total_pages);
            vec![]
        }

        Event::SelectContact(contact_id) => {
            state.selected_contact = Some(contact_id.clone());
            state.form = None;
            vec![Action::FetchContactTasks { contact_id }]
        }

        Event::ClearSelection => {
            state.selected_contact = None;
            state.form = None;
            vec![]
        }

        Event::OpenTaskForm => {
            state.form = Some(TaskForm::default());
            state.error = None;
            vec![]
        }

        Event::EditTask(task_id) => {
            if let Some(task) = state.task_by_id(&task_id) {
                state.form = Some(TaskForm {
                    editing_task_id: Some(task.id.clone()),
                    title: task.title.clone(),
                    description: task.description.clone().unwrap_or_default(),
                    submitting: false,
                });
                state.error = None;
            } else {
                tracing::debug!(task_id = %task_id, "edit requested for unknown task");
            }
            vec![]
        }

        Event::CloseTaskForm => {
            state.form = None;
            state.error = None;
            vec![]
        }

        Event::TitleInput(title) => {
            if let Some(form) = state.form.as_mut() {
                form.title = title;
            }
            vec![]
        }

        Event::DescriptionInput(description) => {
            if let Some(form) = state.form.as_mut() {
                form.description = description;
            }
            vec![]
        }

        Event::SubmitTaskForm => submit_task_form(state),

        Event::ToggleTask(task_id) => match state.task_by_id(&task_id) {
            Some(task) => vec![Action::UpdateTask {
                id: task.id.clone(),
                patch: TaskPatch::default().with_completed(!task.completed),
            }],
            None => {
                tracing::debug!(task_id = %task_id, "toggle requested for unknown task");
                vec![]
            }
        },

        Event::DeleteTaskRequested(id) => vec![Action::DeleteTask { id }],

        Event::ContactsLoaded(contacts) => {
            tracing::debug!(count = contacts.len(), "contacts loaded");
            state.contacts = contacts;
            state.loading = false;
            state.error = None;
            vec![]
        }

        Event::ContactsFailed(message) => {
            state.loading = false;
            state.error = Some(message);
            vec![]
        }

        Event::TasksLoaded(tasks) => {
            tracing::debug!(count = tasks.len(), "tasks loaded");
            state.tasks = tasks;
            vec![]
        }

        Event::TasksFailed(message) => {
            tracing::debug!(error = %message, "task fetch failed, keeping stale list");
            vec![]
        }

        Event::ContactTasksLoaded { contact_id, tasks } => {
            state.replace_contact_tasks(&contact_id, tasks);
            vec![]
        }

        Event::TaskCreated(task) => {
            state.tasks.push(task);
            state.form = None;
            state.error = None;
            vec![]
        }

        Event::TaskUpdated(task) => {
            if let Some(existing) = state.tasks.iter_mut().find(|t| t.id == task.id) {
                *existing = task.clone();
            }
            // Close the form only when this update came from it.
            if state
                .form
                .as_ref()
                .is_some_and(|form| form.editing_task_id.as_deref() == Some(task.id.as_str()))
            {
                state.form = None;
            }
            state.error = None;
            vec![]
        }

        Event::TaskDeleted { id } => {
            state.tasks.retain(|task| task.id != id);
            vec![]
        }

        Event::TaskFailed(message) => {
            state.error = Some(message);
            if let Some(form) = state.form.as_mut() {
                form.submitting = false;
            }
            vec![]
        }
    }
}

/// Pre-validates the form and emits the create or update action.
fn submit_task_form(state: &mut AppState) -> Vec<Action> {
    let Some(form) = state.form.as_ref() else {
        return vec![];
    };

    let trimmed_title = form.title.trim().to_string();
    if trimmed_title.is_empty() {
        state.error = Some("Task title is required".to_string());
        return vec![];
    }
    if trimmed_title.chars().count() > MAX_TITLE_LEN {
        state.error = Some(format!(
            "Task title must be {MAX_TITLE_LEN} characters or less"
        ));
        return vec![];
    }

    let description = normalize_description(&form.description);

    let action = if let Some(task_id) = form.editing_task_id.clone() {
        let mut patch = TaskPatch::default().with_title(trimmed_title);
        patch.description = Some(description.unwrap_or_default());
        Action::UpdateTask { id: task_id, patch }
    } else {
        let Some(contact_id) = state.selected_contact.clone() else {
            state.error = Some("No contact selected".to_string());
            return vec![];
        };
        Action::CreateTask(NewTask {
            contact_id,
            title: trimmed_title,
            description,
            completed: false,
        })
    };

    state.error = None;
    if let Some(form) = state.form.as_mut() {
        form.submitting = true;
    }
    vec![action]
}
