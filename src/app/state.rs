//! Application state container and view model computation.
//!
//! [`AppState`] is the single source of truth for all transient UI state: the
//! loaded collections, search/sort/pagination inputs, the selected contact, and
//! the task form. It is mutated exclusively by the event handler and read
//! through derived views.
//!
//! Derived state — the filtered, sorted, paginated contact page and the
//! selected contact's task list — is recomputed from scratch on demand rather
//! than cached; with a linear scan over an in-memory collection that is the
//! simplest thing that is fast enough.

use std::time::{Duration, Instant};

use crate::app::debounce::Debouncer;
use crate::domain::{
    derive_page, Contact, ContactPage, ContactQuery, SortDirection, SortField, Task,
};
use crate::ui::helpers::{format_date, highlight_ranges};
use crate::ui::viewmodel::{
    ContactDetail, ContactItem, HeaderInfo, PagerInfo, TaskFormView, TaskItem, UiViewModel,
};

/// Draft state of the create/edit task form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    /// `Some` when editing an existing task, `None` when creating a new one.
    pub editing_task_id: Option<String>,
    /// Raw title draft; trimmed and validated on submit.
    pub title: String,
    /// Raw description draft.
    pub description: String,
    /// `true` while a submit action is in flight.
    pub submitting: bool,
}

/// Central application state container.
///
/// Holds loaded data, view inputs, selection, and form state. The event
/// handler mutates it; [`AppState::compute_viewmodel`] turns a snapshot into a
/// renderable structure.
#[derive(Debug)]
pub struct AppState {
    /// Master contact list as last loaded from the store.
    pub contacts: Vec<Contact>,

    /// Master task list as last loaded/mutated through result events.
    pub tasks: Vec<Task>,

    /// `true` from a refresh request until contacts arrive or fail.
    pub loading: bool,

    /// Latest surfaced error message. Cleared by the next successful
    /// operation; the user retries manually, nothing retries automatically.
    pub error: Option<String>,

    /// Raw search input, updated on every keystroke.
    pub search_term: String,

    /// Committed search term used for filtering, updated only when the
    /// debounce window elapses.
    pub debounced_search: String,

    pub sort_by: SortField,
    pub sort_direction: SortDirection,

    /// Requested 1-based page; clamped during derivation.
    pub current_page: usize,
    pub page_size: usize,

    /// Id of the selected contact, if any.
    pub selected_contact: Option<String>,

    /// Task form state, present while the form is open.
    pub form: Option<TaskForm>,

    debouncer: Debouncer<String>,
}

impl AppState {
    /// Creates an initial state with empty collections.
    ///
    /// `loading` starts `true`: the expected first event is a refresh whose
    /// results flip it off.
    #[must_use]
    pub fn new(page_size: usize, debounce_window: Duration) -> Self {
        Self {
            contacts: Vec::new(),
            tasks: Vec::new(),
            loading: true,
            error: None,
            search_term: String::new(),
            debounced_search: String::new(),
            sort_by: SortField::Name,
            sort_direction: SortDirection::Asc,
            current_page: 1,
            page_size: page_size.max(1),
            selected_contact: None,
            form: None,
            debouncer: Debouncer::new(debounce_window),
        }
    }

    /// Records a search keystroke and restarts the debounce window.
    pub fn record_search_input(&mut self, term: String, now: Instant) {
        self.search_term.clone_from(&term);
        self.debouncer.submit_at(term, now);
    }

    /// Commits the pending search term if its debounce window has elapsed.
    ///
    /// A committed term resets pagination to the first page. Returns `true`
    /// when a commit happened.
    pub fn flush_search_at(&mut self, now: Instant) -> bool {
        if let Some(term) = self.debouncer.poll_at(now) {
            tracing::debug!(term_len = term.len(), "search term committed");
            self.debounced_search = term;
            self.current_page = 1;
            true
        } else {
            false
        }
    }

    /// Current query descriptor assembled from view inputs.
    #[must_use]
    pub fn query(&self) -> ContactQuery {
        ContactQuery {
            search: self.debounced_search.clone(),
            sort_by: self.sort_by,
            direction: self.sort_direction,
            page: self.current_page,
            page_size: self.page_size,
        }
    }

    /// Derives the visible contact page: filter, sort, paginate.
    #[must_use]
    pub fn visible_page(&self) -> ContactPage {
        derive_page(&self.contacts, &self.query())
    }

    /// Returns the selected contact record, if the selection resolves.
    #[must_use]
    pub fn selected_contact(&self) -> Option<&Contact> {
        let id = self.selected_contact.as_deref()?;
        self.contacts.iter().find(|contact| contact.id == id)
    }

    /// Returns the selected contact's tasks in load order.
    #[must_use]
    pub fn contact_tasks(&self) -> Vec<&Task> {
        let Some(id) = self.selected_contact.as_deref() else {
            return Vec::new();
        };
        self.tasks
            .iter()
            .filter(|task| task.contact_id == id)
            .collect()
    }

    /// Looks up a task by id in the loaded task list.
    #[must_use]
    pub fn task_by_id(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Replaces the cached tasks of one contact with a freshly loaded set.
    pub fn replace_contact_tasks(&mut self, contact_id: &str, tasks: Vec<Task>) {
        self.tasks.retain(|task| task.contact_id != contact_id);
        self.tasks.extend(tasks);
    }

    /// Computes the renderable view model from the current state.
    ///
    /// Pre-computes formatted dates, search-match highlight ranges for the
    /// committed term, per-contact task counts, and the detail panel for the
    /// selected contact.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UiViewModel {
        let page = self.visible_page();
        let term = self.debounced_search.trim();

        let contacts: Vec<ContactItem> = page
            .items
            .iter()
            .map(|contact| self.compute_contact_item(contact, term))
            .collect();

        let empty_state = if self.loading || !contacts.is_empty() {
            None
        } else if term.is_empty() {
            Some("No contacts found".to_string())
        } else {
            Some(format!("No contacts match \"{term}\""))
        };

        UiViewModel {
            header: HeaderInfo {
                title: format!(
                    " Contacts ({} of {}) ",
                    page.total_matches,
                    self.contacts.len()
                ),
            },
            contacts,
            pager: PagerInfo {
                page: page.page,
                total_pages: page.total_pages,
                total_matches: page.total_matches,
            },
            loading: self.loading,
            error: self.error.clone(),
            empty_state,
            detail: self.compute_detail(),
        }
    }

    fn compute_contact_item(&self, contact: &Contact, term: &str) -> ContactItem {
        ContactItem {
            id: contact.id.clone(),
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            company: contact.company.clone(),
            created_label: format_date(contact.created_at),
            name_highlights: highlight_ranges(&contact.name, term),
            email_highlights: highlight_ranges(&contact.email, term),
            company_highlights: contact
                .company
                .as_deref()
                .map(|company| highlight_ranges(company, term))
                .unwrap_or_default(),
            task_count: self
                .tasks
                .iter()
                .filter(|task| task.contact_id == contact.id)
                .count(),
            is_selected: self.selected_contact.as_deref() == Some(contact.id.as_str()),
        }
    }

    fn compute_detail(&self) -> Option<ContactDetail> {
        let contact = self.selected_contact()?;
        let tasks: Vec<TaskItem> = self
            .contact_tasks()
            .into_iter()
            .map(|task| TaskItem {
                id: task.id.clone(),
                title: task.title.clone(),
                description: task.description.clone(),
                completed: task.completed,
                created_label: format_date(task.created_at),
                updated_label: format_date(task.updated_at),
            })
            .collect();

        let completed_count = tasks.iter().filter(|task| task.completed).count();
        let pending_count = tasks.len() - completed_count;

        Some(ContactDetail {
            contact_id: contact.id.clone(),
            name: contact.name.clone(),
            tasks,
            completed_count,
            pending_count,
            form: self.form.as_ref().map(|form| TaskFormView {
                editing_task_id: form.editing_task_id.clone(),
                title: form.title.clone(),
                description: form.description.clone(),
                submitting: form.submitting,
            }),
        })
    }
}
