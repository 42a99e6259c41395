//! Renderable view model types.
//!
//! View models are plain data computed from [`AppState`](crate::app::AppState)
//! snapshots: props in, no callbacks, no behavior. They pre-compute everything a
//! renderer needs — formatted dates, highlight ranges, tallies — keeping the
//! presentation layer a pure function of this structure. Rendering itself
//! (markup, styling) is out of scope for this crate.

use serde::Serialize;

/// Complete renderable representation of the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiViewModel {
    pub header: HeaderInfo,
    /// Contacts visible on the current page, in display order.
    pub contacts: Vec<ContactItem>,
    pub pager: PagerInfo,
    pub loading: bool,
    /// Error message to surface, if any. The user retries manually.
    pub error: Option<String>,
    /// Message shown instead of the list when nothing is visible.
    pub empty_state: Option<String>,
    /// Detail panel for the selected contact, if one is selected.
    pub detail: Option<ContactDetail>,
}

/// Header title with match counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderInfo {
    pub title: String,
}

/// One contact card on the list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactItem {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    /// Short formatted creation date, e.g. `"Jan 5, 2024"`.
    pub created_label: String,
    /// Byte ranges of search matches in `name`.
    pub name_highlights: Vec<(usize, usize)>,
    /// Byte ranges of search matches in `email`.
    pub email_highlights: Vec<(usize, usize)>,
    /// Byte ranges of search matches in `company`, empty when absent.
    pub company_highlights: Vec<(usize, usize)>,
    /// Number of tasks owned by this contact.
    pub task_count: usize,
    pub is_selected: bool,
}

/// Pagination controls state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerInfo {
    /// Effective (clamped) 1-based page.
    pub page: usize,
    pub total_pages: usize,
    /// Contacts matching the filter across all pages.
    pub total_matches: usize,
}

/// Detail panel for the selected contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactDetail {
    pub contact_id: String,
    pub name: String,
    pub tasks: Vec<TaskItem>,
    pub completed_count: usize,
    pub pending_count: usize,
    /// Task form, present while open.
    pub form: Option<TaskFormView>,
}

/// One task card in the detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_label: String,
    pub updated_label: String,
}

/// The create/edit task form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskFormView {
    /// `Some` when editing an existing task, `None` when creating.
    pub editing_task_id: Option<String>,
    pub title: String,
    pub description: String,
    /// `true` while a submit action is in flight.
    pub submitting: bool,
}
