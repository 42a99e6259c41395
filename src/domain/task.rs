//! Task domain model and mutation inputs.
//!
//! A task is a to-do item owned by exactly one contact. The `contact_id` foreign
//! key is intentionally unenforced: the store tolerates orphaned references and
//! lookups by contact id simply return an empty set when nothing matches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum task title length in characters, measured after trimming.
pub const MAX_TITLE_LEN: usize = 200;

/// A to-do item associated with a contact.
///
/// # Fields
///
/// - `id`: Unique string identifier
/// - `contact_id`: Owning contact id (not relationally enforced)
/// - `title`: Non-empty, trimmed, at most [`MAX_TITLE_LEN`] characters
/// - `description`: Optional free text; empty-after-trim is stored as `None`
/// - `completed`: Completion flag
/// - `created_at`: Set once at creation
/// - `updated_at`: Refreshed on every mutation, field changes or not
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub contact_id: String,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a task.
///
/// Mirrors [`Task`] minus the store-assigned fields (`id`, `created_at`,
/// `updated_at`). The store trims and validates `title` and `description`; the
/// values here are the raw caller-supplied strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub contact_id: String,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Partial update for a task.
///
/// `None` means "field not supplied, leave unchanged". A supplied description
/// that trims to the empty string clears the stored description to `None`.
///
/// # Examples
///
/// ```
/// use contactdesk::domain::TaskPatch;
///
/// let patch = TaskPatch::default().with_completed(true);
/// assert_eq!(patch.completed, Some(true));
/// assert!(patch.title.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Sets the title field of the patch.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description field of the patch.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the completed field of the patch.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Returns `true` if no field is supplied.
    ///
    /// An empty patch is still a valid update: it refreshes `updated_at`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

/// Normalizes a raw description: trims and collapses empty-after-trim to
/// `None`.
#[must_use]
pub fn normalize_description(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_description_trims() {
        assert_eq!(
            normalize_description("  notes  "),
            Some("notes".to_string())
        );
    }

    #[test]
    fn normalize_description_collapses_whitespace_to_none() {
        assert_eq!(normalize_description(""), None);
        assert_eq!(normalize_description("   "), None);
    }

    #[test]
    fn empty_patch_is_empty() {
        assert!(TaskPatch::default().is_empty());
        assert!(!TaskPatch::default().with_completed(false).is_empty());
    }
}
