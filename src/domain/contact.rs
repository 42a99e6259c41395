//! Contact domain model.
//!
//! Contacts are the anchor records of the system: generated once when the store
//! is seeded and immutable afterwards (no contact-edit operation exists). Each
//! contact owns a set of tasks keyed by `contact_id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A person record with identity, contact details, and optional company
/// affiliation.
///
/// # Fields
///
/// - `id`: Unique string identifier, e.g. `"contact-42"`
/// - `name`: Display name, "First Last"
/// - `email`: Unique synthetic email address
/// - `phone`: Formatted phone number
/// - `company`: Optional company affiliation
/// - `created_at`: Creation timestamp; sortable, never updated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Returns `true` if the lowercased search needle is a substring of the
    /// contact's name, email, or company.
    ///
    /// An absent company never matches. The needle must already be lowercased
    /// and trimmed; this keeps the per-contact check allocation-light when
    /// filtering large lists.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use contactdesk::domain::Contact;
    ///
    /// let contact = Contact {
    ///     id: "contact-1".into(),
    ///     name: "Grace Miller".into(),
    ///     email: "grace.miller@email.com".into(),
    ///     phone: "+1-200-100-1000".into(),
    ///     company: Some("Tech Corp".into()),
    ///     created_at: Utc::now(),
    /// };
    /// assert!(contact.matches("grace"));
    /// assert!(contact.matches("tech corp"));
    /// assert!(!contact.matches("zzz"));
    /// ```
    #[must_use]
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.email.to_lowercase().contains(needle_lower)
            || self
                .company
                .as_ref()
                .is_some_and(|company| company.to_lowercase().contains(needle_lower))
    }
}
