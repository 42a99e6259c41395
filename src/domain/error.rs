//! Error types for the contactdesk core.
//!
//! This module defines the centralized error type [`ContactdeskError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All errors
//! are implemented using the `thiserror` crate for automatic `Error` trait
//! implementation.
//!
//! The `Display` messages are part of the mock API contract: hosts surface them
//! verbatim and may distinguish failures by message text. The enum variants
//! additionally give Rust callers structured discrimination between transient,
//! not-found, and validation failures.

use thiserror::Error;

/// The main error type for contactdesk operations.
///
/// This enum consolidates all error conditions the mock API layer can produce:
/// injected transient failures, entity lookups that miss, and task input
/// validation. None of these are fatal; the store remains valid after any of
/// them.
///
/// # Examples
///
/// ```
/// use contactdesk::domain::ContactdeskError;
///
/// let err = ContactdeskError::Transient { action: "fetch contacts" };
/// assert_eq!(err.to_string(), "Failed to fetch contacts. Please try again.");
///
/// let err = ContactdeskError::TitleTooLong { max: 200 };
/// assert!(err.to_string().contains("200"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactdeskError {
    /// Randomly injected failure emulating network unreliability.
    ///
    /// Produced by the fault policy before any validation or lookup runs, so it
    /// can mask a would-be "not found" or validation outcome on the same call.
    /// Generic and retry-worthy; the store never retries internally.
    #[error("Failed to {action}. Please try again.")]
    Transient {
        /// Human-readable action phrase, e.g. `"fetch contacts"`.
        action: &'static str,
    },

    /// No contact exists with the requested id.
    #[error("Contact not found")]
    ContactNotFound,

    /// No task exists with the requested id.
    #[error("Task not found")]
    TaskNotFound,

    /// A task mutation was given an empty id.
    #[error("Invalid task ID")]
    InvalidTaskId,

    /// Task creation was attempted without a contact id.
    #[error("Contact ID is required")]
    ContactIdRequired,

    /// Task creation was attempted with a missing or whitespace-only title.
    #[error("Task title is required")]
    TitleRequired,

    /// A task update supplied a title that is empty after trimming.
    #[error("Task title cannot be empty")]
    TitleEmpty,

    /// A task title exceeds the maximum length after trimming.
    #[error("Task title must be {max} characters or less")]
    TitleTooLong {
        /// The enforced maximum, in characters.
        max: usize,
    },

    /// Configuration is invalid or malformed.
    ///
    /// Occurs when a fault policy or crate configuration carries values outside
    /// their valid ranges (e.g. a failure rate not in `0.0..=1.0`).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ContactdeskError {
    /// Returns `true` for the injected transient failure.
    ///
    /// Transient failures are the only retry-worthy errors; everything else is
    /// deterministic and will recur on retry.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Transient { .. })
    }
}

/// A specialized `Result` type for contactdesk operations.
///
/// This is a type alias for `std::result::Result<T, ContactdeskError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ContactdeskError>;
