//! Domain layer for the contactdesk core.
//!
//! This module contains the core domain types and business rules, independent of
//! the store's fault simulation or the app layer's state machine.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`contact`]: Contact record and search matching
//! - [`task`]: Task record, mutation inputs, title/description rules
//! - [`query`]: Sort/filter descriptors and pure view derivation

pub mod contact;
pub mod error;
pub mod query;
pub mod task;

pub use contact::Contact;
pub use error::{ContactdeskError, Result};
pub use query::{
    derive_page, ContactPage, ContactQuery, SortDirection, SortField, DEFAULT_PAGE_SIZE,
};
pub use task::{normalize_description, NewTask, Task, TaskPatch, MAX_TITLE_LEN};
