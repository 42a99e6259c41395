//! View model layer.
//!
//! Immutable renderable representations computed from application state, plus
//! the formatting and highlight helpers they are built from. No rendering
//! happens here; a host renders these however it likes.
//!
//! # Modules
//!
//! - [`viewmodel`]: renderable data structures
//! - [`helpers`]: date formatting and search-match highlighting

pub mod helpers;
pub mod viewmodel;

pub use helpers::{format_date, highlight_ranges};
pub use viewmodel::{
    ContactDetail, ContactItem, HeaderInfo, PagerInfo, TaskFormView, TaskItem, UiViewModel,
};
