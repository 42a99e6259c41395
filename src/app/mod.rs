//! Application layer coordinating state, events, and actions.
//!
//! Sits between a host (whatever renders the view models and collects input)
//! and the domain/store layers, implementing the unidirectional data flow that
//! powers the interactive UI:
//!
//! ```text
//! User Input -> Events -> Event Handler -> State Mutations -> Actions
//!                  ^                                             |
//!                  └──────────── dispatch(store) ────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: store operations requested by the handler
//! - [`handler`]: event processing and state transitions
//! - [`dispatch`]: action execution against the store
//! - [`state`]: state container and view model computation
//! - [`debounce`]: trailing-edge debounce for search input
//!
//! # Example
//!
//! ```
//! use contactdesk::app::{dispatch, handle_event, AppState, Event};
//! use contactdesk::store::{FaultPolicy, MemoryStore};
//! use std::time::Duration;
//!
//! let mut store = MemoryStore::with_seed(50, 1, FaultPolicy::disabled());
//! let mut state = AppState::new(10, Duration::from_millis(300));
//!
//! for action in handle_event(&mut state, Event::Refresh) {
//!     let event = dispatch(&mut store, action);
//!     handle_event(&mut state, event);
//! }
//! assert_eq!(state.contacts.len(), 50);
//! ```

pub mod actions;
pub mod debounce;
pub mod dispatch;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use debounce::Debouncer;
pub use dispatch::dispatch;
pub use handler::{handle_event, Event};
pub use state::{AppState, TaskForm};
