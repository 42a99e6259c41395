//! Contactdesk: the headless core of a contact-and-task management client.
//!
//! Contactdesk provides:
//! - A searchable, sortable, paginated contact list derived by pure functions
//! - Per-contact task CRUD with trimming/length validation
//! - An in-memory mock API simulating network latency and a random failure rate
//! - A page/state orchestration layer producing renderable view models
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host (renderer / input collector, not included)    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and action dispatch               │
//! │  - Search debouncing                                │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Store Layer   │   │ Domain Layer  │
//! │ (ui/)         │   │ (store/)      │   │ (domain/)     │
//! │ - View models │   │ - Mock CRUD   │   │ - Entities    │
//! │ - Formatting  │   │ - Fault inject│   │ - Query/derive│
//! │ - Highlights  │   │ - Seed data   │   │ - Errors      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber setup                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Data Flow
//!
//! 1. The host feeds an [`app::Event`] to [`app::handle_event`], which mutates
//!    [`app::AppState`] and returns [`app::Action`]s.
//! 2. The host executes each action via [`app::dispatch`] against the store,
//!    which sleeps for the operation's simulated latency and may inject a
//!    transient failure before validating anything.
//! 3. The resulting event is fed back into the handler, folding the outcome
//!    into state.
//! 4. [`app::AppState::compute_viewmodel`] turns a state snapshot into a
//!    [`ui::UiViewModel`] for rendering.
//!
//! # Example
//!
//! ```
//! use contactdesk::{initialize, Config};
//! use contactdesk::app::{dispatch, handle_event, Event};
//!
//! let config = Config {
//!     contact_count: 100,
//!     rng_seed: Some(7),
//!     failure_rate: 0.0,
//!     simulate_latency: false,
//!     ..Config::default()
//! };
//! let (mut state, mut store) = initialize(&config).unwrap();
//!
//! for action in handle_event(&mut state, Event::Refresh) {
//!     let event = dispatch(&mut store, action);
//!     handle_event(&mut state, event);
//! }
//!
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.contacts.len(), 10); // one page
//! ```
//!
//! # Failure Model
//!
//! Every store operation independently fails with the configured probability,
//! before validation or lookup, surfacing `Failed to <action>. Please try
//! again.` The store never retries; the state machine surfaces the message and
//! leaves retrying to the user. See [`store::FaultPolicy`].

pub mod app;
pub mod domain;
pub mod observability;
pub mod store;
pub mod ui;

pub use app::{dispatch, handle_event, Action, AppState, Event};
pub use domain::{Contact, ContactdeskError, NewTask, Result, Task, TaskPatch};
pub use store::{FaultPolicy, MemoryStore, Store};
pub use ui::UiViewModel;

use std::collections::BTreeMap;
use std::time::Duration;

use domain::DEFAULT_PAGE_SIZE;
use store::DEFAULT_FAILURE_RATE;

/// Default quiet window for search debouncing, in milliseconds.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Default number of seeded contacts.
pub const DEFAULT_CONTACT_COUNT: usize = 10_000;

/// Crate configuration.
///
/// All values have working defaults; hosts typically override only a few.
///
/// # Example
///
/// ```
/// use contactdesk::Config;
///
/// let config = Config {
///     failure_rate: 0.0,
///     simulate_latency: false,
///     ..Config::default()
/// };
/// assert_eq!(config.page_size, 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Contacts per page. Default: 10.
    pub page_size: usize,

    /// Search debounce quiet window in milliseconds. Default: 300.
    pub search_debounce_ms: u64,

    /// Per-operation probability of an injected transient failure, in
    /// `0.0..=1.0`. Default: 0.10.
    pub failure_rate: f64,

    /// Whether store operations sleep for their nominal latency. Default:
    /// `true`; tests turn this off.
    pub simulate_latency: bool,

    /// Number of synthetic contacts to seed. Default: 10,000.
    pub contact_count: usize,

    /// Fixed RNG seed for seed data and failure injection. `None` seeds from
    /// the OS, `Some` makes both fully reproducible.
    pub rng_seed: Option<u64>,

    /// Tracing level for [`observability::init_tracing`]. Default: `None`
    /// (host decides whether to initialize tracing at all).
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            failure_rate: DEFAULT_FAILURE_RATE,
            simulate_latency: true,
            contact_count: DEFAULT_CONTACT_COUNT,
            rng_seed: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map, falling back to defaults for
    /// missing or malformed values.
    ///
    /// Recognized keys: `page_size`, `search_debounce_ms`, `failure_rate`,
    /// `simulate_latency`, `contact_count`, `rng_seed`, `trace_level`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use contactdesk::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "25".to_string());
    /// map.insert("failure_rate".to_string(), "not-a-number".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size, 25);
    /// assert_eq!(config.failure_rate, 0.1); // fell back to default
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        Self {
            page_size: map
                .get("page_size")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.page_size),
            search_debounce_ms: map
                .get("search_debounce_ms")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.search_debounce_ms),
            failure_rate: map
                .get("failure_rate")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.failure_rate),
            simulate_latency: map
                .get("simulate_latency")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.simulate_latency),
            contact_count: map
                .get("contact_count")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.contact_count),
            rng_seed: map.get("rng_seed").and_then(|s| s.parse().ok()),
            trace_level: map.get("trace_level").cloned(),
        }
    }
}

/// Builds the seeded store and initial application state from configuration.
///
/// Initializes tracing when `trace_level` is set, constructs the fault policy,
/// seeds the store, and returns the pair ready for event processing. The
/// expected first event is [`Event::Refresh`].
///
/// # Errors
///
/// Returns [`ContactdeskError::Config`] when `failure_rate` is outside
/// `0.0..=1.0`.
pub fn initialize(config: &Config) -> Result<(AppState, MemoryStore)> {
    if let Some(level) = config.trace_level.as_deref() {
        observability::init_tracing(Some(level));
    }

    tracing::debug!(
        contact_count = config.contact_count,
        failure_rate = config.failure_rate,
        "initializing contactdesk"
    );

    let policy = match config.rng_seed {
        Some(seed) => FaultPolicy::seeded(config.failure_rate, seed)?,
        None => FaultPolicy::new(config.failure_rate)?,
    };
    let policy = if config.simulate_latency {
        policy
    } else {
        policy.without_latency()
    };

    let seed = config.rng_seed.unwrap_or_else(rand::random);
    let store = MemoryStore::with_seed(config.contact_count, seed, policy);
    let state = AppState::new(
        config.page_size,
        Duration::from_millis(config.search_debounce_ms),
    );

    Ok((state, store))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_map_parses_and_falls_back() {
        let mut map = BTreeMap::new();
        map.insert("contact_count".to_string(), "42".to_string());
        map.insert("simulate_latency".to_string(), "false".to_string());
        map.insert("page_size".to_string(), "banana".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.contact_count, 42);
        assert!(!config.simulate_latency);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn initialize_rejects_invalid_failure_rate() {
        let config = Config {
            failure_rate: 2.0,
            ..Config::default()
        };
        assert!(matches!(
            initialize(&config),
            Err(ContactdeskError::Config(_))
        ));
    }

    #[test]
    fn initialize_seeds_the_requested_contact_count() {
        let config = Config {
            contact_count: 25,
            rng_seed: Some(3),
            failure_rate: 0.0,
            simulate_latency: false,
            ..Config::default()
        };
        let (state, mut store) = initialize(&config).unwrap();
        assert_eq!(state.current_page, 1);
        assert_eq!(store.get_contacts().unwrap().len(), 25);
    }
}
