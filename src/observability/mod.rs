//! Tracing initialization.
//!
//! Sets up the `tracing-subscriber` pipeline used across the crate. Store
//! operations and state transitions emit debug-level spans and events; hosts
//! opt in by calling [`init_tracing`] once at startup.
//!
//! Level resolution: the `RUST_LOG` environment variable wins, then the
//! explicit `level` argument, then `"info"`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber with an env-filtered fmt layer.
///
/// Idempotent: only the first call takes effect, later calls are silently
/// ignored so embedding hosts and tests can both call it freely.
///
/// # Example
///
/// ```
/// contactdesk::observability::init_tracing(Some("debug"));
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or("info")));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    let _ = subscriber.try_init();
}
