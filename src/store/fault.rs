//! Latency and failure injection for the mock API.
//!
//! Every store operation passes through a single [`FaultPolicy`] before any
//! validation or lookup runs. The policy sleeps for the operation's nominal
//! latency, then rolls for an injected transient failure. Because the roll
//! happens first, a call with an invalid id can nondeterministically report
//! either the generic failure or "not found"; that ordering is part of the
//! API contract.
//!
//! The RNG is injectable: a seeded policy replays the exact same
//! failure sequence, and [`FaultPolicy::disabled`] turns the whole mechanism
//! off for deterministic tests.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::error::{ContactdeskError, Result};

/// Default probability of an injected failure per operation.
pub const DEFAULT_FAILURE_RATE: f64 = 0.1;

/// Cross-cutting fault-injection policy applied to every store operation.
///
/// Holds the failure probability, the latency toggle, and the RNG that drives
/// failure rolls. Constructed once per store and threaded through by `&mut`
/// reference.
///
/// # Examples
///
/// ```
/// use contactdesk::store::FaultPolicy;
/// use std::time::Duration;
///
/// // Always fails, deterministically, with no sleeping.
/// let mut policy = FaultPolicy::seeded(1.0, 42).unwrap().without_latency();
/// assert!(policy.gate("fetch contacts", Duration::from_millis(300)).is_err());
/// ```
#[derive(Debug)]
pub struct FaultPolicy {
    failure_rate: f64,
    simulate_latency: bool,
    rng: StdRng,
}

impl FaultPolicy {
    /// Creates a policy with the given failure rate, OS-seeded RNG, and latency
    /// simulation enabled.
    ///
    /// # Errors
    ///
    /// Returns [`ContactdeskError::Config`] if `failure_rate` is outside
    /// `0.0..=1.0`.
    pub fn new(failure_rate: f64) -> Result<Self> {
        validate_rate(failure_rate)?;
        Ok(Self {
            failure_rate,
            simulate_latency: true,
            rng: StdRng::from_os_rng(),
        })
    }

    /// Creates a policy with a fixed RNG seed for reproducible failure
    /// sequences.
    ///
    /// # Errors
    ///
    /// Returns [`ContactdeskError::Config`] if `failure_rate` is outside
    /// `0.0..=1.0`.
    pub fn seeded(failure_rate: f64, seed: u64) -> Result<Self> {
        validate_rate(failure_rate)?;
        Ok(Self {
            failure_rate,
            simulate_latency: true,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Creates a policy that never fails and never sleeps.
    ///
    /// The standard configuration for tests that exercise store semantics
    /// rather than fault handling.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            failure_rate: 0.0,
            simulate_latency: false,
            rng: StdRng::seed_from_u64(0),
        }
    }

    /// Disables latency simulation, keeping the failure rate.
    #[must_use]
    pub const fn without_latency(mut self) -> Self {
        self.simulate_latency = false;
        self
    }

    /// Returns the configured failure probability.
    #[must_use]
    pub const fn failure_rate(&self) -> f64 {
        self.failure_rate
    }

    /// Gate called at the top of every store operation.
    ///
    /// Sleeps for `latency` (when simulation is enabled), then independently
    /// rolls for an injected failure. Runs before any validation or mutation,
    /// so a failed gate never leaves the store partially modified.
    ///
    /// # Errors
    ///
    /// Returns [`ContactdeskError::Transient`] carrying `action` when the roll
    /// comes up under the failure rate.
    pub fn gate(&mut self, action: &'static str, latency: Duration) -> Result<()> {
        if self.simulate_latency && !latency.is_zero() {
            std::thread::sleep(latency);
        }

        if self.failure_rate > 0.0 && self.rng.random::<f64>() < self.failure_rate {
            tracing::debug!(action = action, "injected transient failure");
            return Err(ContactdeskError::Transient { action });
        }

        Ok(())
    }
}

fn validate_rate(failure_rate: f64) -> Result<()> {
    if (0.0..=1.0).contains(&failure_rate) {
        Ok(())
    } else {
        Err(ContactdeskError::Config(format!(
            "failure rate must be 0.0-1.0, got {failure_rate}"
        )))
    }
}
