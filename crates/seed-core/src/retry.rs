//! Bounded connection retry with configurable backoff.

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Error surfaced when all connection attempts have been exhausted.
#[derive(Error, Debug)]
#[error("could not connect to {target} after {attempts} attempts: {last_error}")]
pub struct ConnectionError {
    /// What we were connecting to (for the error message).
    pub target: String,
    /// Number of attempts made before giving up.
    pub attempts: u32,
    /// Message of the last underlying failure.
    pub last_error: String,
}

/// Backoff strategy between connection attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// Wait the same interval between every attempt.
    Fixed,
    /// Double-style growth: interval * factor^(attempt-1), capped.
    Exponential {
        factor: u32,
        max_interval: Duration,
    },
}

/// Bounded retry policy for establishing database connections.
///
/// The default reproduces the observed seeding behavior: 30 attempts with a
/// fixed 2-second wait between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of connection attempts (at least 1).
    pub max_attempts: u32,
    /// Base wait between attempts.
    pub interval: Duration,
    /// How the wait evolves across attempts.
    pub backoff: Backoff,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(30, Duration::from_secs(2))
    }
}

impl RetryPolicy {
    /// Fixed-interval policy.
    pub fn fixed(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            interval,
            backoff: Backoff::Fixed,
        }
    }

    /// Exponential policy starting at `interval`, multiplied by `factor`
    /// after each failure and capped at `max_interval`.
    pub fn exponential(max_attempts: u32, interval: Duration, max_interval: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            interval,
            backoff: Backoff::Exponential {
                factor: 2,
                max_interval,
            },
        }
    }

    /// Wait applied after the given 1-based attempt fails.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        match self.backoff {
            Backoff::Fixed => self.interval,
            Backoff::Exponential {
                factor,
                max_interval,
            } => {
                // Cap the exponent so the multiplication cannot overflow.
                let exp = attempt.saturating_sub(1).min(30);
                self.interval
                    .saturating_mul(factor.saturating_pow(exp))
                    .min(max_interval)
            }
        }
    }
}

/// Drive a fallible async connect operation under the given policy.
///
/// Makes exactly `policy.max_attempts` tries at most, sleeping between
/// attempts only (so N attempts incur N-1 waits). Each failure logs a
/// human-readable progress line. On exhaustion the last underlying error is
/// carried inside [`ConnectionError`].
pub async fn retry<T, E, F, Fut>(
    policy: &RetryPolicy,
    target: &str,
    mut op: F,
) -> Result<T, ConnectionError>
where
    E: std::fmt::Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        match op().await {
            Ok(value) => {
                info!("Connected to {target} successfully");
                return Ok(value);
            }
            Err(e) => {
                warn!(
                    "Connection attempt {attempt}/{} to {target} failed: {e}",
                    policy.max_attempts
                );
                if attempt >= policy.max_attempts {
                    info!("Max retries reached, giving up on {target}");
                    return Err(ConnectionError {
                        target: target.to_string(),
                        attempts: attempt,
                        last_error: e.to_string(),
                    });
                }
                let delay = policy.delay_for_attempt(attempt);
                info!("Retrying in {delay:?}...");
                tokio::time::sleep(delay).await;
            }
        }
    }
}
