//! Shared building blocks for the sample-db seeders.
//!
//! This crate provides the pieces both domain seeders (employee/PostgreSQL
//! and shop/MySQL) have in common:
//!
//! - [`RetryPolicy`] and [`retry`] - bounded connection retry with a
//!   configurable backoff strategy (fixed-interval by default)
//! - [`ConnectionError`] - the terminal error surfaced when retries are
//!   exhausted
//! - [`SchemaMode`] - whether schema initialization is idempotent or a
//!   destructive reset
//! - [`CommonSeedArgs`] - CLI arguments shared by all seed commands

pub mod args;
pub mod retry;
pub mod schema;

pub use args::CommonSeedArgs;
pub use retry::{retry, Backoff, ConnectionError, RetryPolicy};
pub use schema::SchemaMode;
