//! MySQL backend for the sample shop database.
//!
//! Implements the shop seeding workflow: connect with bounded retry, reset
//! and recreate the `sample_shop` schema (destructive by default for this
//! domain), load the literal seed dataset inside a single transaction, and
//! run the read-only order reports. Schema layout:
//!
//! ```text
//! users ──< orders ──< order_products >── products
//! ```
//!
//! `order_products.price_at_purchase` is a snapshot taken at order time and
//! intentionally diverges from the live `products.price`.

pub mod args;
pub mod connect;
pub mod data;
pub mod error;
pub mod load;
pub mod report;
pub mod schema;

pub use args::MySqlOpts;
pub use connect::connect;
pub use error::ShopDbError;
pub use load::{load, seed_row_count};
pub use report::{order_lines, order_summaries};
pub use schema::create_schema;
