//! sample-db library.
//!
//! Seeds two sample relational databases and runs read-only reports against
//! them:
//!
//! - **employee** (PostgreSQL): generated synthetic records across four
//!   1:1-related tables
//! - **shop** (MySQL): a fixed literal e-commerce dataset
//!
//! Both follow the same workflow: connect with bounded fixed-interval retry,
//! initialize the schema, load everything inside one transaction, report.
//! The domain logic lives in the workspace crates (`seed-core`,
//! `employee-generator`, `employee-postgres`, `shop-mysql`); this crate only
//! holds the CLI surface.
//!
//! # Usage
//!
//! ```bash
//! # Seed 100 employees into PostgreSQL (idempotent DDL)
//! sample-db employee seed --count 100 --seed 42
//!
//! # List active employees and department statistics
//! sample-db employee report --limit 10
//!
//! # Reset and seed the MySQL sample shop
//! sample-db shop seed
//!
//! # Inspect order 1's line items (price-at-purchase vs. stored total)
//! sample-db shop report --order-id 1
//! ```

pub mod cli;
