//! Synthetic employee record generation for sample-db.
//!
//! This crate is pure: it has no database dependency and produces
//! deterministic records from a seeded RNG. The generator honors every
//! constraint the employee schema declares:
//!
//! - strings clipped to their column widths
//! - categorical fields drawn only from the schema's CHECK enumerations
//! - positions drawn from the chosen department's position list
//! - salary uniform in 40,000.00..=200,000.00, performance rating in
//!   2.50..=5.00, both with 2 decimal places
//! - promotion dates between hire date and today, review dates in the
//!   coming year
//!
//! # Example
//!
//! ```rust
//! use employee_generator::generate;
//!
//! let records = generate(100, 42);
//! assert_eq!(records.len(), 100);
//! // Same seed, same data.
//! assert_eq!(records[0].person, generate(1, 42)[0].person);
//! ```

pub mod generator;
pub mod pools;
pub mod record;

pub use generator::{generate, EmployeeGenerator};
pub use record::{Contact, Details, EmployeeRecord, Employment, Person};
