//! PostgreSQL backend for the employee sample database.
//!
//! Implements the full seeding workflow against PostgreSQL: connect with
//! bounded retry, create the four employee tables (idempotently by default),
//! bulk-load generated records inside a single transaction, and run the
//! read-only reports. Schema layout:
//!
//! ```text
//! employee (root, UUID pk)
//!   ├── contact_info      (1:1, ON DELETE CASCADE)
//!   ├── employment_info   (1:1, ON DELETE CASCADE, manager_id -> employee)
//!   └── employee_details  (1:1, ON DELETE CASCADE)
//! ```

pub mod args;
pub mod connect;
pub mod error;
pub mod load;
pub mod report;
pub mod schema;

pub use args::PostgresOpts;
pub use connect::connect;
pub use error::EmployeeDbError;
pub use load::{load, DEFAULT_BATCH_SIZE};
pub use report::{active_employees, department_statistics};
pub use schema::create_schema;
