//! Error types for the employee database workflow.

use seed_core::ConnectionError;
use thiserror::Error;

/// Errors that can occur while seeding or querying the employee database.
///
/// Connection and schema failures are fatal to a run. Load failures mean the
/// whole transaction was rolled back. Query failures are non-fatal: callers
/// log them and continue with the remaining reports.
#[derive(Error, Debug)]
pub enum EmployeeDbError {
    /// Connection retries exhausted.
    #[error("connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// DDL statement failed; the sequence was aborted.
    #[error("schema error: {0}")]
    Schema(#[source] tokio_postgres::Error),

    /// DML failed mid-batch; the transaction was rolled back.
    #[error("load error at record {index}: {source}")]
    Load {
        /// Position of the first record in the failing batch.
        index: usize,
        #[source]
        source: tokio_postgres::Error,
    },

    /// Read query failed (non-fatal).
    #[error("query error: {0}")]
    Query(#[source] tokio_postgres::Error),
}
