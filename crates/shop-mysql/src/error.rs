//! Error types for the shop database workflow.

use seed_core::ConnectionError;
use thiserror::Error;

/// Errors that can occur while seeding or querying the shop database.
///
/// Same asymmetry as the employee workflow: connection, schema, and load
/// failures are fatal (load after a full rollback), query failures are
/// logged and tolerated.
#[derive(Error, Debug)]
pub enum ShopDbError {
    /// Connection retries exhausted.
    #[error("connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// DDL statement failed; the sequence was aborted.
    #[error("schema error: {0}")]
    Schema(#[source] mysql_async::Error),

    /// DML failed mid-batch; the transaction was rolled back.
    #[error("load error at record {index}: {source}")]
    Load {
        /// Position of the first record in the failing batch.
        index: usize,
        #[source]
        source: mysql_async::Error,
    },

    /// Read query failed (non-fatal).
    #[error("query error: {0}")]
    Query(#[source] mysql_async::Error),

    /// A DECIMAL column came back in a form we could not parse.
    #[error("decimal parse error: {0}")]
    Decimal(#[from] rust_decimal::Error),

    /// Configuration error (bad connection URL and the like).
    #[error("configuration error: {0}")]
    Config(String),
}
