//! Connection establishment with bounded retry.

use crate::args::PostgresOpts;
use crate::error::EmployeeDbError;
use seed_core::{retry, RetryPolicy};
use tokio_postgres::{Client, NoTls};

/// Connect to PostgreSQL, retrying per the given policy.
///
/// Each attempt opens a fresh connection, spawns its driver task, and runs a
/// `SELECT 1` probe so that a half-open connection counts as a failure.
pub async fn connect(
    opts: &PostgresOpts,
    policy: &RetryPolicy,
) -> Result<Client, EmployeeDbError> {
    let conninfo = opts.connection_string();
    let endpoint = opts.endpoint();

    let client = retry(policy, &endpoint, || async {
        let (client, connection) = tokio_postgres::connect(&conninfo, NoTls).await?;

        // The connection object drives the socket; it runs until the client
        // is dropped.
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("PostgreSQL connection error: {e}");
            }
        });

        client.simple_query("SELECT 1").await?;
        Ok::<_, tokio_postgres::Error>(client)
    })
    .await?;

    Ok(client)
}
