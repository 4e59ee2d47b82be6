//! Connection establishment with bounded retry.

use crate::args::MySqlOpts;
use crate::error::ShopDbError;
use mysql_async::prelude::Queryable;
use mysql_async::{Conn, Opts};
use seed_core::{retry, RetryPolicy};

/// Connect to MySQL, retrying per the given policy.
///
/// Each attempt opens a fresh connection and pings it, so a half-open
/// connection counts as a failure.
pub async fn connect(opts: &MySqlOpts, policy: &RetryPolicy) -> Result<Conn, ShopDbError> {
    let url = opts.connection_url();
    let endpoint = opts.endpoint();

    let mysql_opts =
        Opts::from_url(&url).map_err(|e| ShopDbError::Config(e.to_string()))?;

    let conn = retry(policy, &endpoint, || {
        let mysql_opts = mysql_opts.clone();
        async move {
            let mut conn = Conn::new(mysql_opts).await?;
            conn.ping().await?;
            Ok::<_, mysql_async::Error>(conn)
        }
    })
    .await?;

    Ok(conn)
}
