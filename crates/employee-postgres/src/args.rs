//! CLI argument definitions for the employee database commands.

use clap::Args;

/// PostgreSQL connection options, sourced from flags or environment.
#[derive(Args, Clone, Debug)]
pub struct PostgresOpts {
    /// PostgreSQL host
    #[arg(long, env = "POSTGRES_HOST", default_value = "localhost")]
    pub pg_host: String,

    /// PostgreSQL port
    #[arg(long, env = "POSTGRES_PORT", default_value = "5432")]
    pub pg_port: u16,

    /// PostgreSQL user
    #[arg(long, env = "POSTGRES_USER", default_value = "admin")]
    pub pg_user: String,

    /// PostgreSQL password
    #[arg(long, env = "POSTGRES_PASSWORD", default_value = "admin")]
    pub pg_password: String,

    /// PostgreSQL database name
    #[arg(long, env = "POSTGRES_DATABASE", default_value = "employee_db")]
    pub pg_database: String,
}

impl PostgresOpts {
    /// Key/value connection string for tokio-postgres.
    pub fn connection_string(&self) -> String {
        format!(
            "host={} port={} user={} password={} dbname={}",
            self.pg_host, self.pg_port, self.pg_user, self.pg_password, self.pg_database
        )
    }

    /// Endpoint label used in progress and error messages (no credentials).
    pub fn endpoint(&self) -> String {
        format!("PostgreSQL at {}:{}", self.pg_host, self.pg_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> PostgresOpts {
        PostgresOpts {
            pg_host: "db.internal".to_string(),
            pg_port: 5433,
            pg_user: "admin".to_string(),
            pg_password: "secret".to_string(),
            pg_database: "employee_db".to_string(),
        }
    }

    #[test]
    fn test_connection_string() {
        assert_eq!(
            opts().connection_string(),
            "host=db.internal port=5433 user=admin password=secret dbname=employee_db"
        );
    }

    #[test]
    fn test_endpoint_hides_credentials() {
        let endpoint = opts().endpoint();
        assert_eq!(endpoint, "PostgreSQL at db.internal:5433");
        assert!(!endpoint.contains("secret"));
    }
}
