//! CLI definitions for sample-db.

use clap::{Parser, Subcommand};
use employee_postgres::PostgresOpts;
use seed_core::CommonSeedArgs;
use shop_mysql::MySqlOpts;

#[derive(Parser)]
#[command(name = "sample-db")]
#[command(about = "Seed sample PostgreSQL and MySQL databases and run sample reports")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Employee sample database (PostgreSQL)
    Employee {
        #[command(subcommand)]
        command: EmployeeCommand,
    },

    /// Sample shop database (MySQL)
    Shop {
        #[command(subcommand)]
        command: ShopCommand,
    },
}

#[derive(Subcommand)]
pub enum EmployeeCommand {
    /// Create the employee tables and load generated records
    Seed {
        #[command(flatten)]
        pg: PostgresOpts,

        #[command(flatten)]
        common: CommonSeedArgs,

        /// Drop and recreate the tables instead of creating them idempotently
        #[arg(long)]
        reset: bool,
    },

    /// Run the employee reports
    Report {
        #[command(flatten)]
        pg: PostgresOpts,

        /// Maximum number of employees to list
        #[arg(long, default_value = "10")]
        limit: i64,
    },
}

#[derive(Subcommand)]
pub enum ShopCommand {
    /// Reset the sample_shop schema and load the seed dataset
    Seed {
        #[command(flatten)]
        mysql: MySqlOpts,

        /// Keep existing schema state instead of dropping it first
        #[arg(long)]
        no_reset: bool,
    },

    /// Run the shop order reports
    Report {
        #[command(flatten)]
        mysql: MySqlOpts,

        /// Show line items for this order instead of the order summary listing
        #[arg(long)]
        order_id: Option<u64>,
    },
}
