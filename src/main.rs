use clap::Parser;
use sample_db::cli::{Cli, Commands, EmployeeCommand, ShopCommand};
use seed_core::{RetryPolicy, SchemaMode};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Employee { command } => match command {
            EmployeeCommand::Seed { pg, common, reset } => {
                employee_seed(pg, common, reset).await?;
            }
            EmployeeCommand::Report { pg, limit } => {
                employee_report(pg, limit).await?;
            }
        },
        Commands::Shop { command } => match command {
            ShopCommand::Seed { mysql, no_reset } => {
                shop_seed(mysql, no_reset).await?;
            }
            ShopCommand::Report { mysql, order_id } => {
                shop_report(mysql, order_id).await?;
            }
        },
    }

    Ok(())
}

async fn employee_seed(
    pg: employee_postgres::PostgresOpts,
    common: seed_core::CommonSeedArgs,
    reset: bool,
) -> anyhow::Result<()> {
    let policy = RetryPolicy::default();
    let mut client = employee_postgres::connect(&pg, &policy).await?;

    let mode = SchemaMode::from_reset_flag(reset);
    employee_postgres::create_schema(&client, mode).await?;

    let records = employee_generator::generate(common.count, common.seed);
    let inserted = employee_postgres::load(&mut client, &records, common.batch_size).await?;
    tracing::info!("Inserted {inserted} employees into PostgreSQL");

    // The post-seed summary is informational; a failure here does not undo
    // the committed load.
    match employee_postgres::department_statistics(&client).await {
        Ok(stats) => employee_postgres::report::print_department_statistics(&stats),
        Err(e) => tracing::warn!("Department statistics query failed: {e}"),
    }

    Ok(())
}

async fn employee_report(pg: employee_postgres::PostgresOpts, limit: i64) -> anyhow::Result<()> {
    let policy = RetryPolicy::default();
    let client = employee_postgres::connect(&pg, &policy).await?;

    match employee_postgres::active_employees(&client, limit).await {
        Ok(employees) => employee_postgres::report::print_employees(&employees),
        Err(e) => tracing::warn!("Active employees query failed: {e}"),
    }

    match employee_postgres::department_statistics(&client).await {
        Ok(stats) => employee_postgres::report::print_department_statistics(&stats),
        Err(e) => tracing::warn!("Department statistics query failed: {e}"),
    }

    Ok(())
}

async fn shop_seed(mysql: shop_mysql::MySqlOpts, no_reset: bool) -> anyhow::Result<()> {
    let policy = RetryPolicy::default();
    let mut conn = shop_mysql::connect(&mysql, &policy).await?;

    let mode = if no_reset {
        SchemaMode::Idempotent
    } else {
        SchemaMode::DestructiveReset
    };
    shop_mysql::create_schema(&mut conn, mode).await?;

    let inserted = shop_mysql::load(&mut conn).await?;
    tracing::info!("Inserted {inserted} rows into MySQL");

    match shop_mysql::order_summaries(&mut conn).await {
        Ok(orders) => shop_mysql::report::print_order_summaries(&orders),
        Err(e) => tracing::warn!("Order summary query failed: {e}"),
    }

    conn.disconnect().await?;
    Ok(())
}

async fn shop_report(mysql: shop_mysql::MySqlOpts, order_id: Option<u64>) -> anyhow::Result<()> {
    let policy = RetryPolicy::default();
    let mut conn = shop_mysql::connect(&mysql, &policy).await?;

    match order_id {
        Some(id) => match shop_mysql::order_lines(&mut conn, id).await {
            Ok(lines) => shop_mysql::report::print_order_lines(id, &lines),
            Err(e) => tracing::warn!("Order line query failed: {e}"),
        },
        None => match shop_mysql::order_summaries(&mut conn).await {
            Ok(orders) => shop_mysql::report::print_order_summaries(&orders),
            Err(e) => tracing::warn!("Order summary query failed: {e}"),
        },
    }

    conn.disconnect().await?;
    Ok(())
}
