use clap::Parser;
use sample_db::cli::{Cli, Commands, EmployeeCommand, ShopCommand};

#[test]
fn test_employee_seed_defaults() {
    let cli = Cli::try_parse_from(["sample-db", "employee", "seed"]).unwrap();
    let Commands::Employee { command } = cli.command else {
        panic!("expected employee subcommand");
    };
    let EmployeeCommand::Seed { pg, common, reset } = command else {
        panic!("expected seed subcommand");
    };
    assert_eq!(common.count, 100);
    assert_eq!(common.seed, 42);
    assert_eq!(common.batch_size, 100);
    assert!(!reset);
    assert_eq!(pg.pg_port, 5432);
    assert_eq!(pg.pg_database, "employee_db");
}

#[test]
fn test_employee_seed_overrides() {
    let cli = Cli::try_parse_from([
        "sample-db", "employee", "seed", "--count", "500", "--seed", "7", "--reset",
        "--pg-host", "db.internal", "--pg-port", "5433",
    ])
    .unwrap();
    let Commands::Employee {
        command: EmployeeCommand::Seed { pg, common, reset },
    } = cli.command
    else {
        panic!("expected employee seed");
    };
    assert_eq!(common.count, 500);
    assert_eq!(common.seed, 7);
    assert!(reset);
    assert_eq!(pg.pg_host, "db.internal");
    assert_eq!(pg.pg_port, 5433);
}

#[test]
fn test_employee_report_limit() {
    let cli = Cli::try_parse_from(["sample-db", "employee", "report", "--limit", "25"]).unwrap();
    let Commands::Employee {
        command: EmployeeCommand::Report { limit, .. },
    } = cli.command
    else {
        panic!("expected employee report");
    };
    assert_eq!(limit, 25);
}

#[test]
fn test_shop_seed_defaults() {
    let cli = Cli::try_parse_from(["sample-db", "shop", "seed"]).unwrap();
    let Commands::Shop {
        command: ShopCommand::Seed { mysql, no_reset },
    } = cli.command
    else {
        panic!("expected shop seed");
    };
    assert!(!no_reset);
    assert_eq!(mysql.mysql_host, "127.0.0.1");
    assert_eq!(mysql.mysql_port, 3306);
    assert_eq!(mysql.mysql_user, "root");
}

#[test]
fn test_shop_report_order_id() {
    let cli = Cli::try_parse_from(["sample-db", "shop", "report", "--order-id", "3"]).unwrap();
    let Commands::Shop {
        command: ShopCommand::Report { order_id, .. },
    } = cli.command
    else {
        panic!("expected shop report");
    };
    assert_eq!(order_id, Some(3));
}

#[test]
fn test_shop_report_without_order_id() {
    let cli = Cli::try_parse_from(["sample-db", "shop", "report"]).unwrap();
    let Commands::Shop {
        command: ShopCommand::Report { order_id, .. },
    } = cli.command
    else {
        panic!("expected shop report");
    };
    assert_eq!(order_id, None);
}

#[test]
fn test_missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["sample-db"]).is_err());
    assert!(Cli::try_parse_from(["sample-db", "employee"]).is_err());
}
