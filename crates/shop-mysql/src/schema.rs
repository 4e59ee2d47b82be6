//! Shop schema DDL.

use crate::error::ShopDbError;
use mysql_async::prelude::*;
use mysql_async::Conn;
use seed_core::SchemaMode;
use tracing::{debug, info};

pub const SCHEMA_NAME: &str = "sample_shop";

const DROP_SCHEMA: &str = "DROP SCHEMA IF EXISTS sample_shop";
const CREATE_SCHEMA: &str = "CREATE SCHEMA IF NOT EXISTS sample_shop";
const USE_SCHEMA: &str = "USE sample_shop";

pub const USERS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS users (
    user_id BIGINT AUTO_INCREMENT PRIMARY KEY,
    full_name VARCHAR(100) NOT NULL,
    email VARCHAR(150) UNIQUE NOT NULL,
    phone VARCHAR(20),
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
) ENGINE=InnoDB";

pub const ORDERS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS orders (
    order_id BIGINT AUTO_INCREMENT PRIMARY KEY,
    user_id BIGINT NOT NULL,
    order_date TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    status VARCHAR(50) DEFAULT 'PENDING',
    total_amount DECIMAL(10,2),
    shipping_address VARCHAR(255),
    FOREIGN KEY (user_id) REFERENCES users(user_id)
) ENGINE=InnoDB";

pub const PRODUCTS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS products (
    product_id BIGINT AUTO_INCREMENT PRIMARY KEY,
    product_name VARCHAR(150) NOT NULL,
    category VARCHAR(100),
    price DECIMAL(10,2) NOT NULL,
    stock_quantity INT DEFAULT 0,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
) ENGINE=InnoDB";

pub const ORDER_PRODUCTS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS order_products (
    order_id BIGINT NOT NULL,
    product_id BIGINT NOT NULL,
    quantity INT NOT NULL DEFAULT 1,
    price_at_purchase DECIMAL(10,2),
    PRIMARY KEY (order_id, product_id),
    FOREIGN KEY (order_id) REFERENCES orders(order_id),
    FOREIGN KEY (product_id) REFERENCES products(product_id)
) ENGINE=InnoDB";

/// Ordered DDL sequence for the given mode.
///
/// The shop seeder runs in [`SchemaMode::DestructiveReset`] by default:
/// every run drops the whole `sample_shop` schema and starts from a known
/// state, so repeated seeds cannot accumulate rows.
pub fn schema_statements(mode: SchemaMode) -> Vec<&'static str> {
    let mut statements = Vec::new();
    if mode == SchemaMode::DestructiveReset {
        statements.push(DROP_SCHEMA);
    }
    statements.extend([
        CREATE_SCHEMA,
        USE_SCHEMA,
        USERS_TABLE,
        ORDERS_TABLE,
        PRODUCTS_TABLE,
        ORDER_PRODUCTS_TABLE,
    ]);
    statements
}

/// Create (optionally reset) the `sample_shop` schema and its tables.
///
/// Any statement failure aborts the sequence and surfaces as a fatal
/// [`ShopDbError::Schema`].
pub async fn create_schema(conn: &mut Conn, mode: SchemaMode) -> Result<(), ShopDbError> {
    info!("Creating {SCHEMA_NAME} schema ({mode:?})");
    for statement in schema_statements(mode) {
        debug!("DDL: {statement}");
        conn.query_drop(statement)
            .await
            .map_err(ShopDbError::Schema)?;
    }
    info!("All shop tables created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destructive_mode_drops_schema_first() {
        let statements = schema_statements(SchemaMode::DestructiveReset);
        assert_eq!(statements[0], DROP_SCHEMA);
        assert_eq!(statements[1], CREATE_SCHEMA);
        assert_eq!(statements.len(), 7);
    }

    #[test]
    fn test_idempotent_mode_never_drops() {
        let statements = schema_statements(SchemaMode::Idempotent);
        assert_eq!(statements.len(), 6);
        for stmt in &statements {
            assert!(!stmt.contains("DROP"));
        }
    }

    #[test]
    fn test_parents_created_before_dependents() {
        let statements = schema_statements(SchemaMode::Idempotent);
        let pos = |needle: &str| {
            statements
                .iter()
                .position(|s| s.contains(needle))
                .unwrap_or_else(|| panic!("{needle} not in DDL"))
        };
        assert!(pos("CREATE TABLE IF NOT EXISTS users") < pos("CREATE TABLE IF NOT EXISTS orders"));
        assert!(
            pos("CREATE TABLE IF NOT EXISTS orders")
                < pos("CREATE TABLE IF NOT EXISTS order_products")
        );
        assert!(
            pos("CREATE TABLE IF NOT EXISTS products")
                < pos("CREATE TABLE IF NOT EXISTS order_products")
        );
    }

    #[test]
    fn test_join_table_snapshots_price() {
        assert!(ORDER_PRODUCTS_TABLE.contains("price_at_purchase DECIMAL(10,2)"));
        assert!(ORDER_PRODUCTS_TABLE.contains("PRIMARY KEY (order_id, product_id)"));
    }
}
