//! Transactional loader for the literal shop dataset.
//!
//! One transaction covers the whole run, with root entities (users,
//! products) inserted before orders and orders before the join rows. Any
//! failure rolls everything back and reports the running position of the
//! first record in the failing batch.

use crate::data;
use crate::error::ShopDbError;
use mysql_async::prelude::*;
use mysql_async::{Conn, Params, Transaction, TxOpts, Value};
use tracing::{debug, info};

/// Build a multi-row INSERT statement from a per-row value template.
pub fn multi_row_insert(table: &str, columns: &[&str], row_template: &str, rows: usize) -> String {
    let values: Vec<&str> = (0..rows).map(|_| row_template).collect();
    format!(
        "INSERT INTO {table} ({}) VALUES {}",
        columns.join(", "),
        values.join(", ")
    )
}

pub fn users_insert() -> (String, Params) {
    let sql = multi_row_insert(
        "users",
        &["full_name", "email", "phone"],
        "(?, ?, ?)",
        data::USERS.len(),
    );
    let mut values = Vec::with_capacity(data::USERS.len() * 3);
    for user in data::USERS {
        values.push(Value::from(user.full_name));
        values.push(Value::from(user.email));
        values.push(Value::from(user.phone));
    }
    (sql, Params::Positional(values))
}

pub fn products_insert() -> (String, Params) {
    let sql = multi_row_insert(
        "products",
        &["product_name", "category", "price", "stock_quantity"],
        "(?, ?, ?, ?)",
        data::PRODUCTS.len(),
    );
    let mut values = Vec::with_capacity(data::PRODUCTS.len() * 4);
    for product in data::PRODUCTS {
        values.push(Value::from(product.product_name));
        values.push(Value::from(product.category));
        values.push(Value::from(product.price));
        values.push(Value::from(product.stock_quantity));
    }
    (sql, Params::Positional(values))
}

pub fn orders_insert() -> (String, Params) {
    // order_date is assigned by the server at insert time.
    let sql = multi_row_insert(
        "orders",
        &[
            "user_id",
            "order_date",
            "status",
            "total_amount",
            "shipping_address",
        ],
        "(?, NOW(), ?, ?, ?)",
        data::ORDERS.len(),
    );
    let mut values = Vec::with_capacity(data::ORDERS.len() * 4);
    for order in data::ORDERS {
        values.push(Value::from(order.user_id));
        values.push(Value::from(order.status));
        values.push(Value::from(order.total_amount));
        values.push(Value::from(order.shipping_address));
    }
    (sql, Params::Positional(values))
}

pub fn order_products_insert() -> (String, Params) {
    let sql = multi_row_insert(
        "order_products",
        &["order_id", "product_id", "quantity", "price_at_purchase"],
        "(?, ?, ?, ?)",
        data::ORDER_PRODUCTS.len(),
    );
    let mut values = Vec::with_capacity(data::ORDER_PRODUCTS.len() * 4);
    for line in data::ORDER_PRODUCTS {
        values.push(Value::from(line.order_id));
        values.push(Value::from(line.product_id));
        values.push(Value::from(line.quantity));
        values.push(Value::from(line.price_at_purchase));
    }
    (sql, Params::Positional(values))
}

/// Insert batches in parent-before-child order, with each batch's starting
/// position in the overall run.
fn insert_batches() -> Vec<(usize, usize, String, Params)> {
    let mut batches = Vec::with_capacity(4);
    let mut offset = 0;
    for (rows, (sql, params)) in [
        (data::USERS.len(), users_insert()),
        (data::PRODUCTS.len(), products_insert()),
        (data::ORDERS.len(), orders_insert()),
        (data::ORDER_PRODUCTS.len(), order_products_insert()),
    ] {
        batches.push((offset, rows, sql, params));
        offset += rows;
    }
    batches
}

/// Total number of seed rows across all four tables.
pub fn seed_row_count() -> u64 {
    (data::USERS.len() + data::PRODUCTS.len() + data::ORDERS.len() + data::ORDER_PRODUCTS.len())
        as u64
}

/// Load the full seed dataset inside a single transaction.
pub async fn load(conn: &mut Conn) -> Result<u64, ShopDbError> {
    let mut tx = conn
        .start_transaction(TxOpts::default())
        .await
        .map_err(|e| ShopDbError::Load { index: 0, source: e })?;

    match load_batches(&mut tx).await {
        Ok(count) => {
            tx.commit().await.map_err(|e| ShopDbError::Load {
                index: count as usize,
                source: e,
            })?;
            info!("Successfully inserted {count} shop rows");
            Ok(count)
        }
        Err((index, source)) => {
            if let Err(e) = tx.rollback().await {
                tracing::warn!("Rollback after load failure also failed: {e}");
            }
            Err(ShopDbError::Load { index, source })
        }
    }
}

async fn load_batches(tx: &mut Transaction<'_>) -> Result<u64, (usize, mysql_async::Error)> {
    let mut count = 0u64;
    for (offset, rows, sql, params) in insert_batches() {
        tx.exec_drop(sql, params).await.map_err(|e| (offset, e))?;
        count += rows as u64;
        debug!("Inserted {count} shop rows");
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_row_insert_repeats_template() {
        let sql = multi_row_insert("users", &["a", "b"], "(?, ?)", 3);
        assert_eq!(sql, "INSERT INTO users (a, b) VALUES (?, ?), (?, ?), (?, ?)");
    }

    #[test]
    fn test_parents_inserted_before_dependents() {
        let batches = insert_batches();
        let tables: Vec<&str> = batches
            .iter()
            .map(|(_, _, sql, _)| {
                if sql.starts_with("INSERT INTO users") {
                    "users"
                } else if sql.starts_with("INSERT INTO products") {
                    "products"
                } else if sql.starts_with("INSERT INTO orders ") {
                    "orders"
                } else {
                    "order_products"
                }
            })
            .collect();
        assert_eq!(tables, ["users", "products", "orders", "order_products"]);
    }

    #[test]
    fn test_batch_offsets_track_running_position() {
        let offsets: Vec<usize> = insert_batches().iter().map(|(o, ..)| *o).collect();
        assert_eq!(offsets, [0, 20, 40, 60]);
        assert_eq!(seed_row_count(), 66);
    }

    #[test]
    fn test_param_counts_match_placeholders() {
        for (_, _, sql, params) in insert_batches() {
            let placeholders = sql.matches('?').count();
            match params {
                Params::Positional(values) => assert_eq!(values.len(), placeholders, "{sql}"),
                other => panic!("expected positional params, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_orders_insert_uses_server_timestamp() {
        let (sql, _) = orders_insert();
        assert!(sql.contains("NOW()"));
        assert!(sql.contains("order_date"));
    }
}
