//! Read-only reports over the shop database.
//!
//! DECIMAL columns travel as strings and are parsed with `rust_decimal`, so
//! money values never pass through floating point.

use crate::error::ShopDbError;
use mysql_async::prelude::*;
use mysql_async::Conn;
use rust_decimal::Decimal;
use std::str::FromStr;

/// One line item of an order, with the order's stored total alongside.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub product_id: u64,
    pub product_name: String,
    pub quantity: u32,
    pub price_at_purchase: Decimal,
    pub order_total: Decimal,
}

/// Summary row for one order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub order_id: u64,
    pub customer: String,
    pub status: String,
    pub total_amount: Decimal,
    pub line_item_count: i64,
}

// Tables are schema-qualified so reports work on a connection that never
// selected a default database.
const ORDER_LINES_QUERY: &str = "
SELECT op.product_id, p.product_name, op.quantity, op.price_at_purchase, o.total_amount
FROM sample_shop.order_products op
JOIN sample_shop.orders o ON o.order_id = op.order_id
JOIN sample_shop.products p ON p.product_id = op.product_id
WHERE op.order_id = ?
ORDER BY op.product_id";

const ORDER_SUMMARIES_QUERY: &str = "
SELECT o.order_id, u.full_name, o.status, o.total_amount, COUNT(op.product_id) AS line_items
FROM sample_shop.orders o
JOIN sample_shop.users u ON u.user_id = o.user_id
LEFT JOIN sample_shop.order_products op ON op.order_id = o.order_id
GROUP BY o.order_id, u.full_name, o.status, o.total_amount
ORDER BY o.order_id";

/// Line items of one order, joined to products for names and to the order
/// for its stored total.
pub async fn order_lines(conn: &mut Conn, order_id: u64) -> Result<Vec<OrderLine>, ShopDbError> {
    let rows: Vec<(u64, String, u32, String, String)> = conn
        .exec(ORDER_LINES_QUERY, (order_id,))
        .await
        .map_err(ShopDbError::Query)?;

    rows.into_iter()
        .map(|(product_id, product_name, quantity, price, total)| {
            Ok(OrderLine {
                product_id,
                product_name,
                quantity,
                price_at_purchase: Decimal::from_str(&price)?,
                order_total: Decimal::from_str(&total)?,
            })
        })
        .collect()
}

/// Per-order summary with customer name and line-item count.
pub async fn order_summaries(conn: &mut Conn) -> Result<Vec<OrderSummary>, ShopDbError> {
    let rows: Vec<(u64, String, String, String, i64)> = conn
        .query(ORDER_SUMMARIES_QUERY)
        .await
        .map_err(ShopDbError::Query)?;

    rows.into_iter()
        .map(|(order_id, customer, status, total, line_item_count)| {
            Ok(OrderSummary {
                order_id,
                customer,
                status,
                total_amount: Decimal::from_str(&total)?,
                line_item_count,
            })
        })
        .collect()
}

/// Print one order's line items, surfacing the snapshot-vs-total divergence
/// as stored.
pub fn print_order_lines(order_id: u64, lines: &[OrderLine]) {
    println!("\n--- Order {order_id} Line Items ---");
    if lines.is_empty() {
        println!("(no line items)");
        return;
    }
    let mut subtotal = Decimal::ZERO;
    for line in lines {
        println!(
            "Product {}: {} x{} @ {}",
            line.product_id, line.product_name, line.quantity, line.price_at_purchase
        );
        subtotal += line.price_at_purchase;
    }
    println!("Line item subtotal: {subtotal}");
    println!("Order total (as stored): {}", lines[0].order_total);
}

/// Print the order summary listing.
pub fn print_order_summaries(orders: &[OrderSummary]) {
    println!("\n--- Orders ({}) ---", orders.len());
    for order in orders {
        println!(
            "Order {}: {} | {} | total {} | {} line item(s)",
            order.order_id, order.customer, order.status, order.total_amount, order.line_item_count
        );
    }
}
