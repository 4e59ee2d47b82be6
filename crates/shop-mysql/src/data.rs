//! Literal seed dataset for the sample shop.
//!
//! This dataset is fixed, not generated, and some of it is deliberately
//! inconsistent: only 5 of the 20 orders have line items (6 rows total), and
//! an order's `total_amount` does not always reconcile with the sum of its
//! `price_at_purchase` values (order 1 totals 85,999.00 against line items
//! summing 125,998.00). Likewise `price_at_purchase` can diverge from the
//! live `products.price`. None of this is to be "fixed".

/// A seed row for `users`.
#[derive(Debug, Clone, Copy)]
pub struct SeedUser {
    pub full_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

/// A seed row for `products`.
#[derive(Debug, Clone, Copy)]
pub struct SeedProduct {
    pub product_name: &'static str,
    pub category: &'static str,
    pub price: &'static str,
    pub stock_quantity: u32,
}

/// A seed row for `orders`. The order date is assigned at insert time.
#[derive(Debug, Clone, Copy)]
pub struct SeedOrder {
    pub user_id: u64,
    pub status: &'static str,
    pub total_amount: &'static str,
    pub shipping_address: &'static str,
}

/// A seed row for the `order_products` join table.
#[derive(Debug, Clone, Copy)]
pub struct SeedOrderProduct {
    pub order_id: u64,
    pub product_id: u64,
    pub quantity: u32,
    pub price_at_purchase: &'static str,
}

pub const USERS: [SeedUser; 20] = [
    SeedUser { full_name: "Amit Sharma", email: "amit.sharma@example.com", phone: "+91-9000000001" },
    SeedUser { full_name: "Priya Mehta", email: "priya.mehta@example.com", phone: "+91-9000000002" },
    SeedUser { full_name: "Rohan Gupta", email: "rohan.gupta@example.com", phone: "+91-9000000003" },
    SeedUser { full_name: "Neha Verma", email: "neha.verma@example.com", phone: "+91-9000000004" },
    SeedUser { full_name: "Karan Singh", email: "karan.singh@example.com", phone: "+91-9000000005" },
    SeedUser { full_name: "Sneha Iyer", email: "sneha.iyer@example.com", phone: "+91-9000000006" },
    SeedUser { full_name: "Arjun Patel", email: "arjun.patel@example.com", phone: "+91-9000000007" },
    SeedUser { full_name: "Divya Reddy", email: "divya.reddy@example.com", phone: "+91-9000000008" },
    SeedUser { full_name: "Vikram Das", email: "vikram.das@example.com", phone: "+91-9000000009" },
    SeedUser { full_name: "Ananya Bose", email: "ananya.bose@example.com", phone: "+91-9000000010" },
    SeedUser { full_name: "Manish Tiwari", email: "manish.tiwari@example.com", phone: "+91-9000000011" },
    SeedUser { full_name: "Isha Nair", email: "isha.nair@example.com", phone: "+91-9000000012" },
    SeedUser { full_name: "Raj Malhotra", email: "raj.malhotra@example.com", phone: "+91-9000000013" },
    SeedUser { full_name: "Simran Gill", email: "simran.gill@example.com", phone: "+91-9000000014" },
    SeedUser { full_name: "Nikhil Joshi", email: "nikhil.joshi@example.com", phone: "+91-9000000015" },
    SeedUser { full_name: "Aarti Dey", email: "aarti.dey@example.com", phone: "+91-9000000016" },
    SeedUser { full_name: "Sameer Khan", email: "sameer.khan@example.com", phone: "+91-9000000017" },
    SeedUser { full_name: "Pooja Sethi", email: "pooja.sethi@example.com", phone: "+91-9000000018" },
    SeedUser { full_name: "Rahul Bhat", email: "rahul.bhat@example.com", phone: "+91-9000000019" },
    SeedUser { full_name: "Tanya Kapoor", email: "tanya.kapoor@example.com", phone: "+91-9000000020" },
];

pub const PRODUCTS: [SeedProduct; 20] = [
    SeedProduct { product_name: "Apple iPhone 15", category: "Electronics", price: "79999.00", stock_quantity: 25 },
    SeedProduct { product_name: "Samsung Galaxy S23", category: "Electronics", price: "74999.00", stock_quantity: 30 },
    SeedProduct { product_name: "Sony WH-1000XM5 Headphones", category: "Electronics", price: "29999.00", stock_quantity: 50 },
    SeedProduct { product_name: "MacBook Air M3", category: "Computers", price: "124999.00", stock_quantity: 20 },
    SeedProduct { product_name: "Dell XPS 13", category: "Computers", price: "119999.00", stock_quantity: 15 },
    SeedProduct { product_name: "LG 55-inch OLED TV", category: "Home Appliances", price: "109999.00", stock_quantity: 10 },
    SeedProduct { product_name: "Dyson V12 Vacuum", category: "Home Appliances", price: "49999.00", stock_quantity: 25 },
    SeedProduct { product_name: "Nike Air Zoom Pegasus", category: "Fashion", price: "8999.00", stock_quantity: 100 },
    SeedProduct { product_name: "Adidas Ultraboost 23", category: "Fashion", price: "10999.00", stock_quantity: 80 },
    SeedProduct { product_name: "Puma Running Shorts", category: "Fashion", price: "1999.00", stock_quantity: 150 },
    SeedProduct { product_name: "Wilson Tennis Racket", category: "Sports", price: "14999.00", stock_quantity: 40 },
    SeedProduct { product_name: "Yonex Badminton Racquet", category: "Sports", price: "7999.00", stock_quantity: 60 },
    SeedProduct { product_name: "Nivia Football", category: "Sports", price: "1499.00", stock_quantity: 200 },
    SeedProduct { product_name: "Protein Powder 1kg", category: "Groceries", price: "2999.00", stock_quantity: 100 },
    SeedProduct { product_name: "Organic Honey 500g", category: "Groceries", price: "499.00", stock_quantity: 300 },
    SeedProduct { product_name: "Apple Watch Series 9", category: "Electronics", price: "45999.00", stock_quantity: 50 },
    SeedProduct { product_name: "Samsung Galaxy Watch 6", category: "Electronics", price: "32999.00", stock_quantity: 40 },
    SeedProduct { product_name: "Lenovo Legion 5 Pro", category: "Computers", price: "139999.00", stock_quantity: 12 },
    SeedProduct { product_name: "Mi Smart Speaker", category: "Electronics", price: "4999.00", stock_quantity: 90 },
    SeedProduct { product_name: "Google Nest Hub", category: "Electronics", price: "8999.00", stock_quantity: 40 },
];

pub const ORDERS: [SeedOrder; 20] = [
    SeedOrder { user_id: 1, status: "COMPLETED", total_amount: "85999.00", shipping_address: "Mumbai, India" },
    SeedOrder { user_id: 2, status: "PENDING", total_amount: "124999.00", shipping_address: "Pune, India" },
    SeedOrder { user_id: 3, status: "COMPLETED", total_amount: "29999.00", shipping_address: "Bangalore, India" },
    SeedOrder { user_id: 4, status: "COMPLETED", total_amount: "9999.00", shipping_address: "Delhi, India" },
    SeedOrder { user_id: 5, status: "PENDING", total_amount: "4999.00", shipping_address: "Hyderabad, India" },
    SeedOrder { user_id: 6, status: "CANCELLED", total_amount: "109999.00", shipping_address: "Kolkata, India" },
    SeedOrder { user_id: 7, status: "COMPLETED", total_amount: "45999.00", shipping_address: "Chennai, India" },
    SeedOrder { user_id: 8, status: "COMPLETED", total_amount: "14999.00", shipping_address: "Noida, India" },
    SeedOrder { user_id: 9, status: "COMPLETED", total_amount: "89999.00", shipping_address: "Gurugram, India" },
    SeedOrder { user_id: 10, status: "PENDING", total_amount: "1999.00", shipping_address: "Ahmedabad, India" },
    SeedOrder { user_id: 11, status: "COMPLETED", total_amount: "119999.00", shipping_address: "Indore, India" },
    SeedOrder { user_id: 12, status: "PENDING", total_amount: "999.00", shipping_address: "Surat, India" },
    SeedOrder { user_id: 13, status: "COMPLETED", total_amount: "3999.00", shipping_address: "Chandigarh, India" },
    SeedOrder { user_id: 14, status: "COMPLETED", total_amount: "8999.00", shipping_address: "Jaipur, India" },
    SeedOrder { user_id: 15, status: "COMPLETED", total_amount: "179999.00", shipping_address: "Nagpur, India" },
    SeedOrder { user_id: 16, status: "PENDING", total_amount: "1599.00", shipping_address: "Bhopal, India" },
    SeedOrder { user_id: 17, status: "COMPLETED", total_amount: "29999.00", shipping_address: "Lucknow, India" },
    SeedOrder { user_id: 18, status: "PENDING", total_amount: "3999.00", shipping_address: "Kanpur, India" },
    SeedOrder { user_id: 19, status: "COMPLETED", total_amount: "74999.00", shipping_address: "Patna, India" },
    SeedOrder { user_id: 20, status: "COMPLETED", total_amount: "5999.00", shipping_address: "Ranchi, India" },
];

pub const ORDER_PRODUCTS: [SeedOrderProduct; 6] = [
    SeedOrderProduct { order_id: 1, product_id: 1, quantity: 1, price_at_purchase: "79999.00" },
    SeedOrderProduct { order_id: 1, product_id: 16, quantity: 1, price_at_purchase: "45999.00" },
    SeedOrderProduct { order_id: 2, product_id: 4, quantity: 1, price_at_purchase: "124999.00" },
    SeedOrderProduct { order_id: 3, product_id: 3, quantity: 1, price_at_purchase: "29999.00" },
    SeedOrderProduct { order_id: 4, product_id: 8, quantity: 2, price_at_purchase: "17998.00" },
    SeedOrderProduct { order_id: 5, product_id: 15, quantity: 3, price_at_purchase: "1497.00" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn test_seed_row_counts() {
        assert_eq!(USERS.len(), 20);
        assert_eq!(PRODUCTS.len(), 20);
        assert_eq!(ORDERS.len(), 20);
        assert_eq!(ORDER_PRODUCTS.len(), 6);
    }

    #[test]
    fn test_user_emails_are_unique() {
        let emails: HashSet<_> = USERS.iter().map(|u| u.email).collect();
        assert_eq!(emails.len(), USERS.len());
    }

    #[test]
    fn test_referential_integrity_of_seed_rows() {
        for order in &ORDERS {
            assert!((1..=USERS.len() as u64).contains(&order.user_id));
        }
        for line in &ORDER_PRODUCTS {
            assert!((1..=ORDERS.len() as u64).contains(&line.order_id));
            assert!((1..=PRODUCTS.len() as u64).contains(&line.product_id));
        }
    }

    #[test]
    fn test_order_1_price_at_purchase_divergence_is_preserved() {
        // Order 1 carries line items for products 1 and 16. Their snapshot
        // prices sum to 125,998.00 while the order's stored total is
        // 85,999.00; the dataset keeps that mismatch on purpose.
        let lines: Vec<_> = ORDER_PRODUCTS.iter().filter(|l| l.order_id == 1).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product_id, 1);
        assert_eq!(lines[1].product_id, 16);

        let subtotal: Decimal = lines
            .iter()
            .map(|l| Decimal::from_str(l.price_at_purchase).unwrap())
            .sum();
        assert_eq!(subtotal, Decimal::from_str("125998.00").unwrap());
        assert_eq!(
            Decimal::from_str(ORDERS[0].total_amount).unwrap(),
            Decimal::from_str("85999.00").unwrap()
        );
    }

    #[test]
    fn test_most_orders_have_no_line_items() {
        // 6 line-item rows covering 5 distinct orders; the other 15 orders
        // have none. Part of the dataset as given.
        let with_lines: HashSet<_> = ORDER_PRODUCTS.iter().map(|l| l.order_id).collect();
        assert_eq!(with_lines.len(), 5);
        assert_eq!(ORDER_PRODUCTS.len(), 6);
    }

    #[test]
    fn test_all_money_values_parse_as_decimals() {
        for p in &PRODUCTS {
            Decimal::from_str(p.price).unwrap();
        }
        for o in &ORDERS {
            Decimal::from_str(o.total_amount).unwrap();
        }
        for l in &ORDER_PRODUCTS {
            Decimal::from_str(l.price_at_purchase).unwrap();
        }
    }
}
