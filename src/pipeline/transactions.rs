//! Transaction builder: one row per (order, payment) pair.

use std::collections::{HashMap, HashSet};

use crate::model::{Order, Payment, Transaction};
use crate::temporal::parse_date_prefix;

/// Inner-join orders to payments on `order_id` and derive the normalized
/// date fields.
///
/// Orders without payments, and payments without a matching order, are
/// dropped. Exact-duplicate payment rows are removed, keeping the first
/// occurrence. Timestamp parse failures yield a null date, never an
/// error.
pub fn build_transactions(orders: &[Order], payments: &[Payment]) -> Vec<Transaction> {
    // order_id is a unique key, so a hash index over orders is enough to
    // drive the join from the payment side.
    let orders_by_id: HashMap<&str, &Order> = orders
        .iter()
        .map(|order| (order.order_id.as_str(), order))
        .collect();

    let mut seen = HashSet::new();
    let mut transactions = Vec::new();

    for payment in payments {
        let order = match orders_by_id.get(payment.order_id.as_str()) {
            Some(order) => order,
            None => continue, // payment without an order
        };
        if !seen.insert(payment_key(payment)) {
            continue; // exact duplicate row
        }
        transactions.push(Transaction {
            order_id: order.order_id.clone(),
            customer_id: order.customer_id.clone(),
            payment_value: payment.payment_value,
            order_date: parse_date_prefix(&order.order_purchase_timestamp),
            delivery_date: order
                .order_delivered_customer_date
                .as_deref()
                .and_then(parse_date_prefix),
        });
    }
    transactions
}

/// Identity of a payment row for exact-duplicate removal. The monetary
/// value is compared bitwise so that two parses of the same field always
/// collapse.
fn payment_key(payment: &Payment) -> (String, Option<u32>, Option<String>, Option<u32>, u64) {
    (
        payment.order_id.clone(),
        payment.payment_sequential,
        payment.payment_type.clone(),
        payment.payment_installments,
        payment.payment_value.to_bits(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(order_id: &str, customer_id: &str, purchased: &str, delivered: Option<&str>) -> Order {
        Order {
            order_id: order_id.to_string(),
            customer_id: customer_id.to_string(),
            order_status: Some("delivered".to_string()),
            order_purchase_timestamp: purchased.to_string(),
            order_delivered_customer_date: delivered.map(|s| s.to_string()),
        }
    }

    fn payment(order_id: &str, sequential: u32, value: f64) -> Payment {
        Payment {
            order_id: order_id.to_string(),
            payment_sequential: Some(sequential),
            payment_type: Some("credit_card".to_string()),
            payment_installments: Some(1),
            payment_value: value,
        }
    }

    #[test]
    fn test_inner_join_drops_unmatched_rows() {
        let orders = vec![
            order("O1", "C1", "2017-03-01 10:00:00", None),
            order("O2", "C2", "2017-03-02 11:00:00", None), // no payment
        ];
        let payments = vec![
            payment("O1", 1, 100.0),
            payment("O9", 1, 50.0), // no order
        ];

        let transactions = build_transactions(&orders, &payments);
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].order_id, "O1");
        assert_eq!(transactions[0].customer_id, "C1");
    }

    #[test]
    fn test_multiple_installments_produce_multiple_rows() {
        let orders = vec![order("O1", "C1", "2017-03-01 10:00:00", None)];
        let payments = vec![payment("O1", 1, 60.0), payment("O1", 2, 40.0)];

        let transactions = build_transactions(&orders, &payments);
        assert_eq!(transactions.len(), 2);
        let total: f64 = transactions.iter().map(|t| t.payment_value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_exact_duplicate_payment_rows_collapse() {
        let orders = vec![order("O1", "C1", "2017-03-01 10:00:00", None)];
        let payments = vec![payment("O1", 1, 100.0), payment("O1", 1, 100.0)];

        let transactions = build_transactions(&orders, &payments);
        assert_eq!(transactions.len(), 1);
    }

    #[test]
    fn test_date_derivation() {
        let orders = vec![order(
            "O1",
            "C1",
            "2017-03-01 10:56:33",
            Some("2017-03-06 18:00:00"),
        )];
        let payments = vec![payment("O1", 1, 100.0)];

        let transactions = build_transactions(&orders, &payments);
        assert_eq!(
            transactions[0].order_date,
            Some(NaiveDate::from_ymd_opt(2017, 3, 1).unwrap())
        );
        assert_eq!(
            transactions[0].delivery_date,
            Some(NaiveDate::from_ymd_opt(2017, 3, 6).unwrap())
        );
    }

    #[test]
    fn test_malformed_timestamps_become_null_dates() {
        let orders = vec![order("O1", "C1", "garbled", Some(""))];
        let payments = vec![payment("O1", 1, 100.0)];

        let transactions = build_transactions(&orders, &payments);
        assert_eq!(transactions.len(), 1); // still joined
        assert_eq!(transactions[0].order_date, None);
        assert_eq!(transactions[0].delivery_date, None);
    }
}
