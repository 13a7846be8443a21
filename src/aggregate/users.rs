//! Customer-activity aggregates: monthly active users and per-customer
//! frequency/spend pairs.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::model::Transaction;
use crate::temporal::month_of;

/// Distinct purchasing customers in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyActiveUsers {
    pub year: i32,
    pub month: u32,
    pub active_users: usize,
}

/// One customer's order count and total spend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerActivity {
    pub customer_id: String,
    /// Distinct orders, not payment installments
    pub order_count: usize,
    pub total_spend: f64,
}

/// Count distinct customers per calendar month of the order date.
///
/// Only months present in the data produce a row: a month with zero
/// transactions is a gap in the output, not a zero row.
pub fn monthly_active_users(transactions: &[Transaction]) -> Vec<MonthlyActiveUsers> {
    let mut customers_by_month: BTreeMap<(i32, u32), HashSet<&str>> = BTreeMap::new();
    for transaction in transactions {
        if let Some(date) = transaction.order_date {
            customers_by_month
                .entry(month_of(date))
                .or_default()
                .insert(transaction.customer_id.as_str());
        }
    }
    customers_by_month
        .into_iter()
        .map(|((year, month), customers)| MonthlyActiveUsers {
            year,
            month,
            active_users: customers.len(),
        })
        .collect()
}

/// Group transactions by customer into (order_count, total_spend) pairs,
/// ordered by customer id.
///
/// Correlation or significance testing over the pairs is left to the
/// consumer (see `crate::stats::pearson`).
pub fn customer_frequency_spend(transactions: &[Transaction]) -> Vec<CustomerActivity> {
    let mut by_customer: BTreeMap<&str, (HashSet<&str>, f64)> = BTreeMap::new();
    for transaction in transactions {
        let entry = by_customer
            .entry(transaction.customer_id.as_str())
            .or_default();
        entry.0.insert(transaction.order_id.as_str());
        entry.1 += transaction.payment_value;
    }
    by_customer
        .into_iter()
        .map(|(customer_id, (orders, total_spend))| CustomerActivity {
            customer_id: customer_id.to_string(),
            order_count: orders.len(),
            total_spend,
        })
        .collect()
}
