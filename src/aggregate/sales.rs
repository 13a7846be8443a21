//! Sales aggregates: daily totals and per-category figures.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{OrderItem, Transaction};
use crate::pipeline::ResolvedProduct;

/// Total payment value for one order date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySales {
    pub date: NaiveDate,
    pub total: f64,
}

/// Sales figures for one translated category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySales {
    pub category: String,
    /// Sum of payment values attributed to the category
    pub total: f64,
    /// Mean payment value per attributed (item, payment) pair
    pub mean: f64,
    /// Number of (item, payment) pairs behind the figures
    pub pairs: usize,
}

/// Group transactions by order date and sum the payment values.
///
/// Output is in ascending date order, one row per distinct date present.
/// Transactions with a null order date contribute nothing.
pub fn daily_sales(transactions: &[Transaction]) -> Vec<DailySales> {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for transaction in transactions {
        if let Some(date) = transaction.order_date {
            *totals.entry(date).or_insert(0.0) += transaction.payment_value;
        }
    }
    totals
        .into_iter()
        .map(|(date, total)| DailySales { date, total })
        .collect()
}

/// Per-category sales, sorted descending by total payment value.
///
/// The join path is OrderItem -> ResolvedProduct -> Transaction, with no
/// review dependency: a category with sales but no reviews still shows
/// up here.
pub fn category_sales_totals(
    items: &[OrderItem],
    products: &[ResolvedProduct],
    transactions: &[Transaction],
) -> Vec<CategorySales> {
    let mut rows = accumulate_category_sales(items, products, transactions);
    rows.sort_by(|a, b| descending(a.total, b.total).then_with(|| a.category.cmp(&b.category)));
    rows
}

/// Per-category sales, sorted descending by mean payment value.
pub fn category_sales_averages(
    items: &[OrderItem],
    products: &[ResolvedProduct],
    transactions: &[Transaction],
) -> Vec<CategorySales> {
    let mut rows = accumulate_category_sales(items, products, transactions);
    rows.sort_by(|a, b| descending(a.mean, b.mean).then_with(|| a.category.cmp(&b.category)));
    rows
}

fn accumulate_category_sales(
    items: &[OrderItem],
    products: &[ResolvedProduct],
    transactions: &[Transaction],
) -> Vec<CategorySales> {
    let category_of: HashMap<&str, &str> = products
        .iter()
        .map(|p| (p.product_id.as_str(), p.category.as_str()))
        .collect();

    let mut payments_by_order: HashMap<&str, Vec<f64>> = HashMap::new();
    for transaction in transactions {
        payments_by_order
            .entry(transaction.order_id.as_str())
            .or_default()
            .push(transaction.payment_value);
    }

    // One contribution per (item, payment) pair, matching the row fan-out
    // an order-level join produces for multi-item or multi-installment
    // orders.
    let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
    for item in items {
        if let Some(&category) = category_of.get(item.product_id.as_str()) {
            if let Some(values) = payments_by_order.get(item.order_id.as_str()) {
                let entry = sums.entry(category).or_insert((0.0, 0));
                for value in values {
                    entry.0 += value;
                    entry.1 += 1;
                }
            }
        }
    }

    sums.into_iter()
        .map(|(category, (total, pairs))| CategorySales {
            category: category.to_string(),
            total,
            mean: total / pairs as f64,
            pairs,
        })
        .collect()
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
