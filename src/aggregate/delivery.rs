//! Delivery-delay comparison: all orders vs. the lowest-rated ones.

use std::collections::HashSet;

use serde::Serialize;

use crate::model::Transaction;
use crate::pipeline::NormalizedReview;

/// Mean days between order date and delivery date, over all delivered
/// transactions and over the subset whose order has a 1-star review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryDelayComparison {
    /// None when no transaction has both dates
    pub overall_mean_days: Option<f64>,
    pub overall_count: usize,
    /// None when no 1-star order has both dates
    pub lowest_rated_mean_days: Option<f64>,
    pub lowest_rated_count: usize,
}

/// Compare mean delivery delay across all transactions against the
/// 1-star subset.
///
/// Transactions missing either date are dropped from both populations
/// under the same rule. A delivery date earlier than the order date is
/// passed through as a negative delay, not corrected.
pub fn delivery_delay_comparison(
    transactions: &[Transaction],
    reviews: &[NormalizedReview],
) -> DeliveryDelayComparison {
    let one_star_orders: HashSet<&str> = reviews
        .iter()
        .filter(|r| r.review_score == 1)
        .map(|r| r.order_id.as_str())
        .collect();

    let mut overall = (0.0_f64, 0_usize);
    let mut lowest = (0.0_f64, 0_usize);

    for transaction in transactions {
        let (order_date, delivery_date) = match (transaction.order_date, transaction.delivery_date)
        {
            (Some(order), Some(delivery)) => (order, delivery),
            _ => continue,
        };
        let days = (delivery_date - order_date).num_days() as f64;
        overall.0 += days;
        overall.1 += 1;
        if one_star_orders.contains(transaction.order_id.as_str()) {
            lowest.0 += days;
            lowest.1 += 1;
        }
    }

    DeliveryDelayComparison {
        overall_mean_days: mean_of(overall),
        overall_count: overall.1,
        lowest_rated_mean_days: mean_of(lowest),
        lowest_rated_count: lowest.1,
    }
}

fn mean_of((sum, count): (f64, usize)) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
