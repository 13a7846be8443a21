//! Analysis window filtering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::Transaction;
use crate::pipeline::reviews::NormalizedReview;

/// A fixed date range, inclusive on both bounds.
///
/// Each row is tested independently against both bounds. Rows with a
/// null derived date can never satisfy a date comparison and are always
/// excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AnalysisWindow {
    /// Create a window, rejecting reversed bounds.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidConfig(format!(
                "window start {} is after window end {}",
                start, end
            )));
        }
        Ok(AnalysisWindow { start, end })
    }

    /// Whether a date falls within the window (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Retain transactions whose order date falls within the window.
    pub fn filter_transactions(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|t| t.order_date.is_some_and(|d| self.contains(d)))
            .cloned()
            .collect()
    }

    /// Retain reviews whose derived review date falls within the window.
    pub fn filter_reviews(&self, reviews: &[NormalizedReview]) -> Vec<NormalizedReview> {
        reviews
            .iter()
            .filter(|r| r.review_date.is_some_and(|d| self.contains(d)))
            .cloned()
            .collect()
    }
}
