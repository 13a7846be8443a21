//! Review normalization: duplicate removal and date derivation.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::Review;
use crate::temporal::parse_date_prefix;

/// A deduplicated review with its derived creation date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedReview {
    pub order_id: String,
    pub review_score: u8,
    /// Free text carried opaquely; may be in any language.
    pub review_comment_title: Option<String>,
    pub review_date: Option<NaiveDate>,
}

/// Remove exact-duplicate review rows (keeping the first occurrence) and
/// derive the normalized review date with the lenient parse-or-null rule.
pub fn normalize_reviews(reviews: &[Review]) -> Vec<NormalizedReview> {
    let mut seen = HashSet::new();
    let mut normalized = Vec::new();

    for review in reviews {
        if !seen.insert(review_key(review)) {
            continue;
        }
        normalized.push(NormalizedReview {
            order_id: review.order_id.clone(),
            review_score: review.review_score,
            review_comment_title: review.review_comment_title.clone(),
            review_date: parse_date_prefix(&review.review_creation_date),
        });
    }
    normalized
}

type ReviewKey = (
    Option<String>,
    String,
    u8,
    Option<String>,
    Option<String>,
    String,
);

fn review_key(review: &Review) -> ReviewKey {
    (
        review.review_id.clone(),
        review.order_id.clone(),
        review.review_score,
        review.review_comment_title.clone(),
        review.review_comment_message.clone(),
        review.review_creation_date.clone(),
    )
}
