//! Review-score aggregates: score distribution and per-category average
//! rating.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::model::OrderItem;
use crate::pipeline::{NormalizedReview, ResolvedProduct};

/// Count and share of one review score value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBucket {
    pub score: u8,
    pub count: usize,
    pub fraction: f64,
}

/// The score histogram plus its overall mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewScoreDistribution {
    /// One bucket per score value present, in ascending score order
    pub buckets: Vec<ScoreBucket>,
    pub total_reviews: usize,
    /// None when there are no reviews at all
    pub mean_score: Option<f64>,
}

/// Average review score for one translated category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRating {
    pub category: String,
    pub average_score: f64,
    pub reviews: usize,
}

/// Count reviews per score value and express each as a fraction of the
/// total, alongside the overall mean score.
pub fn review_score_distribution(reviews: &[NormalizedReview]) -> ReviewScoreDistribution {
    let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
    let mut score_sum: u64 = 0;
    for review in reviews {
        *counts.entry(review.review_score).or_insert(0) += 1;
        score_sum += u64::from(review.review_score);
    }

    let total = reviews.len();
    let buckets = counts
        .into_iter()
        .map(|(score, count)| ScoreBucket {
            score,
            count,
            fraction: count as f64 / total as f64,
        })
        .collect();

    ReviewScoreDistribution {
        buckets,
        total_reviews: total,
        mean_score: if total == 0 {
            None
        } else {
            Some(score_sum as f64 / total as f64)
        },
    }
}

/// Mean review score per translated category, sorted descending.
///
/// Join path: OrderItem -> ResolvedProduct -> NormalizedReview. Each
/// (item, review) pair contributes one score, so a review on a
/// multi-item order counts once per item in a resolved category.
pub fn category_average_rating(
    items: &[OrderItem],
    products: &[ResolvedProduct],
    reviews: &[NormalizedReview],
) -> Vec<CategoryRating> {
    let category_of: HashMap<&str, &str> = products
        .iter()
        .map(|p| (p.product_id.as_str(), p.category.as_str()))
        .collect();

    let mut reviews_by_order: HashMap<&str, Vec<u8>> = HashMap::new();
    for review in reviews {
        reviews_by_order
            .entry(review.order_id.as_str())
            .or_default()
            .push(review.review_score);
    }

    let mut sums: HashMap<&str, (u64, usize)> = HashMap::new();
    for item in items {
        if let Some(&category) = category_of.get(item.product_id.as_str()) {
            if let Some(scores) = reviews_by_order.get(item.order_id.as_str()) {
                let entry = sums.entry(category).or_insert((0, 0));
                for score in scores {
                    entry.0 += u64::from(*score);
                    entry.1 += 1;
                }
            }
        }
    }

    let mut rows: Vec<CategoryRating> = sums
        .into_iter()
        .map(|(category, (sum, count))| CategoryRating {
            category: category.to_string(),
            average_score: sum as f64 / count as f64,
            reviews: count,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.average_score
            .partial_cmp(&a.average_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(order_id: &str, score: u8) -> NormalizedReview {
        NormalizedReview {
            order_id: order_id.to_string(),
            review_score: score,
            review_comment_title: None,
            review_date: None,
        }
    }

    fn item(order_id: &str, product_id: &str) -> OrderItem {
        OrderItem {
            order_id: order_id.to_string(),
            order_item_id: Some(1),
            product_id: product_id.to_string(),
            price: None,
            freight_value: None,
        }
    }

    fn resolved(product_id: &str, category: &str) -> ResolvedProduct {
        ResolvedProduct {
            product_id: product_id.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_fractions_sum_to_one() {
        let reviews = vec![
            review("O1", 5),
            review("O2", 5),
            review("O3", 4),
            review("O4", 1),
        ];

        let distribution = review_score_distribution(&reviews);
        let fraction_sum: f64 = distribution.buckets.iter().map(|b| b.fraction).sum();
        assert!((fraction_sum - 1.0).abs() < 1e-9);
        assert_eq!(distribution.total_reviews, 4);
        assert_eq!(distribution.mean_score, Some(3.75));
    }

    #[test]
    fn test_buckets_cover_only_scores_present() {
        let reviews = vec![review("O1", 5), review("O2", 1)];
        let distribution = review_score_distribution(&reviews);

        let scores: Vec<u8> = distribution.buckets.iter().map(|b| b.score).collect();
        assert_eq!(scores, vec![1, 5]);
    }

    #[test]
    fn test_empty_reviews_produce_empty_distribution() {
        let distribution = review_score_distribution(&[]);
        assert!(distribution.buckets.is_empty());
        assert_eq!(distribution.total_reviews, 0);
        assert_eq!(distribution.mean_score, None);
    }

    #[test]
    fn test_category_ratings_sorted_descending() {
        let items = vec![item("O1", "P1"), item("O2", "P2")];
        let products = vec![resolved("P1", "toys"), resolved("P2", "books")];
        let reviews = vec![review("O1", 2), review("O2", 5)];

        let rows = category_average_rating(&items, &products, &reviews);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "books");
        assert_eq!(rows[0].average_score, 5.0);
        assert_eq!(rows[1].category, "toys");
        assert_eq!(rows[1].average_score, 2.0);
    }

    #[test]
    fn test_unreviewed_category_is_absent_from_ratings() {
        let items = vec![item("O1", "P1"), item("O2", "P2")];
        let products = vec![resolved("P1", "toys"), resolved("P2", "books")];
        let reviews = vec![review("O1", 4)]; // nothing for O2

        let rows = category_average_rating(&items, &products, &reviews);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "toys");
    }
}
