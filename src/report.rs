//! Report driver: runs the pipeline stages and every aggregator, and
//! exposes the summary tables the presentation layer consumes.

use serde::Serialize;

use crate::aggregate::{
    category_average_rating, category_sales_averages, category_sales_totals,
    customer_frequency_spend, daily_sales, delivery_delay_comparison, monthly_active_users,
    review_score_distribution, CategoryRating, CategorySales, CustomerActivity, DailySales,
    DeliveryDelayComparison, MonthlyActiveUsers, ReviewScoreDistribution,
};
use crate::error::{Error, Result};
use crate::io::Datasets;
use crate::pipeline::{
    build_transactions, normalize_reviews, resolve_categories, AnalysisWindow,
};

/// Every summary table of one analysis run.
///
/// This struct is the whole external surface of the core: charts and
/// narrative are built from it downstream.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsReport {
    pub daily_sales: Vec<DailySales>,
    pub monthly_active_users: Vec<MonthlyActiveUsers>,
    pub category_sales_totals: Vec<CategorySales>,
    pub category_sales_averages: Vec<CategorySales>,
    pub review_scores: ReviewScoreDistribution,
    pub category_ratings: Vec<CategoryRating>,
    pub delivery_delays: DeliveryDelayComparison,
    pub customer_activity: Vec<CustomerActivity>,
}

impl AnalyticsReport {
    /// Run the full pipeline and all aggregators sequentially.
    pub fn build(datasets: &Datasets, window: &AnalysisWindow) -> AnalyticsReport {
        let (transactions, reviews, products) = Self::prepare(datasets, window);
        let items = &datasets.order_items;

        AnalyticsReport {
            daily_sales: daily_sales(&transactions),
            monthly_active_users: monthly_active_users(&transactions),
            category_sales_totals: category_sales_totals(items, &products, &transactions),
            category_sales_averages: category_sales_averages(items, &products, &transactions),
            review_scores: review_score_distribution(&reviews),
            category_ratings: category_average_rating(items, &products, &reviews),
            delivery_delays: delivery_delay_comparison(&transactions, &reviews),
            customer_activity: customer_frequency_spend(&transactions),
        }
    }

    /// Like [`AnalyticsReport::build`] but fans the independent
    /// aggregators out across threads. Results are identical; the
    /// aggregators share no state and have no ordering constraints.
    pub fn build_parallel(datasets: &Datasets, window: &AnalysisWindow) -> AnalyticsReport {
        let (transactions, reviews, products) = Self::prepare(datasets, window);
        let items = &datasets.order_items;

        let (sales_side, review_side) = rayon::join(
            || {
                (
                    daily_sales(&transactions),
                    monthly_active_users(&transactions),
                    category_sales_totals(items, &products, &transactions),
                    category_sales_averages(items, &products, &transactions),
                    customer_frequency_spend(&transactions),
                )
            },
            || {
                (
                    review_score_distribution(&reviews),
                    category_average_rating(items, &products, &reviews),
                    delivery_delay_comparison(&transactions, &reviews),
                )
            },
        );

        let (daily_sales, monthly_active_users, category_sales_totals, category_sales_averages, customer_activity) =
            sales_side;
        let (review_scores, category_ratings, delivery_delays) = review_side;

        AnalyticsReport {
            daily_sales,
            monthly_active_users,
            category_sales_totals,
            category_sales_averages,
            review_scores,
            category_ratings,
            delivery_delays,
            customer_activity,
        }
    }

    /// Serialize the report for an external consumer.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::Json)
    }

    // Shared front half: joins, normalization, resolution, windowing.
    fn prepare(
        datasets: &Datasets,
        window: &AnalysisWindow,
    ) -> (
        Vec<crate::model::Transaction>,
        Vec<crate::pipeline::NormalizedReview>,
        Vec<crate::pipeline::ResolvedProduct>,
    ) {
        let transactions = build_transactions(&datasets.orders, &datasets.payments);
        let transactions = window.filter_transactions(&transactions);
        let reviews = normalize_reviews(&datasets.reviews);
        let reviews = window.filter_reviews(&reviews);
        let products = resolve_categories(&datasets.products, &datasets.category_translations);
        (transactions, reviews, products)
    }
}
