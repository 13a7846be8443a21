//! Aggregators: independent reducers over the joined, window-filtered
//! tables.
//!
//! Each aggregator is a pure function producing a small summary table.
//! They share no state and have no ordering constraints between them. An
//! empty input always yields an empty output, never an error; group
//! means never divide by zero because grouping only produces non-empty
//! groups.

pub mod delivery;
pub mod ratings;
pub mod sales;
pub mod users;

pub use self::delivery::{delivery_delay_comparison, DeliveryDelayComparison};
pub use self::ratings::{
    category_average_rating, review_score_distribution, CategoryRating, ReviewScoreDistribution,
    ScoreBucket,
};
pub use self::sales::{
    category_sales_averages, category_sales_totals, daily_sales, CategorySales, DailySales,
};
pub use self::users::{
    customer_frequency_spend, monthly_active_users, CustomerActivity, MonthlyActiveUsers,
};
