//! # marketlens
//!
//! Order analytics over flat CSV snapshots of an e-commerce marketplace:
//! customers, orders, payments, reviews, products, order items, and a
//! category-name translation table.
//!
//! The crate loads the seven sources once as immutable snapshots, joins
//! them into derived tables (transactions, normalized reviews, resolved
//! products), restricts everything to a fixed analysis window, and runs a
//! family of independent aggregators: daily sales, monthly active users,
//! per-category sales and ratings, the review-score distribution, the
//! delivery-delay comparison, and per-customer frequency/spend pairs.
//!
//! Chart rendering and narrative text are out of scope: the
//! [`AnalyticsReport`] summary tables are the entire external surface.
//!
//! ```no_run
//! use marketlens::{AnalysisConfig, AnalyticsReport, Datasets};
//!
//! # fn main() -> marketlens::Result<()> {
//! let config = AnalysisConfig::default();
//! let datasets = Datasets::load(&config)?;
//! let report = AnalyticsReport::build(&datasets, &config.window()?);
//! println!("{}", report.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod temporal;

// Re-export the public surface
pub use aggregate::{
    category_average_rating, category_sales_averages, category_sales_totals,
    customer_frequency_spend, daily_sales, delivery_delay_comparison, monthly_active_users,
    review_score_distribution, CategoryRating, CategorySales, CustomerActivity, DailySales,
    DeliveryDelayComparison, MonthlyActiveUsers, ReviewScoreDistribution, ScoreBucket,
};
pub use config::{AnalysisConfig, SourceFiles};
pub use error::{Error, Result};
pub use io::{read_records, Datasets};
pub use model::{
    CategoryTranslation, Customer, Order, OrderItem, Payment, Product, Review, Transaction,
};
pub use pipeline::{
    build_transactions, normalize_reviews, resolve_categories, AnalysisWindow, NormalizedReview,
    ResolvedProduct,
};
pub use report::AnalyticsReport;
pub use stats::{mean, pearson, CorrelationResult};
