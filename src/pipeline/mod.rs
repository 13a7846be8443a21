//! Pipeline stages: join, normalize, resolve, and window-filter the raw
//! tables into the derived tables the aggregators consume.
//!
//! Every stage is a pure function over immutable inputs returning a new
//! table. Rows that miss an inner-join key or fail a date parse are
//! dropped or nulled rather than raised as errors; load failures are the
//! only fatal path.

pub mod categories;
pub mod reviews;
pub mod transactions;
pub mod window;

pub use self::categories::{resolve_categories, ResolvedProduct};
pub use self::reviews::{normalize_reviews, NormalizedReview};
pub use self::transactions::build_transactions;
pub use self::window::AnalysisWindow;
