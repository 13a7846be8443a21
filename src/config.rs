//! Configuration for an analysis run: where the source snapshots live and
//! which date window the report covers.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pipeline::AnalysisWindow;

/// File names of the seven source tables, relative to the data directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFiles {
    pub customers: String,
    pub orders: String,
    pub reviews: String,
    pub payments: String,
    pub products: String,
    pub order_items: String,
    pub category_translation: String,
}

impl Default for SourceFiles {
    fn default() -> Self {
        SourceFiles {
            customers: "olist_customers_dataset.csv".to_string(),
            orders: "olist_orders_dataset.csv".to_string(),
            reviews: "olist_order_reviews_dataset.csv".to_string(),
            payments: "olist_order_payments_dataset.csv".to_string(),
            products: "olist_products_dataset.csv".to_string(),
            order_items: "olist_order_items_dataset.csv".to_string(),
            category_translation: "product_category_name_translation.csv".to_string(),
        }
    }
}

/// Configuration for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Directory holding the source CSV snapshots
    pub data_dir: PathBuf,
    /// Source file names within `data_dir`
    pub sources: SourceFiles,
    /// Lower bound of the analysis window (inclusive)
    pub window_start: NaiveDate,
    /// Upper bound of the analysis window (inclusive)
    pub window_end: NaiveDate,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        // The report's fixed window: 2017-01-01 through 2018-09-30.
        AnalysisConfig {
            data_dir: PathBuf::from("data"),
            sources: SourceFiles::default(),
            window_start: NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
            window_end: NaiveDate::from_ymd_opt(2018, 9, 30).unwrap(),
        }
    }
}

impl AnalysisConfig {
    /// Create a configuration with explicit window bounds.
    pub fn new<P: AsRef<Path>>(
        data_dir: P,
        window_start: NaiveDate,
        window_end: NaiveDate,
    ) -> Result<Self> {
        let config = AnalysisConfig {
            data_dir: data_dir.as_ref().to_path_buf(),
            sources: SourceFiles::default(),
            window_start,
            window_end,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the window bounds are ordered.
    pub fn validate(&self) -> Result<()> {
        if self.window_start > self.window_end {
            return Err(Error::InvalidConfig(format!(
                "window start {} is after window end {}",
                self.window_start, self.window_end
            )));
        }
        Ok(())
    }

    /// The analysis window described by this configuration.
    pub fn window(&self) -> Result<AnalysisWindow> {
        AnalysisWindow::new(self.window_start, self.window_end)
    }

    /// Absolute path of one source file.
    pub fn source_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_bounds() {
        let config = AnalysisConfig::default();
        assert_eq!(config.window_start, NaiveDate::from_ymd_opt(2017, 1, 1).unwrap());
        assert_eq!(config.window_end, NaiveDate::from_ymd_opt(2018, 9, 30).unwrap());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reversed_bounds_rejected() {
        let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
        let result = AnalysisConfig::new("data", start, end);
        assert!(result.is_err());
    }
}
