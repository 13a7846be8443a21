//! CSV dataset loader.
//!
//! Loading is fatal-strict and row-lenient: a missing source file or a
//! source with zero columns aborts the run, but no row-level validation
//! happens here. Raw timestamps are kept as strings so that malformed
//! values survive the load and degrade to null dates later.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use serde::de::DeserializeOwned;

use crate::config::AnalysisConfig;
use crate::error::{Error, Result};
use crate::model::{
    CategoryTranslation, Customer, Order, OrderItem, Payment, Product, Review,
};

/// Read one source table into typed records.
///
/// `name` identifies the source in error messages. Extra columns in the
/// file are ignored; missing optional columns deserialize to `None`.
pub fn read_records<T, P>(name: &str, path: P) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::MissingSource {
            name: name.to_string(),
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(Error::Io)?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = rdr.headers().map_err(Error::Csv)?;
    if headers.is_empty() {
        return Err(Error::EmptyTable(name.to_string()));
    }

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: T = result.map_err(Error::Csv)?;
        rows.push(record);
    }
    Ok(rows)
}

/// The seven source tables loaded as immutable in-memory snapshots.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
    pub reviews: Vec<Review>,
    pub payments: Vec<Payment>,
    pub products: Vec<Product>,
    pub order_items: Vec<OrderItem>,
    pub category_translations: Vec<CategoryTranslation>,
}

impl Datasets {
    /// Load every source table named by the configuration.
    ///
    /// Any missing or structurally unreadable source is fatal.
    pub fn load(config: &AnalysisConfig) -> Result<Datasets> {
        let sources = &config.sources;
        Ok(Datasets {
            customers: read_records("customers", config.source_path(&sources.customers))?,
            orders: read_records("orders", config.source_path(&sources.orders))?,
            reviews: read_records("reviews", config.source_path(&sources.reviews))?,
            payments: read_records("payments", config.source_path(&sources.payments))?,
            products: read_records("products", config.source_path(&sources.products))?,
            order_items: read_records("order_items", config.source_path(&sources.order_items))?,
            category_translations: read_records(
                "category_translation",
                config.source_path(&sources.category_translation),
            )?,
        })
    }
}
