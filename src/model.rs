//! Typed row structs for the seven flat source tables and the derived
//! transaction row.
//!
//! Raw timestamps stay as strings at load time; the lenient date parse
//! happens in the pipeline stages, so a malformed timestamp never fails
//! a load. Free-text fields (review titles and comments) are carried as
//! opaque text, untranslated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Customer reference row. Immutable snapshot; geographic attributes are
/// carried but not consumed by any aggregate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    #[serde(default)]
    pub customer_city: Option<String>,
    #[serde(default)]
    pub customer_state: Option<String>,
}

/// Order row. `order_id` is unique; the delivered timestamp may be absent
/// for undelivered or unparseable orders.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
    #[serde(default)]
    pub order_status: Option<String>,
    pub order_purchase_timestamp: String,
    #[serde(default)]
    pub order_delivered_customer_date: Option<String>,
}

/// Payment installment row. `order_id` is non-unique: an order may be paid
/// in several installments, each its own row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Payment {
    pub order_id: String,
    #[serde(default)]
    pub payment_sequential: Option<u32>,
    #[serde(default)]
    pub payment_type: Option<String>,
    #[serde(default)]
    pub payment_installments: Option<u32>,
    pub payment_value: f64,
}

/// Raw customer review row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub review_id: Option<String>,
    pub order_id: String,
    pub review_score: u8,
    #[serde(default)]
    pub review_comment_title: Option<String>,
    #[serde(default)]
    pub review_comment_message: Option<String>,
    pub review_creation_date: String,
}

/// Product row with its raw (source-language) category label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub product_id: String,
    #[serde(default)]
    pub product_category_name: Option<String>,
}

/// Order line item, the many-to-many bridge between orders and products.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderItem {
    pub order_id: String,
    #[serde(default)]
    pub order_item_id: Option<u32>,
    pub product_id: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub freight_value: Option<f64>,
}

/// Category relabeling row: raw category name to its English translation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryTranslation {
    pub product_category_name: String,
    pub product_category_name_english: String,
}

/// One row per (order, payment) pair surviving the inner join, with the
/// normalized date fields derived from the raw timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub order_id: String,
    pub customer_id: String,
    pub payment_value: f64,
    pub order_date: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
}
