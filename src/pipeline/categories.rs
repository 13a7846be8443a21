//! Category resolution: relabel products with translated category names.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::{CategoryTranslation, Product};

/// A product carrying its translated (English) category name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedProduct {
    pub product_id: String,
    pub category: String,
}

/// Inner-join products to the category translation table on the raw
/// category name.
///
/// This step is lossy: products with no category, or whose raw category
/// has no translation, are dropped and therefore never appear in any
/// category-keyed aggregate. Nothing is fabricated for them.
pub fn resolve_categories(
    products: &[Product],
    translations: &[CategoryTranslation],
) -> Vec<ResolvedProduct> {
    let english_by_raw: HashMap<&str, &str> = translations
        .iter()
        .map(|t| {
            (
                t.product_category_name.as_str(),
                t.product_category_name_english.as_str(),
            )
        })
        .collect();

    products
        .iter()
        .filter_map(|product| {
            let raw = product.product_category_name.as_deref()?;
            let english = english_by_raw.get(raw)?;
            Some(ResolvedProduct {
                product_id: product.product_id.clone(),
                category: (*english).to_string(),
            })
        })
        .collect()
}
