//! Product catalog models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{base_quantity, StockStatus, StockSystem};

/// Unit-conversion view of a product variant.
///
/// A variant is one orderable presentation of a generic product
/// (e.g. "box of 12"); the multiplier maps one reported unit to
/// base units on the generic-product counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantConversion {
    pub variant_id: i64,
    pub generic_product_id: i64,
    pub product_name: String,
    /// Base units per reported unit; `None` means the variant is
    /// already tracked in base units
    pub multiplier: Option<Decimal>,
}

impl VariantConversion {
    /// Convert a reported quantity to base units for this variant
    pub fn base_quantity(&self, reported: Decimal) -> Decimal {
        base_quantity(reported, self.multiplier)
    }
}

/// Stock health view of a single generic product under one system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductStockStatus {
    pub generic_product_id: i64,
    pub product_name: String,
    pub system: StockSystem,
    pub stock_general: Decimal,
    pub stock_oficialia: Decimal,
    pub stock_total: Decimal,
    pub stock_min: i32,
    pub stock_suggested: i32,
    pub status: StockStatus,
    /// Active-system counter as a percentage of the suggested level
    pub stock_percentage: Decimal,
}
