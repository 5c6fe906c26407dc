//! Stock mutation engine
//!
//! Applies one ticket line item to the correct stock counter: converts
//! the reported quantity to base units, validates availability for
//! exits, and updates the counter with a relative delta inside the
//! caller's transaction.

use rust_decimal::Decimal;
use sqlx::PgConnection;

use crate::error::{AppError, AppResult};
use crate::services::catalog::CatalogStore;
use shared::models::{MovementDirection, StockSystem};

pub struct StockMutationEngine;

impl StockMutationEngine {
    /// Apply a single line item to the target system's counter.
    ///
    /// Exits validate availability before updating and fail with an
    /// insufficient-stock error that aborts the enclosing transaction.
    /// Entries apply unconditionally, so a negative counter can move
    /// back toward zero. The other system's counter is never touched.
    pub async fn apply_line_item(
        conn: &mut PgConnection,
        direction: MovementDirection,
        system: StockSystem,
        product_variant_id: i64,
        reported_quantity: Decimal,
    ) -> AppResult<()> {
        let conversion = CatalogStore::variant_conversion(conn, product_variant_id).await?;
        let base_quantity = conversion.base_quantity(reported_quantity);

        if direction == MovementDirection::Exit {
            let levels = CatalogStore::stock_levels(conn, conversion.generic_product_id).await?;
            let available = levels.level_for(system);
            if available < base_quantity {
                return Err(AppError::InsufficientStock {
                    product: conversion.product_name,
                    system,
                    available,
                    requested: base_quantity,
                });
            }
        }

        CatalogStore::adjust_level(
            conn,
            conversion.generic_product_id,
            system,
            direction.signed_delta(base_quantity),
        )
        .await?;

        tracing::debug!(
            product_variant_id,
            generic_product_id = conversion.generic_product_id,
            system = %system,
            direction = direction.as_str(),
            %base_quantity,
            "stock counter updated"
        );

        Ok(())
    }
}
