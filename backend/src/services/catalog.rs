//! Product catalog access for ticket processing
//!
//! All operations run on a connection borrowed from the caller so they
//! join the caller's open transaction.

use rust_decimal::Decimal;
use sqlx::PgConnection;

use crate::error::{AppError, AppResult};
use shared::models::{StockLevels, StockSystem, VariantConversion};

/// Catalog store for generic products and their variants.
///
/// Generic products carry two independent stock counters; variants map
/// an orderable unit onto those counters via an optional multiplier.
pub struct CatalogStore;

impl CatalogStore {
    /// Fetch the unit-conversion data for a product variant
    pub async fn variant_conversion(
        conn: &mut PgConnection,
        variant_id: i64,
    ) -> AppResult<VariantConversion> {
        let row = sqlx::query_as::<_, (i64, Option<Decimal>, String)>(
            r#"
            SELECT p.id_producto_generico, p.cantidad_secundaria, pg.producto_generico
            FROM productos p
            INNER JOIN productos_genericos pg ON p.id_producto_generico = pg.id_producto_generico
            WHERE p.id_producto = $1
            "#,
        )
        .bind(variant_id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product {}", variant_id)))?;

        Ok(VariantConversion {
            variant_id,
            generic_product_id: row.0,
            multiplier: row.1,
            product_name: row.2,
        })
    }

    /// Read both stock counters for a generic product
    pub async fn stock_levels(
        conn: &mut PgConnection,
        generic_product_id: i64,
    ) -> AppResult<StockLevels> {
        let row = sqlx::query_as::<_, (Decimal, Decimal)>(
            r#"
            SELECT existencia, existencia_oficialia
            FROM productos_genericos
            WHERE id_producto_generico = $1
            "#,
        )
        .bind(generic_product_id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product {}", generic_product_id)))?;

        Ok(StockLevels::new(row.0, row.1))
    }

    /// Apply a signed delta to one stock counter, leaving the other
    /// counter untouched
    pub async fn adjust_level(
        conn: &mut PgConnection,
        generic_product_id: i64,
        system: StockSystem,
        delta: Decimal,
    ) -> AppResult<()> {
        let query = match system {
            StockSystem::General => {
                r#"
                UPDATE productos_genericos
                SET existencia = existencia + $1
                WHERE id_producto_generico = $2
                "#
            }
            StockSystem::Oficialia => {
                r#"
                UPDATE productos_genericos
                SET existencia_oficialia = existencia_oficialia + $1
                WHERE id_producto_generico = $2
                "#
            }
        };

        let result = sqlx::query(query)
            .bind(delta)
            .bind(generic_product_id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Product {}", generic_product_id)));
        }

        Ok(())
    }
}
