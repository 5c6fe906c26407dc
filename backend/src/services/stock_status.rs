//! Read-side stock status report ("productos críticos")
//!
//! Write paths never block negative or low counters; this report is
//! where they surface. Classification runs in Rust via the shared
//! `classify_stock` function so the thresholds live in one place.

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::error::AppResult;
use shared::models::{
    classify_stock, stock_percentage, ProductStockStatus, StockStatus, StockSystem,
};

/// Stock status service for threshold reporting
#[derive(Clone)]
pub struct StockStatusService {
    db: PgPool,
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id_producto_generico: i64,
    producto_generico: String,
    existencia: Decimal,
    existencia_oficialia: Decimal,
    stock_min: i32,
    stock_sugerido: i32,
}

impl StockStatusService {
    /// Create a new StockStatusService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List products whose counter under the given system needs
    /// attention: negative existences and products at or below 49% of
    /// their suggested stock, worst first.
    pub async fn list_critical(&self, system: StockSystem) -> AppResult<Vec<ProductStockStatus>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id_producto_generico, producto_generico, existencia,
                   existencia_oficialia, stock_min, stock_sugerido
            FROM productos_genericos
            WHERE esta_borrado = false
            ORDER BY producto_generico ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let mut report: Vec<ProductStockStatus> = rows
            .into_iter()
            .map(|row| row.into_status(system))
            .filter(|p| {
                matches!(
                    p.status,
                    StockStatus::Negative | StockStatus::Critical | StockStatus::Low
                )
            })
            .collect();

        report.sort_by(|a, b| {
            severity_rank(a.status)
                .cmp(&severity_rank(b.status))
                .then(a.stock_percentage.cmp(&b.stock_percentage))
        });

        Ok(report)
    }
}

impl ProductRow {
    fn into_status(self, system: StockSystem) -> ProductStockStatus {
        let level = match system {
            StockSystem::General => self.existencia,
            StockSystem::Oficialia => self.existencia_oficialia,
        };
        ProductStockStatus {
            generic_product_id: self.id_producto_generico,
            product_name: self.producto_generico,
            system,
            stock_general: self.existencia,
            stock_oficialia: self.existencia_oficialia,
            stock_total: self.existencia + self.existencia_oficialia,
            stock_min: self.stock_min,
            stock_suggested: self.stock_sugerido,
            status: classify_stock(level, self.stock_sugerido),
            stock_percentage: stock_percentage(level, self.stock_sugerido),
        }
    }
}

fn severity_rank(status: StockStatus) -> u8 {
    match status {
        StockStatus::Negative => 0,
        StockStatus::Critical => 1,
        StockStatus::Low => 2,
        StockStatus::Medium => 3,
        StockStatus::Good => 4,
    }
}
