//! HTTP handlers for stock status reporting

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::stock_status::StockStatusService;
use crate::AppState;
use shared::models::{ProductStockStatus, StockSystem};

#[derive(Deserialize)]
pub struct CriticalStockQuery {
    /// Stock pool to report on; defaults to the general warehouse
    pub system: Option<StockSystem>,
}

/// List products with negative or critically low stock
pub async fn list_critical_stock(
    State(state): State<AppState>,
    Query(query): Query<CriticalStockQuery>,
) -> AppResult<Json<Vec<ProductStockStatus>>> {
    let service = StockStatusService::new(state.db);
    let system = query.system.unwrap_or(StockSystem::General);
    let report = service.list_critical(system).await?;
    Ok(Json(report))
}
