//! Error handling for the Warehouse Inventory Management Platform
//!
//! Provides consistent error responses in Spanish and English

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use shared::models::StockSystem;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_es: String,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Business logic errors
    #[error("Insufficient stock for {product}: available {available}, requested {requested}")]
    InsufficientStock {
        product: String,
        system: StockSystem,
        available: Decimal,
        requested: Decimal,
    },

    // Database errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_es: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation { field, message, message_es } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_es: message_es.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message_en: format!("{} not found", resource),
                    message_es: format!("No se encontró {}", resource),
                    field: None,
                },
            ),
            AppError::InsufficientStock { product, system, available, requested } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "INSUFFICIENT_STOCK".to_string(),
                    message_en: format!(
                        "Insufficient stock in {} for \"{}\". Available: {}, requested: {}",
                        system.as_str(),
                        product,
                        available,
                        requested
                    ),
                    message_es: format!(
                        "Stock insuficiente en {} para \"{}\". Disponible: {}, Solicitado: {}",
                        system.label(),
                        product,
                        available,
                        requested
                    ),
                    field: None,
                },
            ),
            AppError::DatabaseError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "DATABASE_ERROR".to_string(),
                    message_en: "A database error occurred".to_string(),
                    message_es: "Ocurrió un error en la base de datos".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_error_response_json_shape() {
        let response = ErrorResponse {
            error: ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message_en: "Line item 1 has incomplete data".to_string(),
                message_es: "El producto 1 tiene datos incompletos".to_string(),
                field: Some("items[0]".to_string()),
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["message_es"], "El producto 1 tiene datos incompletos");
        assert_eq!(json["error"]["field"], "items[0]");
    }

    #[test]
    fn test_absent_field_is_omitted() {
        let response = ErrorResponse {
            error: ErrorDetail {
                code: "NOT_FOUND".to_string(),
                message_en: "Product 7 not found".to_string(),
                message_es: "No se encontró Product 7".to_string(),
                field: None,
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["error"].get("field").is_none());
    }

    #[test]
    fn test_insufficient_stock_maps_to_unprocessable_entity() {
        let err = AppError::InsufficientStock {
            product: "Papel bond".to_string(),
            system: StockSystem::Oficialia,
            available: Decimal::from(3),
            requested: Decimal::from(5),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = AppError::Validation {
            field: "employee".to_string(),
            message: "Delivering and receiving employees are both required".to_string(),
            message_es: "Debe indicar el empleado que entrega y el empleado que recibe."
                .to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
