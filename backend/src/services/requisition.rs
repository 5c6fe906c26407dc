//! Requisition resolution for ticket creation
//!
//! Tickets cite an upstream requisition by free-text label. Labels are
//! resolved by exact match against the direction's requisition table
//! and created lazily on first use.

use chrono::Utc;
use sqlx::PgConnection;

use crate::error::{AppError, AppResult};
use shared::models::{synthesize_exit_label, MovementDirection};
use shared::validation::normalize_requisition_label;

pub struct RequisitionResolver;

impl RequisitionResolver {
    /// Resolve an optional free-text label to a requisition id inside
    /// the caller's transaction.
    ///
    /// Entry tickets mandate an explicit label. Exit tickets submitted
    /// without one get a synthesized, unique label instead.
    pub async fn resolve(
        conn: &mut PgConnection,
        direction: MovementDirection,
        label: Option<&str>,
    ) -> AppResult<i64> {
        match normalize_requisition_label(label) {
            Some(label) => Self::find_or_create(conn, direction, label).await,
            None => match direction {
                MovementDirection::Entry => Err(AppError::Validation {
                    field: "requisition_label".to_string(),
                    message: "An entry requisition is required".to_string(),
                    message_es:
                        "La requisición de entrada es obligatoria. Por favor ingrese una requisición."
                            .to_string(),
                }),
                MovementDirection::Exit => {
                    let label = synthesize_exit_label(Utc::now());
                    let id = Self::insert(conn, direction, &label).await?;
                    tracing::debug!(requisition_id = id, label = %label, "synthesized exit requisition");
                    Ok(id)
                }
            },
        }
    }

    /// Exact-match lookup on non-deleted rows; inserts a new row when
    /// the label is unseen
    async fn find_or_create(
        conn: &mut PgConnection,
        direction: MovementDirection,
        label: &str,
    ) -> AppResult<i64> {
        if let Some(id) = Self::find_by_label(conn, direction, label).await? {
            return Ok(id);
        }
        Self::insert(conn, direction, label).await
    }

    async fn find_by_label(
        conn: &mut PgConnection,
        direction: MovementDirection,
        label: &str,
    ) -> AppResult<Option<i64>> {
        let query = match direction {
            MovementDirection::Entry => {
                r#"
                SELECT id_requisicion_de_entrada
                FROM requisiciones_de_entrada
                WHERE requisicion_de_entrada = $1 AND esta_borrado = false
                "#
            }
            MovementDirection::Exit => {
                r#"
                SELECT id_requisicion_de_salida
                FROM requisiciones_de_salida
                WHERE requisicion_de_salida = $1 AND esta_borrado = false
                "#
            }
        };

        let id = sqlx::query_scalar::<_, i64>(query)
            .bind(label)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(id)
    }

    async fn insert(
        conn: &mut PgConnection,
        direction: MovementDirection,
        label: &str,
    ) -> AppResult<i64> {
        let query = match direction {
            MovementDirection::Entry => {
                r#"
                INSERT INTO requisiciones_de_entrada (requisicion_de_entrada)
                VALUES ($1)
                RETURNING id_requisicion_de_entrada
                "#
            }
            MovementDirection::Exit => {
                r#"
                INSERT INTO requisiciones_de_salida (requisicion_de_salida)
                VALUES ($1)
                RETURNING id_requisicion_de_salida
                "#
            }
        };

        let id = sqlx::query_scalar::<_, i64>(query)
            .bind(label)
            .fetch_one(&mut *conn)
            .await?;

        Ok(id)
    }
}
