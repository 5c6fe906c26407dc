//! HTTP handlers for ticket creation and read-back

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::services::ticket::{
    CreateEntryTicketInput, CreateExitTicketInput, CreateTicketInput, TicketService,
};
use crate::AppState;
use shared::models::{EntryTicket, ExitTicket, TicketReceipt};

/// Create an entry ticket (vale de entrada)
pub async fn create_entry_ticket(
    State(state): State<AppState>,
    Json(input): Json<CreateEntryTicketInput>,
) -> AppResult<(StatusCode, Json<TicketReceipt>)> {
    let service = TicketService::new(state.db);
    let receipt = service
        .create_ticket(CreateTicketInput::Entry(input))
        .await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// Create an exit ticket (vale de salida)
pub async fn create_exit_ticket(
    State(state): State<AppState>,
    Json(input): Json<CreateExitTicketInput>,
) -> AppResult<(StatusCode, Json<TicketReceipt>)> {
    let service = TicketService::new(state.db);
    let receipt = service
        .create_ticket(CreateTicketInput::Exit(input))
        .await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// Get an entry ticket with its line items
pub async fn get_entry_ticket(
    State(state): State<AppState>,
    Path(ticket_id): Path<i64>,
) -> AppResult<Json<EntryTicket>> {
    let service = TicketService::new(state.db);
    let ticket = service.get_entry_ticket(ticket_id).await?;
    Ok(Json(ticket))
}

/// Get an exit ticket with its line items
pub async fn get_exit_ticket(
    State(state): State<AppState>,
    Path(ticket_id): Path<i64>,
) -> AppResult<Json<ExitTicket>> {
    let service = TicketService::new(state.db);
    let ticket = service.get_exit_ticket(ticket_id).await?;
    Ok(Json(ticket))
}
