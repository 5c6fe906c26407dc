//! Entry and exit ticket models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::StockSystem;

/// Result of a successful ticket creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketReceipt {
    pub ticket_id: i64,
    pub requisition_id: i64,
}

/// A goods-receipt document increasing stock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryTicket {
    pub id: i64,
    pub requisition_id: i64,
    pub requisition_label: String,
    pub system: StockSystem,
    pub entry_date: NaiveDate,
    pub invoice_number: Option<String>,
    pub invoice_issue_date: Option<NaiveDate>,
    pub purchase_type_id: Option<i64>,
    pub supplier_id: Option<i64>,
    pub budget_line_id: Option<i64>,
    pub subtotal: Decimal,
    pub iva: Decimal,
    pub total: Decimal,
    pub observations: Option<String>,
    pub courier_id: Option<i64>,
    pub employee_id: i64,
    pub capture_status_id: Option<i64>,
    pub is_concluded: bool,
    pub items: Vec<EntryTicketItem>,
}

/// One received line on an entry ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryTicketItem {
    pub id: i64,
    pub product_variant_id: i64,
    pub product_name: String,
    pub quantity: Decimal,
    pub unit_id: i64,
    pub unit_price: Option<Decimal>,
    pub amount: Option<Decimal>,
    pub note: Option<String>,
    pub expiry_date: Option<NaiveDate>,
}

/// A goods-issue document decreasing stock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitTicket {
    pub id: i64,
    pub requisition_id: i64,
    pub requisition_label: String,
    pub system: StockSystem,
    pub exit_date: DateTime<Utc>,
    pub invoice_number: Option<String>,
    pub supplier_id: Option<i64>,
    pub area_id: Option<i64>,
    pub deliver_employee_id: i64,
    pub receive_employee_id: i64,
    pub observations: Option<String>,
    pub capture_status_id: Option<i64>,
    pub is_concluded: bool,
    pub items: Vec<ExitTicketItem>,
}

/// One dispatched line on an exit ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitTicketItem {
    pub id: i64,
    pub product_variant_id: i64,
    pub product_name: String,
    pub quantity: Decimal,
    pub unit_id: i64,
    pub is_waste: bool,
    pub note: Option<String>,
}
