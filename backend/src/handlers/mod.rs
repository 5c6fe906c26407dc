//! HTTP handlers for the Warehouse Inventory Management Platform

pub mod health;
pub mod stock_status;
pub mod ticket;

pub use health::health_check;
pub use stock_status::list_critical_stock;
pub use ticket::{create_entry_ticket, create_exit_ticket, get_entry_ticket, get_exit_ticket};
