//! Business logic services for the Warehouse Inventory Management Platform

pub mod catalog;
pub mod requisition;
pub mod stock;
pub mod stock_status;
pub mod ticket;

pub use catalog::CatalogStore;
pub use requisition::RequisitionResolver;
pub use stock::StockMutationEngine;
pub use stock_status::StockStatusService;
pub use ticket::TicketService;
