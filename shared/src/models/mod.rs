//! Domain models for the Warehouse Inventory Management Platform

mod product;
mod requisition;
mod stock;
mod ticket;

pub use product::*;
pub use requisition::*;
pub use stock::*;
pub use ticket::*;
