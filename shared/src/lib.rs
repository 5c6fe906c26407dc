//! Shared types and models for the Warehouse Inventory Management Platform
//!
//! This crate contains the domain types shared between the backend and
//! other components of the system.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
