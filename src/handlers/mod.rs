//! HTTP handlers for clients and orders.

pub mod clients;
pub mod orders;
