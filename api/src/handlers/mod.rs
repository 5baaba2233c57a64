//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod health;
pub mod receipts;

pub use health::health;
pub use receipts::{get_points, process_receipt};
