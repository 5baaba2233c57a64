//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the scorer.

pub mod points_config;
pub mod receipt_service;
pub mod scorer;

pub use receipt_service::ReceiptService;
