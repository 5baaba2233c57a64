//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod receipt;

pub use receipt::{Item, Receipt, ReceiptId, ScoreRecord};
