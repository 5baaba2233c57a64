//! Repository port traits
//!
//! These traits define the interface for score storage.
//! Implementations are provided by adapters (e.g., in-memory).

use async_trait::async_trait;

use crate::domain::entities::{ReceiptId, ScoreRecord};
use crate::error::DomainError;

/// Repository for receipt scores
///
/// Records are write-once: there is no update or delete.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Store points under a freshly issued identifier
    async fn create(&self, points: u64) -> Result<ScoreRecord, DomainError>;

    /// Find the record issued for an identifier
    async fn find_by_id(&self, id: &ReceiptId) -> Result<Option<ScoreRecord>, DomainError>;
}
