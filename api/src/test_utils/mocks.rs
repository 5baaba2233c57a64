//! Mock implementations of port traits

use async_trait::async_trait;

use crate::domain::entities::{ReceiptId, ScoreRecord};
use crate::domain::ports::ScoreRepository;
use crate::error::DomainError;

/// Score repository whose backend is always down
pub struct FailingScoreRepository;

#[async_trait]
impl ScoreRepository for FailingScoreRepository {
    async fn create(&self, _points: u64) -> Result<ScoreRecord, DomainError> {
        Err(DomainError::Storage("backend unavailable".to_string()))
    }

    async fn find_by_id(&self, _id: &ReceiptId) -> Result<Option<ScoreRecord>, DomainError> {
        Err(DomainError::Storage("backend unavailable".to_string()))
    }
}
