//! In-memory adapter for ScoreRepository

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{ReceiptId, ScoreRecord};
use crate::domain::ports::ScoreRepository;
use crate::error::DomainError;

/// Process-lifetime score table
///
/// The lock is held for a single insert or read and never across an await
/// on anything else.
#[derive(Default)]
pub struct InMemoryScoreRepository {
    scores: RwLock<HashMap<ReceiptId, u64>>,
}

impl InMemoryScoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records issued so far
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.scores.read().await.len()
    }
}

#[async_trait]
impl ScoreRepository for InMemoryScoreRepository {
    async fn create(&self, points: u64) -> Result<ScoreRecord, DomainError> {
        let mut scores = self.scores.write().await;

        // v4 collisions are practically impossible, but an issued id is never reused
        loop {
            let id = ReceiptId::new();
            if let Entry::Vacant(slot) = scores.entry(id) {
                slot.insert(points);
                return Ok(ScoreRecord { id, points });
            }
            tracing::warn!("Receipt id collision on {}, regenerating", id);
        }
    }

    async fn find_by_id(&self, id: &ReceiptId) -> Result<Option<ScoreRecord>, DomainError> {
        let scores = self.scores.read().await;
        Ok(scores
            .get(id)
            .map(|&points| ScoreRecord { id: *id, points }))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn create_then_find() {
        let repo = InMemoryScoreRepository::new();

        let record = repo.create(28).await.unwrap();
        let found = repo.find_by_id(&record.id).await.unwrap();

        assert_eq!(found, Some(ScoreRecord { id: record.id, points: 28 }));
    }

    #[tokio::test]
    async fn find_unknown_id_returns_none() {
        let repo = InMemoryScoreRepository::new();
        repo.create(10).await.unwrap();

        let found = repo.find_by_id(&ReceiptId::new()).await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn each_create_issues_a_new_id() {
        let repo = InMemoryScoreRepository::new();

        let first = repo.create(5).await.unwrap();
        let second = repo.create(5).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn reads_do_not_mutate() {
        let repo = InMemoryScoreRepository::new();
        let record = repo.create(109).await.unwrap();

        for _ in 0..3 {
            let found = repo.find_by_id(&record.id).await.unwrap();
            assert_eq!(found.map(|r| r.points), Some(109));
        }
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_are_all_retrievable() {
        let repo = Arc::new(InMemoryScoreRepository::new());

        let handles: Vec<_> = (0..64u64)
            .map(|points| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(points).await.unwrap() })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let record = handle.await.unwrap();
            assert!(ids.insert(record.id));
            let found = repo.find_by_id(&record.id).await.unwrap();
            assert_eq!(found.map(|r| r.points), Some(record.points));
        }
        assert_eq!(repo.len().await, 64);
    }
}
