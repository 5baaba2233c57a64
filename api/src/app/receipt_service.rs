//! Receipt service
//!
//! Scores submitted receipts and serves their points back by identifier.

use std::sync::Arc;

use crate::app::scorer;
use crate::domain::entities::{Receipt, ReceiptId};
use crate::domain::ports::ScoreRepository;
use crate::error::AppError;

/// Service for processing receipts
pub struct ReceiptService<SR>
where
    SR: ScoreRepository,
{
    scores: Arc<SR>,
}

impl<SR> ReceiptService<SR>
where
    SR: ScoreRepository,
{
    pub fn new(scores: Arc<SR>) -> Self {
        Self { scores }
    }

    /// Score a receipt and record its points
    ///
    /// Nothing is stored when scoring fails.
    pub async fn process(&self, receipt: &Receipt) -> Result<ReceiptId, AppError> {
        let points = scorer::score(receipt).map_err(|e| {
            tracing::warn!("Rejected receipt from {:?}: {}", receipt.retailer, e);
            e
        })?;

        let record = self.scores.create(points).await?;
        tracing::info!(id = %record.id, points = record.points, "Processed receipt");

        Ok(record.id)
    }

    /// Look up the points awarded to a receipt
    ///
    /// A malformed id and an unknown id are indistinguishable to the caller.
    pub async fn points(&self, raw_id: &str) -> Result<u64, AppError> {
        let not_found = || AppError::NotFound(format!("no points for id {}", raw_id));

        let id: ReceiptId = raw_id.parse().map_err(|_| not_found())?;
        let record = self.scores.find_by_id(&id).await?.ok_or_else(not_found)?;

        Ok(record.points)
    }
}
