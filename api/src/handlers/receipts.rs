//! Receipt handlers
//!
//! Endpoints for submitting receipts and reading back their points.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::Uri,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Item, Receipt};
use crate::error::{AppError, DomainError};
use crate::AppState;

/// Line item in a receipt submission
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    pub short_description: String,
    pub price: String,
}

/// Request body for receipt processing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessReceiptRequest {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<ItemRequest>,
    pub total: String,
}

impl TryFrom<ProcessReceiptRequest> for Receipt {
    type Error = DomainError;

    fn try_from(request: ProcessReceiptRequest) -> Result<Self, Self::Error> {
        if request.items.is_empty() {
            return Err(DomainError::Validation(
                "receipt must contain at least one item".to_string(),
            ));
        }

        Ok(Receipt {
            retailer: request.retailer,
            purchase_date: request.purchase_date,
            purchase_time: request.purchase_time,
            items: request
                .items
                .into_iter()
                .map(|i| Item {
                    short_description: i.short_description,
                    price: i.price,
                })
                .collect(),
            total: request.total,
        })
    }
}

/// Response body for receipt processing
#[derive(Debug, Serialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// Response body for a points lookup
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// POST /receipts/process
///
/// Score a receipt and return the identifier its points are stored under.
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<ProcessReceiptRequest>, JsonRejection>,
) -> Result<Json<ProcessReceiptResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Malformed receipt body: {}", rejection.body_text());
        AppError::BadRequest(rejection.body_text())
    })?;
    let receipt = Receipt::try_from(request)?;

    let id = state.receipt_service.process(&receipt).await?;

    Ok(Json(ProcessReceiptResponse { id: id.to_string() }))
}

/// GET /receipts/:id/points
///
/// Return the points awarded to a processed receipt.
///
/// An id that cannot be decoded is reported like any other unknown id.
pub async fn get_points(
    State(state): State<AppState>,
    uri: Uri,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<PointsResponse>, AppError> {
    let Path(id) = id.map_err(|rejection| {
        tracing::warn!("Undecodable receipt id: {}", rejection.body_text());
        AppError::NotFound(format!("no points for id {}", raw_id_segment(&uri)))
    })?;

    let points = state.receipt_service.points(&id).await?;
    Ok(Json(PointsResponse { points }))
}

/// The still-encoded id segment of `/receipts/:id/points`
fn raw_id_segment(uri: &Uri) -> &str {
    uri.path()
        .trim_start_matches('/')
        .split('/')
        .nth(1)
        .unwrap_or_default()
}
