//! # Receipt Routes
//!
//! HTTP handlers. Each one is a thin shell over `receipt-core` and the
//! [`ReceiptStore`](crate::store::ReceiptStore).
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /receipts/process                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Json<ReceiptSubmission> ──► validate_receipt ──► breakdown/total       │
//! │                                                        │                │
//! │                                                        ▼                │
//! │                          { "id" } ◄── store.insert ◄── ids.generate     │
//! │                                                                         │
//! │  GET /receipts/{id}/points                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.get(id) ──► Some(points) ──► { "points" }                        │
//! │                └─► None ──────────► 404 { "msg" }                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use receipt_core::{breakdown, validate_receipt, Points, ReceiptSubmission};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Response to a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// Response to a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Points,
}

/// Response of the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub receipts: usize,
    pub server_time: String,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(receipt_points))
        .route("/health", get(health))
        .with_state(state)
}

/// Validates, scores and stores a receipt.
async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<ReceiptSubmission>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(submission) = payload?;
    let receipt = validate_receipt(&submission)?;

    let points_breakdown = breakdown(&receipt)?;
    let points = points_breakdown.total()?;

    let id = state.ids.generate();
    state.store.insert(&id, points)?;

    info!(
        id = %id,
        points,
        retailer = %receipt.retailer,
        items = receipt.items.len(),
        total = %receipt.total,
        "Receipt processed"
    );
    debug!(id = %id, ?points_breakdown, "Points breakdown");

    Ok(Json(ProcessResponse { id }))
}

/// Returns the points stored for a receipt.
async fn receipt_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    match state.store.get(&id)? {
        Some(points) => {
            debug!(id = %id, points, "Points lookup");
            Ok(Json(PointsResponse { points }))
        }
        None => {
            debug!(id = %id, "Unknown receipt id");
            Err(ApiError::NotFound)
        }
    }
}

/// Liveness check.
async fn health(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        receipts: state.store.count()?,
        server_time: Utc::now().to_rfc3339(),
    }))
}
