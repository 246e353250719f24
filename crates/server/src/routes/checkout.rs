//! Checkout route handler.

use axum::{
    Json,
    extract::{Path, State},
};
use basket_core::{CheckoutResult, SessionId};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Price a session's basket with the discount applied.
///
/// Responds 404 when the session has no basket.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
) -> Result<Json<CheckoutResult>> {
    let checkout = state
        .store()
        .calculate_checkout(session_id)?
        .ok_or_else(|| AppError::NotFound(format!("basket for session {session_id}")))?;

    tracing::info!(
        session_id = %session_id,
        total = %checkout.final_price_including_discount,
        "Checkout calculated"
    );

    Ok(Json(checkout))
}
