//! Basket route handlers.
//!
//! Handlers pass requests straight through to the shared store; no count
//! validation happens here.

use axum::{
    Json,
    extract::{Path, State},
};
use basket_core::{BasketUpdateRequest, Item, SessionId};
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Add items to a session's basket.
///
/// Returns the basket after the update.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<BasketUpdateRequest>,
) -> Result<Json<Vec<Item>>> {
    let items = state.store().apply_add(request)?;
    Ok(Json(items))
}

/// Remove items from a session's basket.
///
/// Returns the basket after the update, empty if the session has none left.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Json(request): Json<BasketUpdateRequest>,
) -> Result<Json<Vec<Item>>> {
    let items = state.store().apply_remove(&request)?;
    Ok(Json(items))
}

/// Show a session's basket.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
) -> Result<Json<Vec<Item>>> {
    let items = state.store().get_basket(session_id)?;
    Ok(Json(items))
}
