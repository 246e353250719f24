//! HTTP route handlers for the basket server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Basket
//! POST /basket/add             - Add to basket (returns basket items)
//! POST /basket/remove          - Remove from basket (returns basket items)
//! GET  /basket/{session_id}    - Basket items
//!
//! # Checkout
//! GET  /checkout/{session_id}  - Checkout summary (404 without a basket)
//! ```

pub mod basket;
pub mod checkout;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the basket routes router.
pub fn basket_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(basket::add))
        .route("/remove", post(basket::remove))
        .route("/{session_id}", get(basket::show))
}

/// Create all routes for the basket server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/basket", basket_routes())
        .route("/checkout/{session_id}", get(checkout::show))
}
