//! Errors raised by the basket engine.
//!
//! Missing sessions and missing products are not errors; they come back as
//! empty lists or `None`. Everything here indicates a broken precondition.

use thiserror::Error;

use crate::types::{ProductCode, SessionId};

/// Basket engine error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BasketError {
    /// Adding or removing the requested count overflowed the line quantity.
    #[error("quantity overflow for product {product_code} in session {session_id}")]
    QuantityOverflow {
        session_id: SessionId,
        product_code: ProductCode,
    },

    /// The checkout total does not fit in a decimal.
    #[error("price overflow at checkout for session {0}")]
    PriceOverflow(SessionId),

    /// A thread panicked while holding the store lock.
    #[error("basket store lock poisoned")]
    LockPoisoned,
}

/// Result type alias for `BasketError`.
pub type Result<T> = std::result::Result<T, BasketError>;
