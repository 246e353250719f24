//! Request and response shapes exchanged with the basket engine.

use serde::{Deserialize, Serialize};

use super::{Price, Product, ProductCode, SessionId};

/// Number of units of a product.
///
/// Signed on purpose: the engine adds counts arithmetically and leaves
/// positivity checks to the caller.
pub type Quantity = i32;

/// An update to a session's basket, used for both adding and removing.
///
/// When removing, only `product.product_code` is consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketUpdateRequest {
    pub session_id: SessionId,
    pub product: Product,
    pub count: Quantity,
}

impl BasketUpdateRequest {
    /// Create a new update request.
    #[must_use]
    pub const fn new(session_id: SessionId, product: Product, count: Quantity) -> Self {
        Self {
            session_id,
            product,
            count,
        }
    }
}

/// A line of a basket as returned to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub product_code: ProductCode,
    pub quantity: Quantity,
}

impl Item {
    /// Create a new item.
    #[must_use]
    pub const fn new(product_code: ProductCode, quantity: Quantity) -> Self {
        Self {
            product_code,
            quantity,
        }
    }
}

/// A basket line joined with its product metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketItem {
    pub product: Product,
    pub quantity: Quantity,
}

impl BasketItem {
    /// Create a new basket item.
    #[must_use]
    pub const fn new(product: Product, quantity: Quantity) -> Self {
        Self { product, quantity }
    }
}

/// Summary of a basket at checkout time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResult {
    /// Every line in the basket, in insertion order.
    pub all_items_in_basket: Vec<BasketItem>,
    /// Lines with their quantities reduced by the discount.
    pub items_to_pay_for: Vec<BasketItem>,
    pub final_price_including_discount: Price,
}
