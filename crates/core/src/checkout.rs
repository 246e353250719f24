//! Checkout calculation.
//!
//! The store runs a single promotion: buy two of anything, pay for one. An
//! odd unit out is always paid for, so the payable count is `ceil(n / 2)`.

use tracing::warn;

use crate::cache::ProductCache;
use crate::error::{BasketError, Result};
use crate::types::{BasketItem, CheckoutResult, Item, Price, Quantity, SessionId};

/// Number of units the customer pays for when holding `quantity` units.
///
/// Non-positive quantities pay for nothing.
///
/// ```rust
/// # use basket_core::checkout::discounted_count;
/// assert_eq!(discounted_count(4), 2);
/// assert_eq!(discounted_count(3), 2);
/// assert_eq!(discounted_count(1), 1);
/// assert_eq!(discounted_count(0), 0);
/// ```
#[must_use]
pub const fn discounted_count(quantity: Quantity) -> Quantity {
    if quantity <= 0 {
        return 0;
    }
    quantity / 2 + quantity % 2
}

/// Build the checkout summary for one basket.
///
/// `lines` must be in insertion order; the output preserves it.
///
/// # Errors
///
/// Returns `BasketError::PriceOverflow` if a line total or the grand total
/// does not fit in a decimal.
pub fn calculate(
    session_id: SessionId,
    lines: &[Item],
    products: &ProductCache,
) -> Result<CheckoutResult> {
    let mut all_items_in_basket = Vec::with_capacity(lines.len());
    let mut items_to_pay_for = Vec::with_capacity(lines.len());
    let mut total = Price::ZERO;

    for line in lines {
        // Every add upserts its product first, so a miss means the cache and
        // the basket disagree.
        let Some(product) = products.get(line.product_code) else {
            warn!(
                session_id = %session_id,
                product_code = %line.product_code,
                "Basket line has no cached product, skipping"
            );
            continue;
        };

        all_items_in_basket.push(BasketItem::new(product.clone(), line.quantity));

        let payable = discounted_count(line.quantity);
        if payable > 0 {
            total = product
                .unit_price
                .checked_times(payable)
                .and_then(|line_total| total.checked_add(line_total))
                .ok_or(BasketError::PriceOverflow(session_id))?;
            items_to_pay_for.push(BasketItem::new(product.clone(), payable));
        }
    }

    Ok(CheckoutResult {
        all_items_in_basket,
        items_to_pay_for,
        final_price_including_discount: total,
    })
}
