//! Product metadata.

use serde::{Deserialize, Serialize};

use super::{Price, ProductCode};

/// A product as it appears in an add request.
///
/// Products are identified solely by their code; a later product with the
/// same code replaces the earlier one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product code.
    pub product_code: ProductCode,
    /// Display name.
    pub name: String,
    /// Price of a single unit.
    pub unit_price: Price,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(product_code: ProductCode, name: impl Into<String>, unit_price: Price) -> Self {
        Self {
            product_code,
            name: name.into(),
            unit_price,
        }
    }
}
