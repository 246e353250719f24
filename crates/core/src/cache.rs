//! Product metadata cache.

use std::collections::HashMap;

use crate::types::{Product, ProductCode};

/// Flat product lookup, filled opportunistically from add requests.
///
/// Entries are overwritten, never removed. The cache does no locking of its
/// own; [`BasketStore`](crate::BasketStore) keeps it under the same lock as
/// the baskets so an add and its upsert happen together.
#[derive(Debug, Clone, Default)]
pub struct ProductCache {
    products: HashMap<ProductCode, Product>,
}

impl ProductCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `product`, replacing any earlier product with the same code.
    pub fn upsert(&mut self, product: Product) -> ProductCode {
        let code = product.product_code;
        self.products.insert(code, product);
        code
    }

    /// Look up a product by code.
    #[must_use]
    pub fn get(&self, code: ProductCode) -> Option<&Product> {
        self.products.get(&code)
    }

    /// Number of cached products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the cache holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::types::Price;

    #[test]
    fn test_upsert_returns_code() {
        let mut cache = ProductCache::new();
        let code = cache.upsert(Product::new(
            ProductCode::new(11),
            "milk",
            Price::new(dec!(1.40)),
        ));

        assert_eq!(code, ProductCode::new(11));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_upsert_last_write_wins() {
        let mut cache = ProductCache::new();
        cache.upsert(Product::new(ProductCode::new(11), "milk", Price::new(dec!(1.40))));
        cache.upsert(Product::new(
            ProductCode::new(11),
            "oat milk",
            Price::new(dec!(2.10)),
        ));

        let product = cache.get(ProductCode::new(11)).unwrap();
        assert_eq!(product.name, "oat milk");
        assert_eq!(product.unit_price, Price::new(dec!(2.10)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_missing() {
        let cache = ProductCache::new();
        assert!(cache.is_empty());
        assert!(cache.get(ProductCode::new(99)).is_none());
    }
}
