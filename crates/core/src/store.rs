//! Shared in-memory basket store.
//!
//! All baskets and the product cache sit behind one reader/writer lock.
//! Mutations take the write side for their whole read-modify-write, including
//! the product upsert, so concurrent callers can never interleave inside an
//! update. Reads take the read side and always see a whole update or none of it.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;
use tracing::debug;

use crate::cache::ProductCache;
use crate::checkout;
use crate::error::{BasketError, Result};
use crate::types::{
    BasketUpdateRequest, CheckoutResult, Item, Product, ProductCode, Quantity, SessionId,
};

/// One session's basket: lines in the order they were first added.
#[derive(Debug, Clone, Default)]
struct Basket {
    lines: Vec<Item>,
}

impl Basket {
    fn line_mut(&mut self, product_code: ProductCode) -> Option<&mut Item> {
        self.lines
            .iter_mut()
            .find(|line| line.product_code == product_code)
    }

    fn quantity_of(&self, product_code: ProductCode) -> Option<Quantity> {
        self.lines
            .iter()
            .find(|line| line.product_code == product_code)
            .map(|line| line.quantity)
    }

    fn items(&self) -> Vec<Item> {
        self.lines.clone()
    }
}

#[derive(Debug, Default)]
struct StoreInner {
    baskets: HashMap<SessionId, Basket>,
    products: ProductCache,
}

/// Point-in-time copy of every stored basket, for inspection.
///
/// Sessions are ordered by id; lines keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BasketSnapshot {
    sessions: BTreeMap<SessionId, Vec<Item>>,
}

impl BasketSnapshot {
    /// Lines of one session, if it has a basket.
    #[must_use]
    pub fn get(&self, session_id: SessionId) -> Option<&[Item]> {
        self.sessions.get(&session_id).map(Vec::as_slice)
    }

    /// Whether the session has a stored basket.
    #[must_use]
    pub fn contains(&self, session_id: SessionId) -> bool {
        self.sessions.contains_key(&session_id)
    }

    /// Number of sessions with a basket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session has a basket.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Iterate over sessions in id order.
    pub fn iter(&self) -> impl Iterator<Item = (SessionId, &[Item])> {
        self.sessions
            .iter()
            .map(|(session_id, items)| (*session_id, items.as_slice()))
    }
}

/// Per-session baskets plus the product cache they are priced from.
///
/// Cloning is cheap and yields a handle onto the same baskets. Construct one
/// store per isolation domain (one per server, one per test).
#[derive(Debug, Clone, Default)]
pub struct BasketStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl BasketStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreInner>> {
        self.inner.read().map_err(|_| BasketError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreInner>> {
        self.inner.write().map_err(|_| BasketError::LockPoisoned)
    }

    /// Add `quantity` units of `product` to a session's basket.
    ///
    /// The product is upserted into the cache. An existing line is
    /// incremented in place; otherwise a new line is appended. `quantity` is
    /// added as-is, so zero or negative counts reduce the line without
    /// pruning it.
    ///
    /// Returns the session's basket after the update.
    ///
    /// # Errors
    ///
    /// Returns `BasketError::QuantityOverflow` if the new line quantity does
    /// not fit, leaving the store untouched, or `BasketError::LockPoisoned`.
    pub fn add_item(
        &self,
        session_id: SessionId,
        product: Product,
        quantity: Quantity,
    ) -> Result<Vec<Item>> {
        let product_code = product.product_code;
        let mut inner = self.write()?;

        let new_quantity = match inner
            .baskets
            .get(&session_id)
            .and_then(|basket| basket.quantity_of(product_code))
        {
            Some(held) => held
                .checked_add(quantity)
                .ok_or(BasketError::QuantityOverflow {
                    session_id,
                    product_code,
                })?,
            None => quantity,
        };

        inner.products.upsert(product);

        let basket = inner.baskets.entry(session_id).or_default();
        match basket.line_mut(product_code) {
            Some(line) => line.quantity = new_quantity,
            None => basket.lines.push(Item::new(product_code, new_quantity)),
        }

        debug!(
            session_id = %session_id,
            product_code = %product_code,
            quantity = new_quantity,
            "Added item to basket"
        );

        Ok(basket.items())
    }

    /// Remove up to `quantity` units of a product from a session's basket.
    ///
    /// Removing at least the held quantity deletes the line, and deleting the
    /// last line deletes the session's basket. A missing session yields an
    /// empty list; a product that is not in the basket leaves it unchanged.
    ///
    /// Returns the session's basket after the update.
    ///
    /// # Errors
    ///
    /// Returns `BasketError::QuantityOverflow` if a negative `quantity` would
    /// grow the line past `Quantity::MAX`, leaving the store untouched, or
    /// `BasketError::LockPoisoned`.
    pub fn remove_item(
        &self,
        session_id: SessionId,
        product_code: ProductCode,
        quantity: Quantity,
    ) -> Result<Vec<Item>> {
        let mut inner = self.write()?;

        let Some(basket) = inner.baskets.get_mut(&session_id) else {
            return Ok(Vec::new());
        };
        let Some(held) = basket.quantity_of(product_code) else {
            return Ok(basket.items());
        };

        // Widened so the delete decision never overflows
        let remaining = i64::from(held) - i64::from(quantity);

        if remaining > 0 {
            let remaining =
                Quantity::try_from(remaining).map_err(|_| BasketError::QuantityOverflow {
                    session_id,
                    product_code,
                })?;
            if let Some(line) = basket.line_mut(product_code) {
                line.quantity = remaining;
            }
            debug!(
                session_id = %session_id,
                product_code = %product_code,
                quantity = remaining,
                "Reduced basket line"
            );
            return Ok(basket.items());
        }

        basket.lines.retain(|line| line.product_code != product_code);
        debug!(
            session_id = %session_id,
            product_code = %product_code,
            "Removed basket line"
        );

        if basket.lines.is_empty() {
            inner.baskets.remove(&session_id);
            debug!(session_id = %session_id, "Basket emptied, session dropped");
            return Ok(Vec::new());
        }

        Ok(basket.items())
    }

    /// Apply an add request.
    ///
    /// # Errors
    ///
    /// See [`BasketStore::add_item`].
    pub fn apply_add(&self, request: BasketUpdateRequest) -> Result<Vec<Item>> {
        self.add_item(request.session_id, request.product, request.count)
    }

    /// Apply a remove request. Only the product code of the request's
    /// product is used.
    ///
    /// # Errors
    ///
    /// See [`BasketStore::remove_item`].
    pub fn apply_remove(&self, request: &BasketUpdateRequest) -> Result<Vec<Item>> {
        self.remove_item(
            request.session_id,
            request.product.product_code,
            request.count,
        )
    }

    /// Current lines of a session's basket, empty if it has none.
    ///
    /// # Errors
    ///
    /// Returns `BasketError::LockPoisoned` if the store lock is poisoned.
    pub fn get_basket(&self, session_id: SessionId) -> Result<Vec<Item>> {
        let inner = self.read()?;
        Ok(inner
            .baskets
            .get(&session_id)
            .map(Basket::items)
            .unwrap_or_default())
    }

    /// Checkout summary for a session, `None` if it has no basket.
    ///
    /// # Errors
    ///
    /// Returns `BasketError::PriceOverflow` if the total does not fit, or
    /// `BasketError::LockPoisoned`.
    pub fn calculate_checkout(&self, session_id: SessionId) -> Result<Option<CheckoutResult>> {
        let inner = self.read()?;
        let Some(basket) = inner.baskets.get(&session_id) else {
            return Ok(None);
        };
        checkout::calculate(session_id, &basket.lines, &inner.products).map(Some)
    }

    /// Cached metadata for a product.
    ///
    /// # Errors
    ///
    /// Returns `BasketError::LockPoisoned` if the store lock is poisoned.
    pub fn product(&self, product_code: ProductCode) -> Result<Option<Product>> {
        Ok(self.read()?.products.get(product_code).cloned())
    }

    /// Number of sessions currently holding a basket.
    ///
    /// # Errors
    ///
    /// Returns `BasketError::LockPoisoned` if the store lock is poisoned.
    pub fn session_count(&self) -> Result<usize> {
        Ok(self.read()?.baskets.len())
    }

    /// Copy of every stored basket.
    ///
    /// # Errors
    ///
    /// Returns `BasketError::LockPoisoned` if the store lock is poisoned.
    pub fn snapshot(&self) -> Result<BasketSnapshot> {
        let inner = self.read()?;
        let sessions = inner
            .baskets
            .iter()
            .map(|(session_id, basket)| (*session_id, basket.items()))
            .collect();
        Ok(BasketSnapshot { sessions })
    }
}
