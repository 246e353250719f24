//! Basket Core - in-memory shopping basket engine.
//!
//! This crate holds the per-session basket state shared by the other
//! workspace members:
//! - `server` - HTTP front end over a single shared store
//! - `cli` - Script runner for reproducing basket scenarios
//!
//! # Architecture
//!
//! The engine is synchronous and does no I/O. A [`BasketStore`] owns every
//! session's basket plus the [`ProductCache`] used to price them, all behind
//! one lock. Checkout is a pure calculation over a basket and the cache.
//!
//! ```rust
//! use basket_core::{BasketStore, Price, Product, ProductCode, SessionId};
//! use rust_decimal::Decimal;
//!
//! let store = BasketStore::new();
//! let session = SessionId::new(1);
//! let milk = Product::new(ProductCode::new(11), "milk", Price::new(Decimal::new(140, 2)));
//!
//! store.add_item(session, milk, 5)?;
//! let checkout = store.calculate_checkout(session)?.expect("basket exists");
//! assert_eq!(checkout.final_price_including_discount.to_string(), "4.20");
//! # Ok::<(), basket_core::BasketError>(())
//! ```
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices and the request/response shapes
//! - [`cache`] - Product metadata cache
//! - [`store`] - Concurrent basket store
//! - [`checkout`] - Discount and checkout calculation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cache;
pub mod checkout;
pub mod error;
pub mod store;
pub mod types;

pub use cache::ProductCache;
pub use error::{BasketError, Result};
pub use store::{BasketSnapshot, BasketStore};
pub use types::*;
