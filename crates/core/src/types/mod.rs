//! Core types for the basket engine.
//!
//! This module provides type-safe wrappers for identifiers and prices along
//! with the request/response shapes of the engine.

pub mod basket;
pub mod id;
pub mod price;
pub mod product;

pub use basket::{BasketItem, BasketUpdateRequest, CheckoutResult, Item, Quantity};
pub use id::*;
pub use price::Price;
pub use product::Product;
