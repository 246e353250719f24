//! Integration tests for the basket workspace.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p basket-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `basket_scenarios` - End-to-end store behavior through the public API
//! - `basket_concurrency` - Many threads sharing one store
//! - `server_api` - HTTP routes driven through the router in-process
