//! HTTP middleware for the basket server.
//!
//! Layer order in [`crate::app`], outermost first: `TraceLayer` opens the
//! `http_request` span, then the request id is recorded into it.

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware, resolve_request_id};
