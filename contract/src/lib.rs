//! REST contract shared by the browser console and the `smc-admin` CLI.
//!
//! This crate owns the wire representation of the admin API: response
//! envelope, endpoint table, CSRF header rules and the response
//! classification every transport applies. It has no HTTP client of its own
//! so it compiles unchanged for `wasm32` (gloo-net in `client`) and native
//! (reqwest in `cli`).

pub mod csrf;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod export;
pub mod format;
pub mod notify;
pub mod types;

pub use endpoint::{DEFAULT_API_URL, Endpoint, Method};
pub use envelope::{ApiResponse, Pagination};
pub use error::{ApiError, classify};
