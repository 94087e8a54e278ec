//! HTTP surface of the monitor, built on axum.
//!
//! Handlers stay thin: they extract path and body input, call one use case
//! and map its result or error onto a JSON response.

mod error;
mod handlers;
mod router;
mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
