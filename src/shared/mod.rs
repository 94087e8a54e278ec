/// Shared utilities used across every layer
pub mod error;
pub mod result;

pub use result::Result;
