/// Shared utilities used across all layers
pub mod error;
pub mod logging;
mod result;
pub mod security;

pub use result::Result;
