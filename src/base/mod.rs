//! Base types and error handling.
//!
//! Provides the foundational error type shared across the crate:
//! - [`NetError`]: network error taxonomy surfaced to error callbacks

pub mod neterror;

pub use neterror::NetError;
