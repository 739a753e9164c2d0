//! # Paack Domain
//!
//! Wire-level types and error taxonomy for the Paack delivery platform.
//!
//! This crate contains:
//! - Request/response data types (Order, Parcel, Label, ...)
//! - The `ApiError` taxonomy and `ApiResult` alias
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - Pure data structures; all call behavior lives in `paack-client`

pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
