//! # Paack Client
//!
//! Outbound client for the Paack parcel-delivery REST API.
//!
//! This crate contains:
//! - The public operation surface ([`PaackClient`], [`DeliveryApi`])
//! - The shared call pipeline (token handling, single 401 retry, response
//!   decoding)
//! - Per-domain OAuth2 token caches (orders and labels authenticate against
//!   independent issuers)
//! - Configuration loading from environment variables or JSON/TOML files
//!
//! ## Architecture
//! - Wire types and the error taxonomy live in `paack-domain`
//! - One canonical pipeline backs every operation; the label endpoint is the
//!   only one whose success body is returned as raw bytes instead of JSON

pub mod auth;
pub mod client;
pub mod config;
pub mod http;
pub mod pipeline;

// Re-export commonly used items
pub use auth::{AuthDomain, Credentials};
pub use client::{DeliveryApi, PaackClient};
pub use config::{ConfigError, PaackConfig};
pub use http::HttpClient;
pub use pipeline::CallPipeline;
