//! HTTP client for the remote account-profile service.
//!
//! Implements the profile and static-data provider contracts from
//! `armory-core` over the regional REST endpoints. Payloads are flattened
//! into the core's summary shapes on ingestion, so nothing downstream
//! branches on the nested wire format.

mod client;
mod error;
mod types;

pub use client::ProfileApiClient;
pub use error::{ProfileClientError, Result};
pub use types::*;
