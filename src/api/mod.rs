//! HTTP client for the external results API.
//!
//! Every outbound request in the portal goes through [`ApiClient`].

mod client;
mod error;

pub use self::client::{ApiClient, Ack};
pub use self::error::ApiError;
