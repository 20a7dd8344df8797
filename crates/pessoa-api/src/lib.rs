//! HTTP client for the pessoa registry REST API.
//!
//! The backend is consumed defensively: two field-naming conventions exist
//! in the wild (a legacy and a current scheme) and list responses come in
//! two shapes (bare array or paginated object). [`normalize`] owns that
//! tolerance; [`client`] owns transport, auth and error mapping.

pub mod client;
pub mod error;
pub mod normalize;
pub mod token;

pub use client::{ApiClient, ListQuery};
pub use error::{Error, Result};
pub use normalize::PersonPage;
pub use token::TokenStore;
