//! Rust client for the Increase banking REST API.
//! Provides typed request/response models and one async service per API
//! resource, all sharing a single pluggable transport.

pub mod client;
pub mod error;
pub mod models;
pub mod pagination;
pub mod query;
pub mod requester;
pub mod resources;

#[cfg(test)]
mod testing;

pub use client::{Client, Environment};
pub use error::{ApiError, ApiErrorKind, IncreaseError};
pub use pagination::Page;
pub use requester::{ApiRequest, HttpRequester, Method, Requester};
