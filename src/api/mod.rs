//! HTTP client module for the Dexcom Share services.
//!
//! This module provides the `ShareClient` for communicating with the
//! Share backend: the two-step authentication exchange and the glucose
//! readings query.
//!
//! The API uses a session identifier obtained at login; it is carried in
//! the JSON request body rather than in a header or cookie.

pub mod client;
pub mod error;

pub use client::{ShareClient, DEFAULT_MAX_COUNT, DEFAULT_MAX_MINUTES};
pub use error::ShareError;
