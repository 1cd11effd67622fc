//! Client library for the Dexcom Share web service.
//!
//! Dexcom Share exposes a small JSON-over-HTTP API: a two-step login
//! (credential check, then session creation) followed by bounded queries
//! for recent glucose readings. This crate wraps that exchange and
//! normalizes the vendor quirks:
//!
//! - trend codes become the closed [`Trend`] enum with a description and
//!   a directional arrow,
//! - values are reported both in mg/dL and mmol/L,
//! - the wrapped-epoch `WT` date strings become [`chrono::DateTime<Utc>`].
//!
//! # Example
//!
//! ```no_run
//! use dexshare::{Server, ShareClient, ShareConfig};
//!
//! # async fn run() -> Result<(), dexshare::ShareError> {
//! let config = ShareConfig::new("username", "password").server(Server::Us);
//! let client = ShareClient::connect(config).await?;
//!
//! if let Some(reading) = client.fetch_latest_reading().await? {
//!     println!("{} mg/dL ({})", reading.mg_dl, reading.trend.arrow());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{ShareClient, ShareError};
pub use auth::Session;
pub use config::{Server, ShareConfig};
pub use models::{GlucoseReading, Trend};
