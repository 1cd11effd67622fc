//! Data models for Share glucose data.
//!
//! This module contains the structures used to represent readings as the
//! backend reports them and in normalized form:
//!
//! - `RawGlucoseReading`: the wire record (`WT`/`Value`/`Trend`)
//! - `GlucoseReading`: normalized observation with both units and a
//!   parsed timestamp
//! - `Trend`: the closed set of backend rate-of-change categories

pub mod glucose;
pub mod trend;

pub use glucose::{GlucoseReading, RawGlucoseReading};
pub use trend::Trend;
