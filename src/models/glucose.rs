use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::ShareError;
use crate::models::Trend;

/// (mmol/L) = (mg/dL) * 0.0555
const MMOL_L_CONVERSION_FACTOR: f64 = 0.0555;

/// Glucose record as the readings endpoint reports it.
///
/// `WT` ("wall time") is a millisecond epoch wrapped in a textual
/// `Date(...)` marker, a quirk of the backend's serializer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGlucoseReading {
    #[serde(rename = "WT")]
    pub wt: String,
    #[serde(rename = "Value")]
    pub value: u16,
    #[serde(rename = "Trend")]
    pub trend: Trend,
}

/// One normalized glucose observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlucoseReading {
    /// Raw value in mg/dL.
    pub mg_dl: u16,
    /// Converted value in mmol/L, rounded to one decimal place.
    pub mmol_l: f64,
    pub trend: Trend,
    pub timestamp: DateTime<Utc>,
}

impl GlucoseReading {
    /// Normalize a wire record, parsing its wall-time field.
    pub fn from_raw(raw: &RawGlucoseReading) -> Result<Self, ShareError> {
        let timestamp = parse_wall_time(&raw.wt)
            .ok_or_else(|| ShareError::Fetch(format!("unparseable WT field: {:?}", raw.wt)))?;

        Ok(Self {
            mg_dl: raw.value,
            mmol_l: mg_dl_to_mmol_l(raw.value),
            trend: raw.trend,
            timestamp,
        })
    }
}

/// Convert mg/dL to mmol/L, rounded to one decimal place.
pub fn mg_dl_to_mmol_l(mg_dl: u16) -> f64 {
    (f64::from(mg_dl) * MMOL_L_CONVERSION_FACTOR * 10.0).round() / 10.0
}

/// Parse the wrapped-epoch date format, e.g. `Date(1590000000000)`.
/// Some backend revisions wrap the marker in slashes; both are accepted.
fn parse_wall_time(wt: &str) -> Option<DateTime<Utc>> {
    let inner = wt
        .trim_start_matches('/')
        .trim_end_matches('/')
        .strip_prefix("Date(")?
        .strip_suffix(')')?;
    let millis: i64 = inner.parse().ok()?;
    DateTime::<Utc>::from_timestamp_millis(millis)
}
