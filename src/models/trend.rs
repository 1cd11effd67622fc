use serde::{Deserialize, Serialize};

/// Backend-classified rate of change for the glucose level.
///
/// The wire value is the variant name as a JSON string; the set is
/// closed, so an unrecognized value fails deserialization rather than
/// mapping to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    None,
    DoubleUp,
    SingleUp,
    FortyFiveUp,
    Flat,
    FortyFiveDown,
    SingleDown,
    DoubleDown,
    NotComputable,
    RateOutOfRange,
}

impl Trend {
    /// All trends the backend can report, in its own ordering.
    pub const ALL: [Trend; 10] = [
        Trend::None,
        Trend::DoubleUp,
        Trend::SingleUp,
        Trend::FortyFiveUp,
        Trend::Flat,
        Trend::FortyFiveDown,
        Trend::SingleDown,
        Trend::DoubleDown,
        Trend::NotComputable,
        Trend::RateOutOfRange,
    ];

    /// Human-readable description, empty for [`Trend::None`].
    pub fn description(&self) -> &'static str {
        match self {
            Trend::None => "",
            Trend::DoubleUp => "rising quickly",
            Trend::SingleUp => "rising",
            Trend::FortyFiveUp => "rising slightly",
            Trend::Flat => "steady",
            Trend::FortyFiveDown => "falling slightly",
            Trend::SingleDown => "falling",
            Trend::DoubleDown => "falling quickly",
            Trend::NotComputable => "unable to determine trend",
            Trend::RateOutOfRange => "trend unavailable",
        }
    }

    /// Directional glyph, empty for [`Trend::None`].
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::None => "",
            Trend::DoubleUp => "\u{2B85}",
            Trend::SingleUp => "\u{2191}",
            Trend::FortyFiveUp => "\u{2197}",
            Trend::Flat => "\u{2192}",
            Trend::FortyFiveDown => "\u{2198}",
            Trend::SingleDown => "\u{2193}",
            Trend::DoubleDown => "\u{2B87}",
            Trend::NotComputable => "?",
            Trend::RateOutOfRange => "-",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
