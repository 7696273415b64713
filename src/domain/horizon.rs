use {
    crate::config::FORECAST,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Number of future days a forecast covers.
///
/// Always inside `[FORECAST.horizon.min, FORECAST.horizon.max]` and a multiple of
/// `FORECAST.horizon.step`, whatever value it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Horizon(u32);

impl Horizon {
    pub fn new(days: u32) -> Self {
        let limits = &FORECAST.horizon;
        let clamped = days.clamp(limits.min, limits.max);
        // Snap to the nearest step, rounding halves up.
        let snapped = ((clamped + limits.step / 2) / limits.step) * limits.step;
        Self(snapped.clamp(limits.min, limits.max))
    }

    pub fn days(&self) -> u32 {
        self.0
    }

    pub fn min() -> Self {
        Self(FORECAST.horizon.min)
    }

    pub fn max() -> Self {
        Self(FORECAST.horizon.max)
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self::new(FORECAST.horizon.default)
    }
}

impl From<u32> for Horizon {
    fn from(days: u32) -> Self {
        Self::new(days)
    }
}

impl From<Horizon> for u32 {
    fn from(h: Horizon) -> Self {
        h.0
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
