/// Bounds for the forecast horizon slider (in days).
pub struct HorizonLimits {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

pub struct ForecastDefaults {
    pub horizon: HorizonLimits,
    pub symbol: &'static str,
    /// Used when the prediction service cannot tell us which coins it supports.
    pub fallback_symbols: &'static [&'static str],
    /// Reported by the service when it had no trained model for the symbol.
    pub fallback_model_type: &'static str,
    pub linear_model_type: &'static str,
    /// Shown when the service could not be reached or sent something unreadable.
    pub connect_error: &'static str,
}

pub const FORECAST: ForecastDefaults = ForecastDefaults {
    horizon: HorizonLimits {
        min: 5,
        max: 90,
        step: 5,
        default: 30,
    },
    symbol: "BTC",
    fallback_symbols: &["BTC", "ETH", "FTT", "FXS", "GALA", "SOL", "ADA", "DOT"],
    fallback_model_type: "fallback",
    linear_model_type: "linear_regression",
    connect_error: "Failed to connect to prediction server. Please make sure the backend is running.",
};
