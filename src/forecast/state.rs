use {
    crate::{
        config::FORECAST,
        data::{ApiError, PredictReply},
        domain::{Currency, ForecastRequest, ForecastResult, Horizon, PriceDelta},
    },
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// One request cycle: `Idle -> Loading -> {Success, Failed} -> Loading -> ...`
#[derive(Debug, Clone, PartialEq)]
pub enum FetchPhase {
    Idle,
    Loading,
    Success,
    Failed(String),
}

/// Monotonic id of a forecast request. Only the newest one may touch state.
pub type Generation = u64;

/// Everything the forecast view knows, with no I/O attached.
#[derive(Debug, Clone)]
pub struct ForecastState {
    symbol: String,
    horizon: Horizon,
    supported_symbols: Vec<String>,
    loading_assets: bool,
    phase: FetchPhase,
    result: Option<ForecastResult>,
    delta: Option<PriceDelta>,
    /// The request that produced `result`.
    shown_request: Option<ForecastRequest>,
    latest_generation: Generation,
    observed_currency: Option<Currency>,
}

impl Default for ForecastState {
    fn default() -> Self {
        Self::new(FORECAST.symbol, Horizon::default())
    }
}

impl ForecastState {
    /// Starts in the asset-loading sub-state: no forecast until the coin list is in.
    pub fn new(symbol: impl Into<String>, horizon: Horizon) -> Self {
        Self {
            symbol: symbol.into(),
            horizon,
            supported_symbols: Vec::new(),
            loading_assets: true,
            phase: FetchPhase::Idle,
            result: None,
            delta: None,
            shown_request: None,
            latest_generation: 0,
            observed_currency: None,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn horizon(&self) -> Horizon {
        self.horizon
    }

    pub fn supported_symbols(&self) -> &[String] {
        &self.supported_symbols
    }

    pub fn is_loading_assets(&self) -> bool {
        self.loading_assets
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    pub fn phase(&self) -> &FetchPhase {
        &self.phase
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            FetchPhase::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&ForecastResult> {
        self.result.as_ref()
    }

    pub fn delta(&self) -> Option<PriceDelta> {
        self.delta
    }

    pub fn shown_request(&self) -> Option<&ForecastRequest> {
        self.shown_request.as_ref()
    }

    pub fn latest_generation(&self) -> Generation {
        self.latest_generation
    }

    /// The "Generate Forecast" action is available.
    pub fn can_generate(&self) -> bool {
        !self.loading_assets && !self.is_loading()
    }

    pub fn set_symbol(&mut self, symbol: impl Into<String>) {
        self.symbol = symbol.into();
    }

    /// Clamped to the slider range and snapped to its step.
    pub fn set_horizon(&mut self, days: u32) {
        self.horizon = Horizon::new(days);
    }

    /// Store the coin list, or the built-in list if the service could not provide one.
    pub fn finish_asset_load(&mut self, outcome: Result<Vec<String>, ApiError>) {
        self.supported_symbols = match outcome {
            Ok(symbols) if !symbols.is_empty() => symbols,
            Ok(_) => {
                log::warn!("Prediction service returned no supported coins, using built-in list");
                fallback_symbols()
            }
            Err(e) => {
                log::error!("Error fetching supported coins: {}", e);
                fallback_symbols()
            }
        };
        self.loading_assets = false;
    }

    /// Start a forecast for the current selection. `None` while the coin list is
    /// still loading.
    pub fn begin_forecast(&mut self, currency: Currency) -> Option<(Generation, ForecastRequest)> {
        if self.loading_assets {
            return None;
        }
        self.latest_generation += 1;
        self.phase = FetchPhase::Loading;
        self.observed_currency = Some(currency);
        let request = ForecastRequest::new(self.symbol.clone(), self.horizon, currency);
        Some((self.latest_generation, request))
    }

    /// Apply a response. Responses from superseded requests are dropped and
    /// `false` is returned.
    pub fn apply_forecast(
        &mut self,
        generation: Generation,
        request: ForecastRequest,
        outcome: Result<PredictReply, ApiError>,
    ) -> bool {
        if generation != self.latest_generation {
            #[cfg(debug_assertions)]
            if DF.log_stale_responses {
                log::info!(
                    "Dropping stale forecast #{} for {} (latest is #{})",
                    generation,
                    request.symbol,
                    self.latest_generation
                );
            }
            return false;
        }

        self.phase = match outcome {
            Ok(PredictReply::Rejected(message)) => FetchPhase::Failed(message),
            Ok(PredictReply::Forecast(result)) => {
                self.delta = result.delta();
                self.result = Some(result);
                self.shown_request = Some(request);
                FetchPhase::Success
            }
            Err(e) => {
                log::error!("Error fetching forecast data: {}", e);
                FetchPhase::Failed(FORECAST.connect_error.to_string())
            }
        };
        true
    }

    /// True when a currency change should refetch: coins are loaded and the
    /// currency differs from the one the last request used.
    pub fn needs_refetch_for(&self, currency: Currency) -> bool {
        !self.loading_assets && self.observed_currency != Some(currency)
    }
}

fn fallback_symbols() -> Vec<String> {
    FORECAST.fallback_symbols.iter().map(|s| s.to_string()).collect()
}
