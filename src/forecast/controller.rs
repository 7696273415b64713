use {
    crate::{
        data::{ApiError, ForecastApi, HealthStatus, PredictReply},
        domain::{Currency, ForecastRequest, Horizon},
        forecast::state::{ForecastState, Generation},
        utils::Spawner,
    },
    std::sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
};

/// Results coming back from the network tasks.
#[derive(Debug)]
pub enum ForecastMessage {
    Assets(Result<Vec<String>, ApiError>),
    Forecast {
        generation: Generation,
        request: ForecastRequest,
        outcome: Result<PredictReply, ApiError>,
    },
    Health(Result<HealthStatus, ApiError>),
}

/// What the status bar says about the prediction service.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerStatus {
    Unknown,
    Online { model_loaded: bool },
    Offline,
}

/// Drives [`ForecastState`]: issues requests on the spawner and applies the
/// answers on the UI thread in [`ForecastController::poll`].
pub struct ForecastController {
    api: Arc<dyn ForecastApi>,
    spawner: Spawner,
    tx: Sender<ForecastMessage>,
    rx: Receiver<ForecastMessage>,
    state: ForecastState,
    server_status: ServerStatus,
    mounted: bool,
    assets_in_flight: bool,
    forecasts_in_flight: usize,
}

impl ForecastController {
    pub fn new(
        api: Arc<dyn ForecastApi>,
        spawner: Spawner,
        symbol: impl Into<String>,
        horizon: Horizon,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            api,
            spawner,
            tx,
            rx,
            state: ForecastState::new(symbol, horizon),
            server_status: ServerStatus::Unknown,
            mounted: false,
            assets_in_flight: false,
            forecasts_in_flight: 0,
        }
    }

    pub fn state(&self) -> &ForecastState {
        &self.state
    }

    pub fn server_status(&self) -> &ServerStatus {
        &self.server_status
    }

    /// Something is still on the wire.
    pub fn is_busy(&self) -> bool {
        self.assets_in_flight || self.forecasts_in_flight > 0
    }

    /// First frame of the view: fetch the coin list (once) and probe the service.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.load_supported_assets();
        self.refresh_health();
    }

    pub fn load_supported_assets(&mut self) {
        self.assets_in_flight = true;
        let api = self.api.clone();
        let tx = self.tx.clone();
        self.spawner.spawn(async move {
            let outcome = api.supported_coins().await;
            let _ = tx.send(ForecastMessage::Assets(outcome));
        });
    }

    /// Request a forecast for the current selection. Refused (returns false)
    /// while the coin list is loading.
    pub fn load_forecast(&mut self, currency: Currency) -> bool {
        let Some((generation, request)) = self.state.begin_forecast(currency) else {
            return false;
        };
        self.forecasts_in_flight += 1;
        let api = self.api.clone();
        let tx = self.tx.clone();
        self.spawner.spawn(async move {
            let outcome = api.predict(&request).await;
            let _ = tx.send(ForecastMessage::Forecast {
                generation,
                request,
                outcome,
            });
        });
        true
    }

    /// The "Generate Forecast" button. Does nothing while a request is in flight.
    pub fn generate(&mut self, currency: Currency) -> bool {
        self.state.can_generate() && self.load_forecast(currency)
    }

    pub fn set_symbol(&mut self, symbol: impl Into<String>) {
        self.state.set_symbol(symbol);
    }

    pub fn set_horizon(&mut self, days: u32) {
        self.state.set_horizon(days);
    }

    /// Refetch when the shared display currency moved.
    pub fn on_currency_changed(&mut self, currency: Currency) -> bool {
        self.state.needs_refetch_for(currency) && self.load_forecast(currency)
    }

    pub fn refresh_health(&mut self) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        self.spawner.spawn(async move {
            let outcome = api.health().await;
            let _ = tx.send(ForecastMessage::Health(outcome));
        });
    }

    /// Apply finished requests. Once the coin list lands, the first forecast
    /// goes out in `currency`. Returns true if anything changed.
    pub fn poll(&mut self, currency: Currency) -> bool {
        let mut changed = false;
        while let Ok(message) = self.rx.try_recv() {
            changed = true;
            match message {
                ForecastMessage::Assets(outcome) => {
                    self.assets_in_flight = false;
                    self.state.finish_asset_load(outcome);
                    self.load_forecast(currency);
                }
                ForecastMessage::Forecast {
                    generation,
                    request,
                    outcome,
                } => {
                    self.forecasts_in_flight = self.forecasts_in_flight.saturating_sub(1);
                    self.state.apply_forecast(generation, request, outcome);
                }
                ForecastMessage::Health(outcome) => {
                    self.server_status = match outcome {
                        Ok(h) => ServerStatus::Online {
                            model_loaded: h.model_loaded,
                        },
                        Err(e) => {
                            log::warn!("Prediction service health check failed: {}", e);
                            ServerStatus::Offline
                        }
                    };
                }
            }
        }
        changed
    }
}
