mod client;
mod wire;

pub use {
    client::{ApiError, ForecastApi, HttpForecastApi},
    wire::{HealthStatus, PredictReply},
};
