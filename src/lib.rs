#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod forecast;
pub mod session;
mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::App;
pub use config::PERSISTENCE;
pub use data::{ApiError, ForecastApi, HttpForecastApi};
pub use domain::{Currency, ForecastRequest, ForecastResult, Horizon, Identity, PriceDelta};
pub use forecast::{ForecastController, ForecastState};
pub use session::{IdentityProvider, LocalIdentityProvider, SessionContext};
pub use utils::Spawner;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the prediction service
    #[arg(long)]
    pub api_url: Option<String>,

    /// Display currency (USD or INR)
    #[arg(long)]
    pub currency: Option<Currency>,

    /// Coin to forecast first, e.g. BTC
    #[arg(long)]
    pub symbol: Option<String>,

    /// Forecast horizon in days (snapped to 5..=90, step 5)
    #[arg(long)]
    pub days: Option<u32>,
}

/// Main application entry point - creates the GUI app.
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<App> {
    App::new(cc, args)
}
