//! Configuration module for the coin forecast dashboard.

// Can all be private now because we have a public re-export.
mod api;
mod debug;
mod forecast;
mod notify;
mod persistence;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use api::{API, ApiConfig};
pub use debug::DF;
pub use forecast::{FORECAST, ForecastDefaults, HorizonLimits};
pub use notify::NOTIFY;
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;
