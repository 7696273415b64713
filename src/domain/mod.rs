// Domain types and value objects
mod currency;
mod forecast;
mod horizon;
mod identity;

pub use currency::Currency;
pub use forecast::{ForecastRequest, ForecastResult, ModelKind, Prediction, PriceDelta};
pub use horizon::Horizon;
pub use identity::Identity;
