//! The price forecast view: state machine, network driver and derived data.

mod chart;
mod controller;
mod state;
mod summary;

pub use {
    chart::{ChartSeries, chart_series},
    controller::{ForecastController, ForecastMessage, ServerStatus},
    state::{FetchPhase, ForecastState, Generation},
    summary::{
        ForecastSummary, format_price, format_signed_amount, format_signed_percentage,
        model_badge,
    },
};
