//! Text for the forecast details panel.

use crate::{
    domain::{Currency, ForecastResult, ModelKind, PriceDelta},
    ui::UI_TEXT,
    utils::{format_grouped, sign_prefix},
};

/// `$1,234.50 USD`
pub fn format_price(price: f64, currency: Currency) -> String {
    format!("{}{} {}", currency.sign(), format_grouped(price), currency.code())
}

/// `+10.00 USD` / `-3.50 INR`
pub fn format_signed_amount(amount: f64, currency: Currency) -> String {
    format!(
        "{}{} {}",
        sign_prefix(amount),
        format_grouped(amount.abs()),
        currency.code()
    )
}

/// `+10.00%` / `-2.25%`, or `n/a` when there is no ratio.
pub fn format_signed_percentage(percentage: Option<f64>) -> String {
    match percentage {
        Some(pct) => format!("{}{:.2}%", sign_prefix(pct), pct.abs()),
        None => UI_TEXT.details_no_percentage.to_string(),
    }
}

pub fn model_badge(kind: ModelKind) -> &'static str {
    match kind {
        ModelKind::LinearRegression => UI_TEXT.model_linear_regression,
        ModelKind::Fallback => UI_TEXT.model_fallback,
    }
}

/// Everything the details panel prints for one forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSummary {
    pub start_price: String,
    pub end_price: String,
    pub change_amount: String,
    pub change_percentage: String,
    pub is_gain: bool,
    pub model_badge: &'static str,
    pub model_kind: ModelKind,
}

impl ForecastSummary {
    /// `None` for an empty forecast.
    pub fn build(result: &ForecastResult, delta: PriceDelta, currency: Currency) -> Option<Self> {
        let first = result.first()?;
        let last = result.last()?;
        let kind = result.model_kind();
        Some(Self {
            start_price: format_price(first.price, currency),
            end_price: format_price(last.price, currency),
            change_amount: format_signed_amount(delta.amount, currency),
            change_percentage: format_signed_percentage(delta.percentage),
            is_gain: delta.is_gain(),
            model_badge: model_badge(kind),
            model_kind: kind,
        })
    }
}
