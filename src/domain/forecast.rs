use {
    crate::{
        config::FORECAST,
        domain::{Currency, Horizon},
    },
    serde::{Deserialize, Serialize},
};

/// What the user asked for. Built from the current selection each time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastRequest {
    pub symbol: String,
    #[serde(rename = "days")]
    pub horizon: Horizon,
    pub currency: Currency,
}

impl ForecastRequest {
    pub fn new(symbol: impl Into<String>, horizon: Horizon, currency: Currency) -> Self {
        Self {
            symbol: symbol.into(),
            horizon,
            currency,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub date: String,
    pub price: f64,
}

/// Which model produced a forecast, as far as the badge is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    LinearRegression,
    Fallback,
}

/// A received forecast. Never patched in place, only replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    pub predictions: Vec<Prediction>,
    pub model_type: String,
}

impl ForecastResult {
    /// `model_type` defaults to the fallback marker when the service omits it.
    pub fn new(predictions: Vec<Prediction>, model_type: Option<String>) -> Self {
        Self {
            predictions,
            model_type: model_type.unwrap_or_else(|| FORECAST.fallback_model_type.to_string()),
        }
    }

    pub fn model_kind(&self) -> ModelKind {
        if self.model_type == FORECAST.linear_model_type {
            ModelKind::LinearRegression
        } else {
            ModelKind::Fallback
        }
    }

    pub fn first(&self) -> Option<&Prediction> {
        self.predictions.first()
    }

    pub fn last(&self) -> Option<&Prediction> {
        self.predictions.last()
    }

    /// `None` for an empty forecast.
    pub fn delta(&self) -> Option<PriceDelta> {
        Some(PriceDelta::between(self.first()?.price, self.last()?.price))
    }
}

/// Change between the first and last forecast price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceDelta {
    pub amount: f64,
    /// `None` when the start price is zero, so no ratio exists.
    pub percentage: Option<f64>,
}

impl PriceDelta {
    fn between(start: f64, end: f64) -> Self {
        Self {
            amount: end - start,
            percentage: Some(((end / start) - 1.0) * 100.0).filter(|pct| pct.is_finite()),
        }
    }

    pub fn is_gain(&self) -> bool {
        self.amount >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(date: &str, price: f64) -> Prediction {
        Prediction {
            date: date.to_string(),
            price,
        }
    }

    #[test]
    fn delta_uses_first_and_last_entries() {
        let result = ForecastResult::new(
            vec![p("2024-01-01", 100.0), p("2024-01-15", 250.0), p("2024-01-30", 110.0)],
            Some("linear_regression".into()),
        );
        let delta = result.delta().unwrap();
        assert_eq!(delta.amount, 110.0 - 100.0);
        assert_eq!(delta.percentage, Some((110.0 / 100.0 - 1.0) * 100.0));
        assert!(delta.is_gain());
    }

    #[test]
    fn falling_forecast_is_a_loss() {
        let result = ForecastResult::new(vec![p("a", 200.0), p("b", 150.0)], None);
        let delta = result.delta().unwrap();
        assert_eq!(delta.amount, -50.0);
        assert_eq!(delta.percentage, Some(-25.0));
        assert!(!delta.is_gain());
    }

    #[test]
    fn empty_forecast_has_no_delta() {
        let result = ForecastResult::new(Vec::new(), None);
        assert!(result.delta().is_none());
    }

    #[test]
    fn single_point_forecast_has_zero_delta() {
        let result = ForecastResult::new(vec![p("a", 42.0)], None);
        let delta = result.delta().unwrap();
        assert_eq!(delta.amount, 0.0);
        assert_eq!(delta.percentage, Some(0.0));
    }

    #[test]
    fn zero_start_price_has_no_percentage() {
        let result = ForecastResult::new(vec![p("a", 0.0), p("b", 0.0)], None);
        let delta = result.delta().unwrap();
        assert_eq!(delta.amount, 0.0);
        assert_eq!(delta.percentage, None);

        let result = ForecastResult::new(vec![p("a", 0.0), p("b", 5.0)], None);
        let delta = result.delta().unwrap();
        assert_eq!(delta.amount, 5.0);
        assert_eq!(delta.percentage, None);
        assert!(delta.is_gain());
    }

    #[test]
    fn missing_model_type_means_fallback() {
        let result = ForecastResult::new(vec![p("a", 1.0)], None);
        assert_eq!(result.model_type, "fallback");
        assert_eq!(result.model_kind(), ModelKind::Fallback);

        let result = ForecastResult::new(vec![p("a", 1.0)], Some("linear_regression".into()));
        assert_eq!(result.model_kind(), ModelKind::LinearRegression);
    }

    #[test]
    fn request_serializes_to_predict_body() {
        let req = ForecastRequest::new("ETH", Horizon::new(45), Currency::Inr);
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "symbol": "ETH", "days": 45, "currency": "INR" })
        );
    }
}
