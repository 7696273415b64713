//! JSON bodies exchanged with the prediction service.

use {
    crate::domain::{ForecastResult, Prediction},
    serde::Deserialize,
};

#[derive(Debug, Deserialize)]
pub(crate) struct SupportedCoinsBody {
    pub supported_coins: Option<Vec<String>>,
}

/// `/predict` answers either `{error}` or `{predictions, model_type?}`.
/// Extra fields (`symbol`, `currency`, ...) are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct PredictBody {
    pub error: Option<String>,
    pub predictions: Option<Vec<Prediction>>,
    pub model_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

/// What the service said about a forecast request.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictReply {
    Forecast(ForecastResult),
    /// The service understood the request and refused it.
    Rejected(String),
}

impl PredictBody {
    /// An explicit, non-empty error wins over any predictions sent alongside it.
    pub(crate) fn into_reply(self) -> Option<PredictReply> {
        if let Some(error) = self.error.filter(|e| !e.is_empty()) {
            return Some(PredictReply::Rejected(error));
        }
        self.predictions
            .map(|p| PredictReply::Forecast(ForecastResult::new(p, self.model_type)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Option<PredictReply> {
        serde_json::from_str::<PredictBody>(json).unwrap().into_reply()
    }

    #[test]
    fn error_field_becomes_rejection() {
        assert_eq!(
            parse(r#"{"error":"unsupported symbol"}"#),
            Some(PredictReply::Rejected("unsupported symbol".into()))
        );
    }

    #[test]
    fn predictions_become_forecast() {
        let reply = parse(
            r#"{"symbol":"BTC","currency":"USD","predictions":[{"date":"2024-01-01","price":100.0}],"model_type":"linear_regression"}"#,
        );
        match reply {
            Some(PredictReply::Forecast(r)) => {
                assert_eq!(r.predictions.len(), 1);
                assert_eq!(r.model_type, "linear_regression");
            }
            other => panic!("unexpected reply {:?}", other),
        }
    }

    #[test]
    fn empty_error_is_ignored() {
        assert!(matches!(
            parse(r#"{"error":"","predictions":[]}"#),
            Some(PredictReply::Forecast(_))
        ));
    }

    #[test]
    fn body_without_either_field_is_malformed() {
        assert_eq!(parse(r#"{"status":"ok"}"#), None);
    }
}
