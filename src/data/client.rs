use {
    crate::{
        config::API,
        data::wire::{HealthStatus, PredictBody, PredictReply, SupportedCoinsBody},
        domain::ForecastRequest,
    },
    anyhow::Context,
    async_trait::async_trait,
    std::fmt,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Why a call to the prediction service produced nothing usable.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Could not reach the service or read its response.
    Transport(String),
    /// The body was not the JSON we expected.
    Decode(String),
    /// Valid JSON, but missing the fields that matter.
    Malformed(&'static str),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "transport error: {}", e),
            ApiError::Decode(e) => write!(f, "could not decode response: {}", e),
            ApiError::Malformed(what) => write!(f, "malformed response: {}", what),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

/// Abstract interface for the remote prediction service.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ForecastApi: Send + Sync {
    async fn supported_coins(&self) -> Result<Vec<String>, ApiError>;

    async fn predict(&self, request: &ForecastRequest) -> Result<PredictReply, ApiError>;

    async fn health(&self) -> Result<HealthStatus, ApiError>;
}

pub struct HttpForecastApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpForecastApi {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let builder = reqwest::Client::builder();
        // Timeouts are not supported by the fetch backend.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_millis(API.timeout_ms));
        let client = builder.build().context("Failed to build HTTP client")?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ForecastApi for HttpForecastApi {
    async fn supported_coins(&self) -> Result<Vec<String>, ApiError> {
        let body: SupportedCoinsBody = self
            .client
            .get(self.url(API.supported_coins_path))
            .send()
            .await?
            .json()
            .await?;
        body.supported_coins
            .ok_or(ApiError::Malformed("missing supported_coins"))
    }

    async fn predict(&self, request: &ForecastRequest) -> Result<PredictReply, ApiError> {
        #[cfg(debug_assertions)]
        if DF.log_fetch {
            log::info!(
                "POST {} symbol={} days={} currency={}",
                API.predict_path,
                request.symbol,
                request.horizon,
                request.currency
            );
        }
        // The service reports failures as `{error}` with a 5xx status, so the
        // body is read whatever the status code.
        let body: PredictBody = self
            .client
            .post(self.url(API.predict_path))
            .json(request)
            .send()
            .await?
            .json()
            .await?;
        body.into_reply()
            .ok_or(ApiError::Malformed("neither error nor predictions"))
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        Ok(self
            .client
            .get(self.url(API.health_path))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }
}
