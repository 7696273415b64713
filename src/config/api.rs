/// Where the prediction service lives and how long we wait for it.
pub struct ApiConfig {
    pub base_url: &'static str,
    pub timeout_ms: u64,
    pub supported_coins_path: &'static str,
    pub predict_path: &'static str,
    pub health_path: &'static str,
}

pub const API: ApiConfig = ApiConfig {
    base_url: "http://localhost:5000",
    timeout_ms: 15_000,
    supported_coins_path: "/supported_coins",
    predict_path: "/predict",
    health_path: "/health",
};
