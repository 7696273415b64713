pub const ICON_CHART: &str = "📈";
pub const ICON_USER: &str = "👤";
pub const ICON_CLOSE: &str = "✖";
pub const ICON_UP: &str = "↑";
pub const ICON_DOWN: &str = "↓";
pub const ICON_WARNING: &str = "⚠";

pub struct UiText {
    pub app_title: &'static str,

    // --- HEADER ---
    pub header_forecast: &'static str,
    pub header_login: &'static str,
    pub header_logout: &'static str,
    pub header_profile_fallback: &'static str,
    pub header_currency: &'static str,

    // --- SESSION ---
    pub session_login_prompt: &'static str,

    // --- LOGIN WINDOW ---
    pub login_title: &'static str,
    pub login_email: &'static str,
    pub login_name: &'static str,
    pub login_photo: &'static str,
    pub login_submit: &'static str,
    pub login_invalid_email: &'static str,

    // --- PROFILE ---
    pub profile_title: &'static str,
    pub profile_email: &'static str,
    pub profile_name: &'static str,
    pub profile_back: &'static str,

    // --- FORECAST SETTINGS PANEL ---
    pub forecast_title: &'static str,
    pub settings_heading: &'static str,
    pub settings_days: &'static str,
    pub settings_symbol: &'static str,
    pub settings_currency: &'static str,
    pub settings_currency_hint: &'static str,
    pub settings_current: &'static str,
    pub button_generate: &'static str,
    pub button_generating: &'static str,

    // --- CENTRAL PANEL ---
    pub cp_generating: &'static str,
    pub cp_loading_coins: &'static str,
    pub cp_no_data: &'static str,
    pub cp_empty_forecast: &'static str,
    pub cp_model_prefix: &'static str,

    // --- PLOT LABELS ---
    pub plot_x_axis: &'static str,
    pub plot_y_axis_prefix: &'static str,
    pub plot_series_suffix: &'static str,

    // --- DETAILS ---
    pub details_heading: &'static str,
    pub details_start: &'static str,
    pub details_end: &'static str,
    pub details_change: &'static str,
    pub details_change_pct: &'static str,
    pub details_no_percentage: &'static str,

    pub model_linear_regression: &'static str,
    pub model_fallback: &'static str,


    // --- STATUS BAR ---
    pub status_server: &'static str,
    pub status_online: &'static str,
    pub status_offline: &'static str,
    pub status_unknown: &'static str,
    pub status_model_loaded: &'static str,
    pub status_no_model: &'static str,
    pub status_recheck: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Crypto Hunter",

    header_forecast: "Forecast",
    header_login: "Login",
    header_logout: "Logout",
    header_profile_fallback: "User Profile",
    header_currency: "Currency",

    session_login_prompt: "Please login to view your profile",

    login_title: "Login",
    login_email: "Email",
    login_name: "Display name",
    login_photo: "Avatar URL (optional)",
    login_submit: "Sign in",
    login_invalid_email: "Please enter a valid email address",

    profile_title: "Profile",
    profile_email: "Email:",
    profile_name: "Name:",
    profile_back: "Back to forecast",

    forecast_title: "Cryptocurrency Price Forecast",
    settings_heading: "Forecast Settings",
    settings_days: "Days to Forecast:",
    settings_symbol: "Cryptocurrency",
    settings_currency: "Currency:",
    settings_currency_hint: "Change currency in the header to update forecast",
    settings_current: "Current Forecast:",
    button_generate: "Generate Forecast",
    button_generating: "Forecasting...",

    cp_generating: "Generating forecast...",
    cp_loading_coins: "Loading supported cryptocurrencies...",
    cp_no_data: "No forecast data available. Click \"Generate Forecast\" to get started.",
    cp_empty_forecast: "No forecast data returned",
    cp_model_prefix: "Model:",

    plot_x_axis: "Date",
    plot_y_axis_prefix: "Price",
    plot_series_suffix: "Price Forecast",

    details_heading: "Forecast Details",
    details_start: "Starting Price:",
    details_end: "Ending Price:",
    details_change: "Price Change:",
    details_change_pct: "Percentage Change:",
    details_no_percentage: "n/a",

    model_linear_regression: "Linear Regression",
    model_fallback: "Fallback",


    status_server: "Prediction server:",
    status_online: "online",
    status_offline: "offline",
    status_unknown: "checking...",
    status_model_loaded: "model loaded",
    status_no_model: "no model loaded",
    status_recheck: "Recheck",
};
