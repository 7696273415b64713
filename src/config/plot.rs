//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Forecast line; the area under it is filled with a faded copy
    pub forecast_line_color: Color32,
    pub forecast_line_width: f32,
    pub plot_height: f32,
    /// Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_y_padding_pct: f64,
    /// Roughly how many date labels to show along the x axis
    pub x_label_target_count: f64,

    // --- SEMANTIC COLORS ---
    pub color_gain: Color32,
    pub color_loss: Color32,
    pub color_info: Color32,
    pub color_warning: Color32,

    pub color_badge_linear: Color32,
    pub color_badge_fallback: Color32,

    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    forecast_line_color: Color32::from_rgb(255, 215, 0),
    forecast_line_width: 3.0,
    plot_height: 420.0,
    plot_y_padding_pct: 0.05,
    x_label_target_count: 8.0,

    color_gain: Color32::from_rgb(76, 175, 80),
    color_loss: Color32::from_rgb(244, 67, 54),
    color_info: Color32::from_rgb(33, 150, 243),
    color_warning: Color32::from_rgb(255, 152, 0),

    color_badge_linear: Color32::from_rgb(76, 175, 80),
    color_badge_fallback: Color32::from_rgb(255, 152, 0),

    color_text_neutral: Color32::WHITE,
    color_text_subdued: Color32::GRAY,
};
