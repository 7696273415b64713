use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub accent: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
    pub toast_success: Color32,
    pub toast_error: Color32,
    pub toast_info: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_width: f32,
    pub avatar_size: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::LIGHT_GRAY,
        heading: Color32::from_rgb(238, 188, 29), // Gold
        accent: Color32::from_rgb(238, 188, 29),
        central_panel: Color32::from_rgb(20, 22, 26),
        side_panel: Color32::from_rgb(30, 32, 38),
        card: Color32::from_rgb(38, 40, 48),
        toast_success: Color32::from_rgb(46, 125, 50),
        toast_error: Color32::from_rgb(211, 47, 47),
        toast_info: Color32::from_rgb(2, 136, 209),
    },
    side_panel_width: 280.0,
    avatar_size: 28.0,
};

impl UiConfig {
    /// Frame for the settings panel (Standard padding)
    pub fn side_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame for the header bar
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(12, 8),
            ..Default::default()
        }
    }

    /// Frame for Bottom Status bar (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Raised block for the chart and the details panel
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        }
    }
}
