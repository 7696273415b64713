use {
    crate::{
        config::PLOT_CONFIG,
        domain::ModelKind,
        session::NotificationKind,
        ui::UI_CONFIG,
    },
    eframe::egui::{Color32, CornerRadius, Frame, Margin, Response, RichText, Stroke, Ui},
};

pub(crate) fn section_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).strong().color(UI_CONFIG.colors.heading)
}

/// Green for zero and gains, red for losses.
pub fn get_change_color(is_gain: bool) -> Color32 {
    if is_gain {
        PLOT_CONFIG.color_gain
    } else {
        PLOT_CONFIG.color_loss
    }
}

pub trait ToastColor {
    fn fill(&self) -> Color32;
}

impl ToastColor for NotificationKind {
    fn fill(&self) -> Color32 {
        match self {
            Self::Success => UI_CONFIG.colors.toast_success,
            Self::Error => UI_CONFIG.colors.toast_error,
            Self::Info => UI_CONFIG.colors.toast_info,
        }
    }
}

pub(crate) fn model_badge_color(kind: ModelKind) -> Color32 {
    match kind {
        ModelKind::LinearRegression => PLOT_CONFIG.color_badge_linear,
        ModelKind::Fallback => PLOT_CONFIG.color_badge_fallback,
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    /// `label value`, value colored.
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    /// Small filled pill, e.g. the days chip or the model badge.
    fn chip(&mut self, text: &str, fill: Color32, text_color: Color32) -> Response;
    /// Red inline banner for forecast errors.
    fn error_banner(&mut self, text: &str);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(PLOT_CONFIG.color_text_subdued));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.label(RichText::new(label).color(PLOT_CONFIG.color_text_neutral));
            ui.label(RichText::new(value).strong().color(color));
        });
    }

    fn chip(&mut self, text: &str, fill: Color32, text_color: Color32) -> Response {
        Frame {
            fill,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 2),
            corner_radius: CornerRadius::same(10),
            ..Default::default()
        }
        .show(self, |ui| {
            ui.label(RichText::new(text).small().strong().color(text_color));
        })
        .response
    }

    fn error_banner(&mut self, text: &str) {
        Frame {
            fill: PLOT_CONFIG.color_loss.linear_multiply(0.25),
            stroke: Stroke::new(1.0, PLOT_CONFIG.color_loss),
            inner_margin: Margin::same(8),
            corner_radius: CornerRadius::same(4),
            ..Default::default()
        }
        .show(self, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(format!("{} {}", crate::ui::ui_text::ICON_WARNING, text))
                    .color(PLOT_CONFIG.color_text_neutral),
            );
        });
    }
}
