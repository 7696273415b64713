mod forecast_plot;
mod styles;
mod ui_config;
mod ui_render;
mod ui_text;

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use ui_render::{HeaderEvent, SettingsEvent};
