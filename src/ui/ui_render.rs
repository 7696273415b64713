use eframe::egui::{
    Align, Align2, Area, Button, CentralPanel, ComboBox, Context, CornerRadius, Frame, Id, Image,
    Layout, Margin, Order, RichText, ScrollArea, SidePanel, Slider, Spinner, Stroke, TextEdit,
    TopBottomPanel, Ui, Window, vec2,
};
use strum::IntoEnumIterator;

use crate::app::App;
use crate::config::{FORECAST, PLOT_CONFIG};
use crate::domain::{Currency, Horizon, Identity};
use crate::forecast::{ForecastSummary, ServerStatus, chart_series};
use crate::session::DismissReason;
use crate::ui::forecast_plot::show_forecast_plot;
use crate::ui::styles::{
    ToastColor, UiStyleExt, get_change_color, model_badge_color, section_heading,
};
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::{ICON_CHART, ICON_CLOSE, ICON_DOWN, ICON_UP, ICON_USER, UI_TEXT};

/// Clicks in the header bar.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum HeaderEvent {
    Home,
    CurrencyChanged(Currency),
    Login,
    Profile,
    Logout,
}

/// Edits made in the forecast settings panel.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SettingsEvent {
    Symbol(String),
    Horizon(u32),
    Generate,
}

fn avatar(ui: &mut Ui, user: &Identity, size: f32) {
    match &user.photo_url {
        Some(url) => {
            ui.add(
                Image::new(url.as_str())
                    .fit_to_exact_size(vec2(size, size))
                    .corner_radius(CornerRadius::same((size / 2.0) as u8)),
            );
        }
        None => {
            ui.label(RichText::new(ICON_USER).size(size * 0.8));
        }
    }
}

impl App {
    pub(crate) fn render_header(&mut self, ctx: &Context) {
        let mut events = Vec::new();

        TopBottomPanel::top("header")
            .frame(UI_CONFIG.top_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let title = RichText::new(format!("{} {}", ICON_CHART, UI_TEXT.app_title))
                        .heading()
                        .color(UI_CONFIG.colors.heading);
                    if ui.add(Button::new(title).frame(false)).clicked() {
                        events.push(HeaderEvent::Home);
                    }
                    ui.separator();
                    if ui.button(UI_TEXT.header_forecast).clicked() {
                        events.push(HeaderEvent::Home);
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        match self.session.user() {
                            Some(user) => {
                                if ui.button(UI_TEXT.header_logout).clicked() {
                                    events.push(HeaderEvent::Logout);
                                }
                                let name = user
                                    .display_name
                                    .as_deref()
                                    .unwrap_or(UI_TEXT.header_profile_fallback);
                                let profile = ui
                                    .horizontal(|ui| {
                                        ui.label(name);
                                        avatar(ui, user, UI_CONFIG.avatar_size);
                                    })
                                    .response
                                    .interact(eframe::egui::Sense::click());
                                if profile.on_hover_text(&user.email).clicked() {
                                    events.push(HeaderEvent::Profile);
                                }
                            }
                            None => {
                                if ui.button(UI_TEXT.header_login).clicked() {
                                    events.push(HeaderEvent::Login);
                                }
                                if ui.button(ICON_USER).clicked() {
                                    events.push(HeaderEvent::Profile);
                                }
                            }
                        }

                        ui.separator();

                        let mut currency = self.prefs.currency;
                        ComboBox::from_id_salt("header_currency")
                            .selected_text(currency.to_string())
                            .show_ui(ui, |ui| {
                                for c in Currency::iter() {
                                    ui.selectable_value(&mut currency, c, c.to_string());
                                }
                            });
                        ui.label(UI_TEXT.header_currency);
                        if currency != self.prefs.currency {
                            events.push(HeaderEvent::CurrencyChanged(currency));
                        }
                    });
                });
            });

        for event in events {
            self.handle_header_event(event);
        }
    }

    pub(crate) fn render_settings_panel(&mut self, ctx: &Context) {
        let mut events = Vec::new();

        SidePanel::left("settings_panel")
            .resizable(false)
            .exact_width(UI_CONFIG.side_panel_width)
            .frame(UI_CONFIG.side_panel_frame())
            .show(ctx, |ui| {
                events = self.settings_panel(ui);
            });

        for event in events {
            self.handle_settings_event(event);
        }
    }

    fn settings_panel(&self, ui: &mut Ui) -> Vec<SettingsEvent> {
        let mut events = Vec::new();
        let state = self.forecast.state();

        ui.label(section_heading(UI_TEXT.settings_heading));
        ui.add_space(8.0);

        // Days
        ui.horizontal(|ui| {
            ui.label(UI_TEXT.settings_days);
            ui.chip(
                &format!("{} days", state.horizon()),
                UI_CONFIG.colors.accent,
                UI_CONFIG.colors.central_panel,
            );
        });
        let mut days = state.horizon().days();
        let slider = Slider::new(&mut days, Horizon::min().days()..=Horizon::max().days())
            .step_by(FORECAST.horizon.step as f64)
            .show_value(false);
        if ui.add(slider).changed() && days != state.horizon().days() {
            events.push(SettingsEvent::Horizon(days));
        }
        ui.add_space(8.0);

        // Symbol
        ui.label(UI_TEXT.settings_symbol);
        let mut symbol = state.symbol().to_string();
        ui.add_enabled_ui(!state.is_loading_assets(), |ui| {
            ComboBox::from_id_salt("settings_symbol")
                .selected_text(symbol.clone())
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for s in state.supported_symbols() {
                        ui.selectable_value(&mut symbol, s.clone(), s);
                    }
                });
        });
        if symbol != state.symbol() {
            events.push(SettingsEvent::Symbol(symbol));
        }
        ui.add_space(8.0);

        // Currency is chosen in the header
        ui.horizontal(|ui| {
            ui.label(UI_TEXT.settings_currency);
            ui.label(RichText::new(self.prefs.currency.to_string()).strong());
        });
        ui.label_subdued(UI_TEXT.settings_currency_hint);
        ui.add_space(12.0);

        let label = if state.is_loading() {
            UI_TEXT.button_generating
        } else {
            UI_TEXT.button_generate
        };
        let button = Button::new(RichText::new(label).strong())
            .min_size(vec2(ui.available_width(), 32.0));
        if ui.add_enabled(state.can_generate(), button).clicked() {
            events.push(SettingsEvent::Generate);
        }

        if let Some(request) = state.shown_request() {
            ui.add_space(12.0);
            ui.separator();
            ui.label(section_heading(UI_TEXT.settings_current));
            ui.label(format!(
                "{} / {} days / {}",
                request.symbol, request.horizon, request.currency
            ));
        }

        events
    }

    pub(crate) fn render_forecast_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    self.forecast_panel(ui);
                });
            });
    }

    fn forecast_panel(&self, ui: &mut Ui) {
        let state = self.forecast.state();

        ui.heading(RichText::new(UI_TEXT.forecast_title).color(UI_CONFIG.colors.heading));
        ui.add_space(8.0);

        if let Some(error) = state.error() {
            ui.error_banner(error);
            ui.add_space(8.0);
        }

        if state.is_loading_assets() {
            render_busy(ui, UI_TEXT.cp_loading_coins);
            return;
        }
        if state.is_loading() {
            render_busy(ui, UI_TEXT.cp_generating);
        }

        let (Some(result), Some(request)) = (state.result(), state.shown_request()) else {
            if !state.is_loading() {
                ui.label_subdued(UI_TEXT.cp_no_data);
            }
            return;
        };

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!(
                    "{} for {} days in {}",
                    request.symbol, request.horizon, request.currency
                ))
                .strong()
                .size(16.0),
            );
            ui.label(UI_TEXT.cp_model_prefix);
            let kind = result.model_kind();
            ui.chip(
                crate::forecast::model_badge(kind),
                model_badge_color(kind),
                PLOT_CONFIG.color_text_neutral,
            );
        });
        ui.add_space(8.0);

        let series = chart_series(result);
        if !series.is_empty() {
            UI_CONFIG.card_frame().show(ui, |ui| {
                show_forecast_plot(ui, &request.symbol, &series, request.currency);
            });
            ui.add_space(8.0);
        }

        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(section_heading(UI_TEXT.details_heading));
            let summary = state
                .delta()
                .and_then(|delta| ForecastSummary::build(result, delta, request.currency));
            match summary {
                Some(summary) => render_details(ui, &summary),
                None => ui.label_subdued(UI_TEXT.cp_empty_forecast),
            }
        });
    }

    pub(crate) fn render_profile_panel(&mut self, ctx: &Context) {
        let mut back = false;

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ui.heading(RichText::new(UI_TEXT.profile_title).color(UI_CONFIG.colors.heading));
                ui.add_space(8.0);
                match self.session.user() {
                    Some(user) => {
                        UI_CONFIG.card_frame().show(ui, |ui| {
                            ui.horizontal(|ui| {
                                avatar(ui, user, UI_CONFIG.avatar_size * 3.0);
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(user.label()).strong().size(18.0));
                                    ui.horizontal(|ui| {
                                        ui.label(UI_TEXT.profile_email);
                                        ui.label(&user.email);
                                    });
                                    if let Some(name) = &user.display_name {
                                        ui.horizontal(|ui| {
                                            ui.label(UI_TEXT.profile_name);
                                            ui.label(name);
                                        });
                                    }
                                });
                            });
                        });
                    }
                    None => {
                        ui.label_subdued(UI_TEXT.session_login_prompt);
                    }
                }
                ui.add_space(12.0);
                back = ui.button(UI_TEXT.profile_back).clicked();
            });

        if back {
            self.handle_header_event(HeaderEvent::Home);
        }
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        let mut recheck = false;

        TopBottomPanel::bottom("status_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(UI_TEXT.status_server).small());
                    match self.forecast.server_status() {
                        ServerStatus::Unknown => {
                            ui.label(
                                RichText::new(UI_TEXT.status_unknown)
                                    .small()
                                    .color(PLOT_CONFIG.color_info),
                            );
                        }
                        ServerStatus::Online { model_loaded } => {
                            ui.label(
                                RichText::new(UI_TEXT.status_online)
                                    .small()
                                    .color(PLOT_CONFIG.color_gain),
                            );
                            ui.separator();
                            let (text, color) = if *model_loaded {
                                (UI_TEXT.status_model_loaded, PLOT_CONFIG.color_text_subdued)
                            } else {
                                (UI_TEXT.status_no_model, PLOT_CONFIG.color_warning)
                            };
                            ui.label(RichText::new(text).small().color(color));
                        }
                        ServerStatus::Offline => {
                            ui.label(
                                RichText::new(UI_TEXT.status_offline)
                                    .small()
                                    .color(PLOT_CONFIG.color_loss),
                            );
                        }
                    }
                    ui.separator();
                    recheck = ui.small_button(UI_TEXT.status_recheck).clicked();
                });
            });

        if recheck {
            self.forecast.refresh_health();
        }
    }

    pub(crate) fn render_toast(&mut self, ctx: &Context) {
        let alert = self.session.alert();
        if !alert.visible {
            return;
        }
        let fill = alert.kind.fill();
        let message = alert.message.clone();

        let mut close = false;
        let area = Area::new(Id::new("toast"))
            .order(Order::Foreground)
            .anchor(Align2::CENTER_TOP, vec2(0.0, 48.0))
            .show(ctx, |ui| {
                Frame {
                    fill,
                    stroke: Stroke::NONE,
                    inner_margin: Margin::symmetric(14, 8),
                    corner_radius: CornerRadius::same(6),
                    ..Default::default()
                }
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(message).color(PLOT_CONFIG.color_text_neutral));
                        close = ui
                            .add(Button::new(ICON_CLOSE).frame(false).small())
                            .clicked();
                    });
                });
            });

        if close {
            self.session.dismiss(DismissReason::CloseButton);
        } else if ctx.input(|i| i.pointer.any_click()) && !area.response.hovered() {
            self.session.dismiss(DismissReason::ClickAway);
        }
    }

    pub(crate) fn render_login_window(&mut self, ctx: &Context) {
        if !self.login.open {
            return;
        }
        let mut open = true;
        let mut submit = false;

        Window::new(UI_TEXT.login_title)
            .collapsible(false)
            .resizable(false)
            .order(Order::Foreground)
            .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(UI_TEXT.login_email);
                let email = ui.add(TextEdit::singleline(&mut self.login.email).hint_text("you@example.com"));
                ui.label(UI_TEXT.login_name);
                ui.text_edit_singleline(&mut self.login.display_name);
                ui.label(UI_TEXT.login_photo);
                ui.add(TextEdit::singleline(&mut self.login.photo_url).hint_text("https://"));
                if let Some(error) = self.login.error {
                    ui.label(RichText::new(error).color(PLOT_CONFIG.color_loss));
                }
                ui.add_space(6.0);
                let enter = email.lost_focus() && ui.input(|i| i.key_pressed(eframe::egui::Key::Enter));
                submit = ui.button(UI_TEXT.login_submit).clicked() || enter;
            });

        if submit {
            self.submit_login();
        }
        if !open {
            self.login.open = false;
        }
    }
}

fn render_busy(ui: &mut Ui, text: &str) {
    ui.horizontal(|ui| {
        ui.add(Spinner::new());
        ui.label(text);
    });
}

fn render_details(ui: &mut Ui, summary: &ForecastSummary) {
    let color = get_change_color(summary.is_gain);
    let arrow = if summary.is_gain { ICON_UP } else { ICON_DOWN };

    ui.metric(UI_TEXT.details_start, &summary.start_price, PLOT_CONFIG.color_text_neutral);
    ui.metric(UI_TEXT.details_end, &summary.end_price, PLOT_CONFIG.color_text_neutral);
    ui.metric(
        UI_TEXT.details_change,
        &format!("{} {}", arrow, summary.change_amount),
        color,
    );
    ui.metric(
        UI_TEXT.details_change_pct,
        &format!("{} {}", arrow, summary.change_percentage),
        color,
    );
}
