use {
    eframe::{
        Frame, Storage,
        egui::{Context, Visuals},
    },
    std::{sync::Arc, time::Duration},
};

use crate::{
    Cli,
    app::{LoginForm, Page, Preferences},
    config::API,
    data::{ForecastApi, HttpForecastApi},
    domain::{Currency, Horizon},
    forecast::ForecastController,
    session::{LocalIdentityProvider, Notification, SessionContext},
    ui::{HeaderEvent, SettingsEvent, UI_CONFIG, UI_TEXT},
    utils::{AppInstant, Spawner},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// How often to wake up while a request is outstanding.
const BUSY_REPAINT: Duration = Duration::from_millis(50);

pub struct App {
    pub(crate) prefs: Preferences,
    pub(crate) session: SessionContext,
    pub(crate) identity: LocalIdentityProvider,
    pub(crate) forecast: ForecastController,
    pub(crate) page: Page,
    pub(crate) login: LoginForm,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<Self> {
        let stored: Preferences = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        let prefs = apply_cli_overrides(stored, &args);

        egui_extras::install_image_loaders(&cc.egui_ctx);

        let spawner = Spawner::new()?;
        let api_url = args.api_url.as_deref().unwrap_or(API.base_url);
        let api: Arc<dyn ForecastApi> = Arc::new(HttpForecastApi::new(api_url)?);
        log::info!("Using prediction service at {}", api_url);

        Ok(Self::with_parts(prefs, api, LocalIdentityProvider::new(), spawner))
    }

    pub(crate) fn with_parts(
        prefs: Preferences,
        api: Arc<dyn ForecastApi>,
        identity: LocalIdentityProvider,
        spawner: Spawner,
    ) -> Self {
        let session = SessionContext::start(Arc::new(identity.clone()), spawner.clone());
        let forecast =
            ForecastController::new(api, spawner, prefs.symbol.clone(), prefs.horizon);
        Self {
            prefs,
            session,
            identity,
            forecast,
            page: Page::default(),
            login: LoginForm::default(),
        }
    }

    pub(crate) fn currency(&self) -> Currency {
        self.prefs.currency
    }

    /// Drain background results and expire the toast.
    pub(crate) fn pump(&mut self, now: AppInstant) {
        self.session.poll();
        self.session.tick(now);
        self.forecast.mount();
        self.forecast.poll(self.prefs.currency);
    }

    pub(crate) fn handle_header_event(&mut self, event: HeaderEvent) {
        match event {
            HeaderEvent::Home => self.page = Page::Forecast,
            HeaderEvent::CurrencyChanged(currency) => {
                self.prefs.currency = currency;
                self.forecast.on_currency_changed(currency);
            }
            HeaderEvent::Login => self.login.open(),
            HeaderEvent::Profile => {
                if self.session.is_logged_in() {
                    self.page = Page::Profile;
                } else {
                    self.session
                        .set_alert(Notification::info(UI_TEXT.session_login_prompt));
                    self.login.open();
                }
            }
            HeaderEvent::Logout => {
                self.session.logout();
                self.page = Page::Forecast;
            }
        }
    }

    pub(crate) fn handle_settings_event(&mut self, event: SettingsEvent) {
        match event {
            SettingsEvent::Symbol(symbol) => {
                self.forecast.set_symbol(symbol.clone());
                self.prefs.symbol = symbol;
            }
            SettingsEvent::Horizon(days) => {
                self.forecast.set_horizon(days);
                self.prefs.horizon = self.forecast.state().horizon();
            }
            SettingsEvent::Generate => {
                self.forecast.generate(self.prefs.currency);
            }
        }
    }

    pub(crate) fn submit_login(&mut self) {
        if let Some(identity) = self.login.submit() {
            self.identity.sign_in(identity);
        }
    }

    fn schedule_repaint(&self, ctx: &Context, now: AppInstant) {
        if self.session.is_busy() || self.forecast.is_busy() {
            ctx.request_repaint_after(BUSY_REPAINT);
        }
        if let Some(remaining) = self.session.alert().remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}

fn apply_cli_overrides(mut prefs: Preferences, args: &Cli) -> Preferences {
    if let Some(currency) = args.currency {
        prefs.currency = currency;
    }
    if let Some(symbol) = &args.symbol {
        prefs.symbol = symbol.to_uppercase();
    }
    if let Some(days) = args.days {
        prefs.horizon = Horizon::new(days);
    }
    prefs
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let now = AppInstant::now();
        self.pump(now);

        self.render_header(ctx);
        self.render_status_panel(ctx);
        match self.page {
            Page::Forecast => {
                self.render_settings_panel(ctx);
                self.render_forecast_panel(ctx);
            }
            Page::Profile => self.render_profile_panel(ctx),
        }
        self.render_login_window(ctx);
        self.render_toast(ctx);

        self.schedule_repaint(ctx, now);
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        #[cfg(debug_assertions)]
        if DF.log_prefs {
            log::info!("💾 SAVE [App]: {:?}", self.prefs);
        }
        eframe::set_value(storage, eframe::APP_KEY, &self.prefs);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.side_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.selection.bg_fill = UI_CONFIG.colors.accent.linear_multiply(0.6);
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use {
        super::*,
        crate::{domain::Identity, session::NotificationKind},
        tokio::runtime::Handle,
    };

    fn app() -> App {
        // Nothing is mounted, so no request ever reaches this address.
        let api: Arc<dyn ForecastApi> = Arc::new(HttpForecastApi::new("http://127.0.0.1:9").unwrap());
        App::with_parts(
            Preferences::default(),
            api,
            LocalIdentityProvider::new(),
            Spawner::from_handle(Handle::current()),
        )
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn profile_click_while_logged_out_prompts_login() {
        let mut app = app();
        app.session.poll();
        app.handle_header_event(HeaderEvent::Profile);

        assert_eq!(app.page, Page::Forecast);
        assert!(app.login.open);
        assert_eq!(app.session.alert().kind, NotificationKind::Info);
        assert_eq!(app.session.alert().message, "Please login to view your profile");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn profile_click_while_logged_in_opens_profile() {
        let mut app = app();
        app.identity.sign_in(Identity::new("u", "u@example.com"));
        app.session.poll();
        app.handle_header_event(HeaderEvent::Profile);
        assert_eq!(app.page, Page::Profile);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn login_form_signs_in_through_provider() {
        let mut app = app();
        app.login.open();
        app.login.email = "hodl@example.com".into();
        app.submit_login();
        app.session.poll();

        assert_eq!(app.session.user().unwrap().email, "hodl@example.com");
        assert_eq!(app.session.alert().message, "Welcome back, hodl@example.com!");
        assert!(!app.login.open);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn settings_events_update_preferences_without_fetching() {
        let mut app = app();
        app.handle_settings_event(SettingsEvent::Symbol("ETH".into()));
        app.handle_settings_event(SettingsEvent::Horizon(47));

        assert_eq!(app.prefs.symbol, "ETH");
        assert_eq!(app.prefs.horizon.days(), 45);
        assert_eq!(app.forecast.state().symbol(), "ETH");
        assert_eq!(app.forecast.state().latest_generation(), 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn currency_change_is_remembered_even_before_coins_load() {
        let mut app = app();
        app.handle_header_event(HeaderEvent::CurrencyChanged(Currency::Inr));
        assert_eq!(app.currency(), Currency::Inr);
        assert_eq!(app.forecast.state().latest_generation(), 0);
    }

    #[test]
    fn cli_overrides_win() {
        let args = Cli {
            api_url: None,
            currency: Some(Currency::Inr),
            symbol: Some("sol".into()),
            days: Some(12),
        };
        let prefs = apply_cli_overrides(Preferences::default(), &args);
        assert_eq!(prefs.currency, Currency::Inr);
        assert_eq!(prefs.symbol, "SOL");
        assert_eq!(prefs.horizon.days(), 10);
    }
}
