// src/app/state.rs

use {
    crate::{
        config::FORECAST,
        domain::{Currency, Horizon, Identity},
        ui::UI_TEXT,
    },
    serde::{Deserialize, Serialize},
};

/// UI choices that survive a restart. Forecasts themselves are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Preferences {
    pub(crate) symbol: String,
    pub(crate) horizon: Horizon,
    pub(crate) currency: Currency,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            symbol: FORECAST.symbol.to_string(),
            horizon: Horizon::default(),
            currency: Currency::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Page {
    #[default]
    Forecast,
    Profile,
}

/// The login window's text fields.
#[derive(Debug, Clone, Default)]
pub(crate) struct LoginForm {
    pub(crate) open: bool,
    pub(crate) email: String,
    pub(crate) display_name: String,
    pub(crate) photo_url: String,
    pub(crate) error: Option<&'static str>,
}

impl LoginForm {
    pub(crate) fn open(&mut self) {
        self.open = true;
        self.error = None;
    }

    /// Validate and turn the fields into an identity, closing the window on success.
    pub(crate) fn submit(&mut self) -> Option<Identity> {
        let email = self.email.trim();
        if !looks_like_email(email) {
            self.error = Some(UI_TEXT.login_invalid_email);
            return None;
        }
        let mut identity = Identity::new(email.to_lowercase(), email);
        let name = self.display_name.trim();
        if !name.is_empty() {
            identity = identity.with_display_name(name);
        }
        let photo = self.photo_url.trim();
        if !photo.is_empty() {
            identity = identity.with_photo_url(photo);
        }
        *self = Self::default();
        Some(identity)
    }
}

fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !s.contains(char::is_whitespace)
        }
        None => false,
    }
}
