//! Debugging feature flags.

pub struct LogFlags {
    /// Identity provider events and logout outcomes.
    pub log_session: bool,

    /// Every request sent to the prediction service.
    pub log_fetch: bool,

    /// Forecast responses dropped because a newer request superseded them.
    pub log_stale_responses: bool,

    pub log_prefs: bool,
}

pub const DF: LogFlags = LogFlags {
    log_session: true,
    log_fetch: true,
    log_stale_responses: true,

    log_prefs: false,
};
