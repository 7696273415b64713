pub struct NotifyConfig {
    /// Toasts hide themselves after this long unless closed first.
    pub auto_hide_ms: u64,
    /// Followed by the user's email and `!`.
    pub welcome_back: &'static str,
    pub logged_out: &'static str,
}

pub const NOTIFY: NotifyConfig = NotifyConfig {
    auto_hide_ms: 3000,
    welcome_back: "Welcome back,",
    logged_out: "Logged out successfully!",
};
