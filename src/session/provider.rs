use {
    crate::domain::Identity,
    async_trait::async_trait,
    std::fmt,
};

/// Called with the new identity (or `None`) whenever the sign-in state changes.
pub type AuthListener = Box<dyn Fn(Option<Identity>) + Send + Sync>;

/// The external service that owns login state.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait IdentityProvider: Send + Sync {
    /// Register for auth-state changes. Providers report the current state
    /// once straight away.
    fn subscribe(&self, listener: AuthListener) -> Subscription;

    async fn sign_out(&self) -> anyhow::Result<()>;
}

/// Handle for a registered listener. Released exactly once, on
/// [`Subscription::unsubscribe`] or drop.
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}
