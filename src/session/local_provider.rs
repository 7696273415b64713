use {
    crate::{
        domain::Identity,
        session::provider::{AuthListener, IdentityProvider, Subscription},
    },
    anyhow::{Result, bail},
    async_trait::async_trait,
    std::{
        collections::BTreeMap,
        sync::{Arc, Mutex, MutexGuard},
    },
};

#[cfg(debug_assertions)]
use crate::config::DF;

type SharedListener = Arc<dyn Fn(Option<Identity>) + Send + Sync>;

#[derive(Default)]
struct LocalState {
    current: Option<Identity>,
    listeners: BTreeMap<u64, SharedListener>,
    next_id: u64,
    sign_out_failure: Option<String>,
}

/// In-process identity provider. Keeps nothing on disk; used when no external
/// provider is configured, and as the test double.
#[derive(Clone, Default)]
pub struct LocalIdentityProvider {
    inner: Arc<Mutex<LocalState>>,
}

impl LocalIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, LocalState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn current(&self) -> Option<Identity> {
        self.state().current.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.state().listeners.len()
    }

    /// Sign in and tell every listener.
    pub fn sign_in(&self, identity: Identity) {
        #[cfg(debug_assertions)]
        if DF.log_session {
            log::info!("Local provider: signed in {}", identity.email);
        }
        self.state().current = Some(identity.clone());
        self.notify(Some(identity));
    }

    /// Make the next `sign_out` fail with `message`.
    pub fn fail_next_sign_out(&self, message: impl Into<String>) {
        self.state().sign_out_failure = Some(message.into());
    }

    // Listeners run outside the lock so they may call back into the provider.
    fn notify(&self, identity: Option<Identity>) {
        let listeners: Vec<SharedListener> = self.state().listeners.values().cloned().collect();
        for listener in listeners {
            listener(identity.clone());
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl IdentityProvider for LocalIdentityProvider {
    fn subscribe(&self, listener: AuthListener) -> Subscription {
        let listener: SharedListener = Arc::from(listener);
        let (id, current) = {
            let mut state = self.state();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.insert(id, listener.clone());
            (id, state.current.clone())
        };
        listener(current);

        let inner = self.inner.clone();
        Subscription::new(move || {
            let mut state = inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            state.listeners.remove(&id);
        })
    }

    async fn sign_out(&self) -> Result<()> {
        let failure = self.state().sign_out_failure.take();
        if let Some(message) = failure {
            bail!(message);
        }
        self.state().current = None;
        self.notify(None);
        Ok(())
    }
}
