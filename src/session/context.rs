use {
    crate::{
        config::NOTIFY,
        domain::Identity,
        session::{
            notification::{DismissReason, Notification},
            provider::{AuthListener, IdentityProvider, Subscription},
        },
        utils::{AppInstant, Spawner},
    },
    std::sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Who is logged in, and what the toast currently says.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<Identity>,
    pub alert: Notification,
}

/// Things that happen off the UI thread and are applied by [`SessionContext::poll`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    AuthChanged(Option<Identity>),
    SignedOut(Result<(), String>),
}

/// Session state for the whole app. Created once at start-up and handed to
/// every view that needs to know about the user.
pub struct SessionContext {
    provider: Arc<dyn IdentityProvider>,
    spawner: Spawner,
    session: Session,
    events_tx: Sender<SessionEvent>,
    events_rx: Receiver<SessionEvent>,
    subscription: Option<Subscription>,
    pending_sign_outs: usize,
}

impl SessionContext {
    /// Subscribes to the provider straight away.
    pub fn start(provider: Arc<dyn IdentityProvider>, spawner: Spawner) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        let mut ctx = Self {
            provider,
            spawner,
            session: Session::default(),
            events_tx,
            events_rx,
            subscription: None,
            pending_sign_outs: 0,
        };
        ctx.subscribe();
        ctx
    }

    fn subscribe(&mut self) {
        let tx = self.events_tx.clone();
        let listener: AuthListener = Box::new(move |identity| {
            let _ = tx.send(SessionEvent::AuthChanged(identity));
        });
        self.subscription = Some(self.provider.subscribe(listener));
    }

    pub fn user(&self) -> Option<&Identity> {
        self.session.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.user.is_some()
    }

    pub fn alert(&self) -> &Notification {
        &self.session.alert
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// A sign-out is still waiting on the provider.
    pub fn is_busy(&self) -> bool {
        self.pending_sign_outs > 0
    }

    /// Apply everything that arrived since the last frame.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
            changed = true;
        }
        changed
    }

    pub fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::AuthChanged(identity) => {
                #[cfg(debug_assertions)]
                if DF.log_session {
                    log::info!(
                        "Auth state changed: {}",
                        identity.as_ref().map_or("<signed out>", |i| i.email.as_str())
                    );
                }
                if let Some(user) = &identity {
                    self.session.alert = Notification::success(format!(
                        "{} {}!",
                        NOTIFY.welcome_back, user.email
                    ));
                }
                self.session.user = identity;
            }
            SessionEvent::SignedOut(result) => {
                self.pending_sign_outs = self.pending_sign_outs.saturating_sub(1);
                self.session.alert = match result {
                    Ok(()) => Notification::success(NOTIFY.logged_out),
                    Err(message) => Notification::error(message),
                };
            }
        }
    }

    /// Ask the provider to end the session. Outcome arrives as a toast.
    pub fn logout(&mut self) {
        self.pending_sign_outs += 1;
        let provider = self.provider.clone();
        let tx = self.events_tx.clone();
        self.spawner.spawn(async move {
            let result = provider.sign_out().await.map_err(|e| {
                log::error!("Error logging out: {:#}", e);
                e.to_string()
            });
            let _ = tx.send(SessionEvent::SignedOut(result));
        });
    }

    pub fn set_alert(&mut self, notification: Notification) {
        self.session.alert = notification;
    }

    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        self.session.alert.dismiss(reason)
    }

    pub fn tick(&mut self, now: AppInstant) -> bool {
        self.session.alert.tick(now)
    }

    /// Release the provider listener. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(sub) = self.subscription.take() {
            #[cfg(debug_assertions)]
            if DF.log_session {
                log::info!("Session context shutting down, unsubscribing from identity provider");
            }
            sub.unsubscribe();
        }
    }
}

impl Drop for SessionContext {
    fn drop(&mut self) {
        self.shutdown();
    }
}
