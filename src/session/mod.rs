//! Login state and toast notifications.

mod context;
mod local_provider;
mod notification;
mod provider;

pub use {
    context::{Session, SessionContext, SessionEvent},
    local_provider::LocalIdentityProvider,
    notification::{DismissReason, Notification, NotificationKind},
    provider::{AuthListener, IdentityProvider, Subscription},
};
