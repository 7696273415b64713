//! Login, logout and toast lifecycle through the public session API.

use {
    coin_forecast::{
        Identity, LocalIdentityProvider, SessionContext, Spawner,
        session::{DismissReason, Notification, NotificationKind},
    },
    std::{sync::Arc, time::Duration},
    tokio::runtime::Handle,
};

fn start(provider: &LocalIdentityProvider) -> SessionContext {
    SessionContext::start(
        Arc::new(provider.clone()),
        Spawner::from_handle(Handle::current()),
    )
}

async fn settle(ctx: &mut SessionContext) {
    for _ in 0..200 {
        ctx.poll();
        if !ctx.is_busy() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("session never settled");
}

#[tokio::test(flavor = "multi_thread")]
async fn sign_in_then_out() {
    let provider = LocalIdentityProvider::new();
    let mut ctx = start(&provider);
    settle(&mut ctx).await;
    assert!(!ctx.is_logged_in());
    assert!(!ctx.alert().visible);

    provider.sign_in(Identity::new("alice", "alice@example.com").with_display_name("Alice"));
    settle(&mut ctx).await;
    assert_eq!(ctx.user().unwrap().label(), "Alice");
    assert_eq!(ctx.alert().kind, NotificationKind::Success);
    assert_eq!(ctx.alert().message, "Welcome back, alice@example.com!");

    ctx.logout();
    settle(&mut ctx).await;
    assert!(!ctx.is_logged_in());
    assert_eq!(ctx.alert().kind, NotificationKind::Success);
    assert_eq!(ctx.alert().message, "Logged out successfully!");
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_sign_out_keeps_user_and_shows_error() {
    let provider = LocalIdentityProvider::new();
    provider.sign_in(Identity::new("bob", "bob@example.com"));
    let mut ctx = start(&provider);
    settle(&mut ctx).await;
    assert!(ctx.is_logged_in());

    provider.fail_next_sign_out("network unreachable");
    ctx.logout();
    settle(&mut ctx).await;

    assert!(ctx.is_logged_in());
    assert!(ctx.alert().visible);
    assert_eq!(ctx.alert().kind, NotificationKind::Error);
    assert_eq!(ctx.alert().message, "network unreachable");
}

#[tokio::test(flavor = "multi_thread")]
async fn toast_survives_click_away_and_hides_after_timeout() {
    let provider = LocalIdentityProvider::new();
    let mut ctx = start(&provider);
    ctx.set_alert(Notification::info("Please login to view your profile"));

    assert!(!ctx.dismiss(DismissReason::ClickAway));
    assert!(ctx.alert().visible);

    let shown = ctx.alert().shown_at().unwrap();
    assert!(!ctx.tick(shown + Duration::from_millis(2_999)));
    assert!(ctx.alert().visible);
    assert!(ctx.tick(shown + Duration::from_millis(3_000)));
    assert!(!ctx.alert().visible);
}

#[tokio::test(flavor = "multi_thread")]
async fn newer_toast_replaces_older_one() {
    let provider = LocalIdentityProvider::new();
    let mut ctx = start(&provider);
    ctx.set_alert(Notification::error("first"));
    ctx.set_alert(Notification::success("second"));
    assert_eq!(ctx.alert().message, "second");
    assert!(ctx.dismiss(DismissReason::CloseButton));
    assert!(!ctx.alert().visible);
}

#[tokio::test(flavor = "multi_thread")]
async fn dropping_the_context_releases_the_listener() {
    let provider = LocalIdentityProvider::new();
    {
        let mut ctx = start(&provider);
        assert_eq!(provider.listener_count(), 1);
        ctx.shutdown();
        ctx.shutdown();
        assert_eq!(provider.listener_count(), 0);
    }
    {
        let _ctx = start(&provider);
        assert_eq!(provider.listener_count(), 1);
    }
    assert_eq!(provider.listener_count(), 0);
}
