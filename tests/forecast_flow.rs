//! Drives the forecast controller against a mock prediction service.

use {
    coin_forecast::{
        Currency, ForecastController, Horizon, HttpForecastApi, Spawner,
        forecast::{FetchPhase, ServerStatus},
    },
    serde_json::json,
    std::{sync::Arc, time::Duration},
    tokio::runtime::Handle,
    wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, body_partial_json, method, path},
    },
};

fn controller(server: &MockServer, symbol: &str, days: u32) -> ForecastController {
    let api = Arc::new(HttpForecastApi::new(server.uri()).unwrap());
    ForecastController::new(
        api,
        Spawner::from_handle(Handle::current()),
        symbol,
        Horizon::new(days),
    )
}

/// Poll until nothing is on the wire and the coin list has landed.
async fn settle(ctrl: &mut ForecastController, currency: Currency) {
    for _ in 0..300 {
        ctrl.poll(currency);
        if !ctrl.is_busy() && !ctrl.state().is_loading_assets() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("controller never settled");
}

async fn mount_coins(server: &MockServer, coins: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/supported_coins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "supported_coins": coins })))
        .mount(server)
        .await;
}

fn btc_predictions() -> serde_json::Value {
    json!({
        "symbol": "BTC",
        "currency": "USD",
        "model_type": "linear_regression",
        "predictions": [
            { "date": "2024-01-01", "price": 100.0 },
            { "date": "2024-01-02", "price": 105.0 },
            { "date": "2024-01-03", "price": 110.0 }
        ]
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn mount_loads_coins_then_issues_first_forecast() {
    let server = MockServer::start().await;
    mount_coins(&server, &["BTC", "ETH", "DOGE"]).await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(json!({ "symbol": "BTC", "days": 30, "currency": "USD" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(btc_predictions()))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctrl = controller(&server, "BTC", 30);
    ctrl.mount();
    ctrl.mount();
    settle(&mut ctrl, Currency::Usd).await;

    let state = ctrl.state();
    assert_eq!(state.supported_symbols(), ["BTC", "ETH", "DOGE"]);
    assert_eq!(state.phase(), &FetchPhase::Success);
    assert_eq!(state.result().unwrap().model_type, "linear_regression");
    let delta = state.delta().unwrap();
    assert!((delta.amount - 10.0).abs() < 1e-9);
    assert!((delta.percentage.unwrap() - 10.0).abs() < 1e-9);
    assert!(state.can_generate());
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_coin_list_falls_back_and_still_forecasts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/supported_coins"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "predictions": [{ "date": "2024-01-01", "price": 42.0 }]
        })))
        .mount(&server)
        .await;

    let mut ctrl = controller(&server, "BTC", 30);
    ctrl.mount();
    settle(&mut ctrl, Currency::Usd).await;

    let state = ctrl.state();
    assert_eq!(
        state.supported_symbols(),
        ["BTC", "ETH", "FTT", "FXS", "GALA", "SOL", "ADA", "DOT"]
    );
    assert!(state.error().is_none());
    // No model_type in the body means the fallback model answered.
    assert_eq!(state.result().unwrap().model_type, "fallback");
}

#[tokio::test(flavor = "multi_thread")]
async fn service_error_keeps_previous_forecast() {
    let server = MockServer::start().await;
    mount_coins(&server, &["BTC", "XYZ"]).await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_partial_json(json!({ "symbol": "BTC" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(btc_predictions()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_partial_json(json!({ "symbol": "XYZ" })))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "Unknown symbol XYZ" })))
        .mount(&server)
        .await;

    let mut ctrl = controller(&server, "BTC", 30);
    ctrl.mount();
    settle(&mut ctrl, Currency::Usd).await;

    ctrl.set_symbol("XYZ");
    assert!(ctrl.generate(Currency::Usd));
    settle(&mut ctrl, Currency::Usd).await;

    let state = ctrl.state();
    assert_eq!(state.error(), Some("Unknown symbol XYZ"));
    assert_eq!(state.shown_request().unwrap().symbol, "BTC");
    assert_eq!(state.result().unwrap().predictions.len(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn garbage_body_reports_connection_failure() {
    let server = MockServer::start().await;
    mount_coins(&server, &["BTC"]).await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad gateway</html>"))
        .mount(&server)
        .await;

    let mut ctrl = controller(&server, "BTC", 30);
    ctrl.mount();
    settle(&mut ctrl, Currency::Usd).await;

    assert_eq!(
        ctrl.state().error(),
        Some("Failed to connect to prediction server. Please make sure the backend is running.")
    );
    assert!(ctrl.state().result().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn currency_change_refetches_in_new_currency() {
    let server = MockServer::start().await;
    mount_coins(&server, &["BTC"]).await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_partial_json(json!({ "currency": "USD" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(btc_predictions()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_partial_json(json!({ "currency": "INR" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model_type": "linear_regression",
            "predictions": [
                { "date": "2024-01-01", "price": 8300.0 },
                { "date": "2024-01-02", "price": 8134.0 }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctrl = controller(&server, "BTC", 30);
    ctrl.mount();
    settle(&mut ctrl, Currency::Usd).await;

    assert!(!ctrl.on_currency_changed(Currency::Usd));
    assert!(ctrl.on_currency_changed(Currency::Inr));
    settle(&mut ctrl, Currency::Inr).await;

    let state = ctrl.state();
    assert_eq!(state.shown_request().unwrap().currency, Currency::Inr);
    assert!(!state.delta().unwrap().is_gain());
}

#[tokio::test(flavor = "multi_thread")]
async fn slow_stale_answer_does_not_overwrite_newer_one() {
    let server = MockServer::start().await;
    mount_coins(&server, &["BTC", "ETH"]).await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_partial_json(json!({ "symbol": "BTC" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(btc_predictions())
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_partial_json(json!({ "symbol": "ETH" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model_type": "fallback",
            "predictions": [{ "date": "2024-01-01", "price": 2000.0 }]
        })))
        .mount(&server)
        .await;

    let mut ctrl = controller(&server, "BTC", 30);
    ctrl.mount();
    // Wait for the coin list so the initial BTC request is in flight.
    while ctrl.state().is_loading_assets() {
        ctrl.poll(Currency::Usd);
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert!(ctrl.state().is_loading());

    ctrl.set_symbol("ETH");
    assert!(ctrl.load_forecast(Currency::Usd));
    settle(&mut ctrl, Currency::Usd).await;

    let state = ctrl.state();
    assert_eq!(state.latest_generation(), 2);
    assert_eq!(state.shown_request().unwrap().symbol, "ETH");
    assert_eq!(state.result().unwrap().predictions[0].price, 2000.0);
    assert_eq!(state.phase(), &FetchPhase::Success);
}

#[tokio::test(flavor = "multi_thread")]
async fn health_probe_sets_server_status() {
    let server = MockServer::start().await;
    mount_coins(&server, &["BTC"]).await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "healthy", "model_loaded": true })),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(btc_predictions()))
        .mount(&server)
        .await;

    let mut ctrl = controller(&server, "BTC", 30);
    ctrl.mount();
    for _ in 0..300 {
        ctrl.poll(Currency::Usd);
        if *ctrl.server_status() != ServerStatus::Unknown {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(
        ctrl.server_status(),
        &ServerStatus::Online { model_loaded: true }
    );
}
