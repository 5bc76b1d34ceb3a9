use std::sync::Arc;

use axum::http::{header::CONTENT_TYPE, StatusCode};
use tokio::sync::RwLock;

use super::{app, get, registry};
use crate::{
    model::{
        api::ErrorDto,
        status::{BotDetailDto, StatusDto},
    },
    server::{
        config::DeploymentMode,
        model::{
            bot::{BotStatus, ConnectionState, ControllerState},
            event::BotEvent,
        },
        service::{
            registry::{BotHandle, BotRegistry},
            test::{bot_config, controller, fake_voice::FakeVoice},
            voice::VoiceGateway,
        },
    },
};

fn ready_status(user: &str) -> BotStatus {
    BotStatus {
        state: ControllerState::VoiceConnected,
        ready: true,
        user: Some(user.to_string()),
        ..BotStatus::default()
    }
}

/// Tests the JSON summary returned in multi-bot mode.
///
/// Expected: 200 with status "online" and one entry per bot in configuration order
#[tokio::test]
async fn lists_all_bots_as_json_in_multi_mode() {
    let registry = registry(vec![ready_status("One#0001"), BotStatus::default()]);

    let response = get(app(registry, DeploymentMode::Multi), "/").await;

    assert_eq!(response.status, StatusCode::OK);
    let body: StatusDto = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(body.status, "online");
    assert_eq!(body.bots.len(), 2);

    assert_eq!(body.bots[0].index, 0);
    assert_eq!(body.bots[0].name, "Bot 1");
    assert!(body.bots[0].ready);
    assert_eq!(body.bots[0].user.as_deref(), Some("One#0001"));
    assert_eq!(body.bots[0].guild_id, "111");
    assert_eq!(body.bots[0].channel_id, "222");

    assert_eq!(body.bots[1].index, 1);
    assert!(!body.bots[1].ready);
    assert_eq!(body.bots[1].user, None);
}

/// Tests the plain-text banner returned in single-bot mode.
///
/// Expected: 200 text/plain starting with the running banner, one line for the bot
#[tokio::test]
async fn reports_plain_text_in_single_mode() {
    let registry = registry(vec![ready_status("Keeper#0001")]);

    let response = get(app(registry, DeploymentMode::Single), "/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.headers[CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));

    let text = String::from_utf8(response.body.to_vec()).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("✅ Discord bot is running!"));
    assert_eq!(
        lines.next(),
        Some("Bot 1: Keeper#0001 (ready, guild 111, channel 222)")
    );
    assert_eq!(lines.next(), None);
}

/// Tests the banner when no bot is configured.
///
/// Expected: 200 with only the banner line
#[tokio::test]
async fn reports_banner_without_bots() {
    let response = get(app(BotRegistry::default(), DeploymentMode::Single), "/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(&response.body[..], "✅ Discord bot is running!".as_bytes());
}

/// Tests the detail endpoint for a bot holding a live voice connection.
///
/// Expected: 200 with controller state, live connection flag and state string
#[tokio::test]
async fn returns_bot_detail_with_live_connection() {
    let voice: Arc<dyn VoiceGateway> =
        Arc::new(FakeVoice::new().with_connection(ConnectionState::Ready));
    let handle = BotHandle::new(
        0,
        bot_config(),
        Arc::new(RwLock::new(ready_status("Keeper#0001"))),
        Some(voice),
    );

    let response = get(
        app(BotRegistry::new(vec![handle]), DeploymentMode::Multi),
        "/bot/0",
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let body: BotDetailDto = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(body.summary.name, "Bot");
    assert_eq!(body.summary.user.as_deref(), Some("Keeper#0001"));
    assert_eq!(body.state, "voice_connected");
    assert!(body.voice_connected);
    assert_eq!(body.voice_state.as_deref(), Some("ready"));
}

/// Tests the detail endpoint for a bot whose client could not be built.
///
/// Expected: 200 with no live connection reported
#[tokio::test]
async fn returns_bot_detail_without_voice_client() {
    let handle = BotHandle::new(
        0,
        bot_config(),
        Arc::new(RwLock::new(BotStatus::default())),
        None,
    );

    let response = get(
        app(BotRegistry::new(vec![handle]), DeploymentMode::Single),
        "/bot/0",
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let body: BotDetailDto = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(body.state, "idle");
    assert!(!body.summary.ready);
    assert!(!body.voice_connected);
    assert_eq!(body.voice_state, None);
    assert_eq!(body.last_joined_at, None);
}

/// Tests requesting the bot one past the end of the configuration list.
///
/// Expected: 404 with `{"error":"Bot not found"}`
#[tokio::test]
async fn returns_404_one_past_the_end() {
    let registry = registry(vec![BotStatus::default(), BotStatus::default()]);

    let response = get(app(registry, DeploymentMode::Multi), "/bot/2").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let body: ErrorDto = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(body.error, "Bot not found");
    assert_eq!(&response.body[..], br#"{"error":"Bot not found"}"#);
}

/// Tests requesting a bot with an index that is not a number.
///
/// Expected: 404 with the same error body as an out-of-range index
#[tokio::test]
async fn returns_404_for_non_numeric_index() {
    for uri in ["/bot/first", "/bot/-1"] {
        let registry = registry(vec![BotStatus::default()]);
        let response = get(app(registry, DeploymentMode::Multi), uri).await;

        assert_eq!(response.status, StatusCode::NOT_FOUND, "{}", uri);
        let body: ErrorDto = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(body.error, "Bot not found");
    }
}

/// Tests that no other routes are served.
///
/// Expected: 404
#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = get(
        app(BotRegistry::default(), DeploymentMode::Multi),
        "/health",
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

/// Tests the path from session-ready to the status endpoint.
///
/// A controller with a working voice client receives session-ready; the status
/// endpoint then reads the snapshot the controller published.
///
/// Expected: controller reaches voice_connected, `GET /` reports ready and identity
#[tokio::test]
async fn session_ready_is_reported_by_status_endpoint() {
    let voice = Arc::new(FakeVoice::new());
    let mut test = controller(voice.clone());

    assert!(
        test.controller
            .handle(BotEvent::SessionReady {
                identity: "Keeper#0001".to_string(),
            })
            .await
    );
    assert_eq!(test.controller.state(), ControllerState::VoiceConnected);

    let voice: Arc<dyn VoiceGateway> = voice;
    let registry = BotRegistry::new(vec![BotHandle::new(
        0,
        bot_config(),
        test.status.clone(),
        Some(voice),
    )]);
    let app = app(registry, DeploymentMode::Multi);

    let response = get(app.clone(), "/").await;
    let body: StatusDto = serde_json::from_slice(&response.body).unwrap();
    assert!(body.bots[0].ready);
    assert_eq!(body.bots[0].user.as_deref(), Some("Keeper#0001"));

    let response = get(app, "/bot/0").await;
    let body: BotDetailDto = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(body.state, "voice_connected");
    assert!(body.voice_connected);
    assert!(body.last_joined_at.is_some());
}
