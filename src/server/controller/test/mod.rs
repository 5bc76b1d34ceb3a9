use std::sync::Arc;

use axum::{
    body::{self, Body, Bytes},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use tokio::sync::RwLock;
use tower::ServiceExt;

use crate::server::{
    config::DeploymentMode,
    model::bot::BotStatus,
    router::router,
    service::{
        registry::{BotHandle, BotRegistry},
        test::{bot_config, fake_voice::FakeVoice},
        voice::VoiceGateway,
    },
    state::AppState,
};

mod status;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

pub fn app(registry: BotRegistry, mode: DeploymentMode) -> Router {
    router().with_state(AppState::new(Arc::new(registry), mode))
}

/// Registry holding one bot per status, each with its own fake voice client.
pub fn registry(statuses: Vec<BotStatus>) -> BotRegistry {
    let bots = statuses
        .into_iter()
        .enumerate()
        .map(|(index, status)| {
            let mut config = bot_config();
            config.name = format!("Bot {}", index + 1);

            let voice: Arc<dyn VoiceGateway> = Arc::new(FakeVoice::new());
            BotHandle::new(index, config, Arc::new(RwLock::new(status)), Some(voice))
        })
        .collect();

    BotRegistry::new(bots)
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        body,
    }
}
