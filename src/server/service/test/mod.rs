use std::sync::Arc;

use tokio::sync::{mpsc, RwLock};

use crate::server::{
    config::BotConfig,
    model::{bot::BotStatus, event::BotEvent},
    service::connection::ConnectionController,
};



use fake_voice::FakeVoice;

pub fn bot_config() -> BotConfig {
    BotConfig {
        token: "token".to_string(),
        guild_id: "111".to_string(),
        channel_id: "222".to_string(),
        name: "Bot".to_string(),
    }
}

/// Controller wired to `voice`, plus the controller's inbox and status snapshot.
pub struct TestController {
    pub controller: ConnectionController,
    pub events: mpsc::Sender<BotEvent>,
    pub inbox: mpsc::Receiver<BotEvent>,
    pub status: Arc<RwLock<BotStatus>>,
}

pub fn controller_with(config: BotConfig, voice: Arc<FakeVoice>) -> TestController {
    let (events, inbox) = mpsc::channel(16);
    let status = Arc::new(RwLock::new(BotStatus::default()));
    let controller = ConnectionController::new(config, voice, status.clone(), events.clone());

    TestController {
        controller,
        events,
        inbox,
        status,
    }
}

pub fn controller(voice: Arc<FakeVoice>) -> TestController {
    controller_with(bot_config(), voice)
}
