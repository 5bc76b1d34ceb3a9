//! Registry of configured bots.
//!
//! Built once at startup and shared (read-only) with the status server. Each entry
//! pairs a bot's configuration with the status snapshot its controller publishes
//! and, when the client could be built, the voice client used to inspect the live
//! connection.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::server::{
    config::BotConfig,
    model::bot::{BotStatus, ConnectionState},
    service::voice::VoiceGateway,
};

pub struct BotHandle {
    /// Position in the configuration list, used by `GET /bot/{index}`.
    pub index: usize,
    pub config: BotConfig,
    status: Arc<RwLock<BotStatus>>,
    voice: Option<Arc<dyn VoiceGateway>>,
}

impl BotHandle {
    /// # Arguments
    /// - `index` - Position of the bot in the configuration list
    /// - `config` - The bot's configuration
    /// - `status` - Snapshot updated by the bot's controller
    /// - `voice` - Voice client, or `None` if the bot's client failed to build
    pub fn new(
        index: usize,
        config: BotConfig,
        status: Arc<RwLock<BotStatus>>,
        voice: Option<Arc<dyn VoiceGateway>>,
    ) -> Self {
        Self {
            index,
            config,
            status,
            voice,
        }
    }

    /// Copy of the bot's current status.
    pub async fn status(&self) -> BotStatus {
        self.status.read().await.clone()
    }

    /// State of the live voice connection in the bot's target guild, if one exists.
    pub async fn live_connection(&self) -> Option<ConnectionState> {
        let voice = self.voice.as_ref()?;
        let (guild_id, _) = self.config.target().ok()?;

        voice.connection_state(guild_id).await
    }
}

#[derive(Default)]
pub struct BotRegistry {
    bots: Vec<BotHandle>,
}

impl BotRegistry {
    pub fn new(bots: Vec<BotHandle>) -> Self {
        Self { bots }
    }

    pub fn get(&self, index: usize) -> Option<&BotHandle> {
        self.bots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BotHandle> {
        self.bots.iter()
    }

    pub fn len(&self) -> usize {
        self.bots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bots.is_empty()
    }
}
