use serenity::all::{Context, EventHandler, Message, Ready, VoiceState};
use serenity::async_trait;
use tokio::sync::mpsc;

use crate::server::{config::DeploymentMode, model::event::BotEvent};

pub mod message;
pub mod ready;
pub mod voice_state;

/// Discord bot event handler
///
/// One handler is registered per bot client. It translates gateway events into
/// [`BotEvent`]s for that bot's connection controller; it never touches voice
/// state itself.
pub struct Handler {
    pub name: String,
    pub mode: DeploymentMode,
    pub events: mpsc::Sender<BotEvent>,
}

impl Handler {
    pub fn new(name: String, mode: DeploymentMode, events: mpsc::Sender<BotEvent>) -> Self {
        Self { name, mode, events }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.name, &self.events, ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.name, self.mode, &self.events, ctx, message).await;
    }

    /// Called when any member's voice state changes, including the bot's own
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice_state::handle_voice_state_update(&self.name, &self.events, ctx, old, new).await;
    }
}
