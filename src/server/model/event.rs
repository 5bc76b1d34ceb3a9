use serenity::all::{ChannelId, GuildId};
use tokio::sync::oneshot;

use crate::server::model::command::Command;

/// Inbound events for a single bot's connection controller.
///
/// Every event source for a bot (gateway handler, retry timers, client task,
/// shutdown) posts into the same channel so the controller processes them one at
/// a time in arrival order.
#[derive(Debug)]
pub enum BotEvent {
    /// Session authenticated and initial state synced.
    SessionReady {
        /// Logged-in identity of the bot user.
        identity: String,
    },

    /// A chat command addressed to this bot. The controller sends the reply text
    /// back through `reply`.
    Command {
        command: Command,
        reply: oneshot::Sender<String>,
    },

    /// The bot's own voice state changed. `channel_id` is `None` when the bot is
    /// no longer in any voice channel.
    VoiceStateUpdate {
        guild_id: Option<GuildId>,
        channel_id: Option<ChannelId>,
    },

    /// A scheduled rejoin fired. Ignored when `generation` is stale.
    Retry { generation: u64 },

    /// The gateway session could not be established.
    LoginFailed { reason: String },

    Shutdown,
}
