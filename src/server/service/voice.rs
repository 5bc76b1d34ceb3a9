//! Abstraction over the voice client used by the connection controller.
//!
//! The controller only needs four operations from the chat platform: resolve the
//! target channel, connect to it, tear a connection down, and report the state of
//! an existing connection. Keeping them behind a trait lets the controller's retry
//! logic run against an in-memory implementation in tests.

use serenity::all::{ChannelId, GuildId};
use serenity::async_trait;

use crate::server::{
    error::voice::VoiceError,
    model::bot::{AudioPolicy, ConnectionState},
};

#[async_trait]
pub trait VoiceGateway: Send + Sync {
    /// Looks up the guild and channel and checks the channel is a voice channel.
    ///
    /// # Returns
    /// - `Ok(String)` - Name of the voice channel
    /// - `Err(VoiceError)` - Guild or channel missing, or channel is not voice
    async fn resolve_channel(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> Result<String, VoiceError>;

    /// Establishes a voice connection to the channel with the given audio flags.
    ///
    /// Joining while already connected in the guild moves the existing connection.
    async fn connect(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
        policy: AudioPolicy,
    ) -> Result<(), VoiceError>;

    /// Destroys the voice connection for the guild.
    async fn disconnect(&self, guild_id: GuildId) -> Result<(), VoiceError>;

    /// State of the voice connection for the guild, or `None` if no connection
    /// object exists.
    async fn connection_state(&self, guild_id: GuildId) -> Option<ConnectionState>;
}
