use serenity::all::{ChannelId, ChannelType, GuildId};
use thiserror::Error;

/// Failures raised while resolving or establishing a voice connection.
///
/// None of these are propagated past the connection controller. Lookup
/// failures (`InvalidId`, `GuildNotFound`, `ChannelNotFound`,
/// `NotVoiceChannel`) abort the join attempt, while `Connection` failures
/// schedule a timed rejoin.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VoiceError {
    /// A configured guild or channel id is not a valid non-zero snowflake.
    #[error("Invalid {kind} id '{value}'")]
    InvalidId {
        /// Which id failed to parse (`guild` or `channel`)
        kind: &'static str,
        /// The configured value
        value: String,
    },

    #[error("❌ Guild {0} not found!")]
    GuildNotFound(GuildId),

    #[error("❌ Voice channel {0} not found!")]
    ChannelNotFound(ChannelId),

    /// The target channel exists but is not a voice channel.
    #[error("❌ Channel {channel_id} is not a voice channel! (type {kind:?})")]
    NotVoiceChannel {
        channel_id: ChannelId,
        kind: ChannelType,
    },

    /// The voice gateway handshake failed or the connection was lost.
    #[error("❌ Connection error: {0}")]
    Connection(String),
}

impl VoiceError {
    /// Whether this failure should be retried after the rejoin delay.
    ///
    /// Only connection failures are retried; a lookup failure is a configuration
    /// problem that another attempt would not fix.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}
