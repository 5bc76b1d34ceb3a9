//! Songbird-backed implementation of the voice gateway.
//!
//! Songbird runs in gateway-only mode: it negotiates the voice session over the
//! bot's shard so the bot occupies the channel, but no audio driver is started.

use std::sync::Arc;

use serenity::all::{Cache, ChannelId, ChannelType, GuildChannel, GuildId, Http};
use serenity::async_trait;
use songbird::Songbird;

use crate::server::{
    error::voice::VoiceError,
    model::bot::{AudioPolicy, ConnectionState},
    service::voice::VoiceGateway,
};

pub struct SongbirdVoice {
    cache: Arc<Cache>,
    http: Arc<Http>,
    songbird: Arc<Songbird>,
}

impl SongbirdVoice {
    /// # Arguments
    /// - `cache` - The bot client's cache, consulted before HTTP for lookups
    /// - `http` - The bot client's HTTP client
    /// - `songbird` - The voice manager registered on the same client
    pub fn new(cache: Arc<Cache>, http: Arc<Http>, songbird: Arc<Songbird>) -> Self {
        Self {
            cache,
            http,
            songbird,
        }
    }
}

#[async_trait]
impl VoiceGateway for SongbirdVoice {
    async fn resolve_channel(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> Result<String, VoiceError> {
        let cache_http = (&self.cache, self.http.as_ref());

        if let Err(e) = guild_id.to_partial_guild(cache_http).await {
            tracing::debug!("Guild lookup for {} failed: {:?}", guild_id, e);
            return Err(VoiceError::GuildNotFound(guild_id));
        }

        let channel = match channel_id.to_channel(cache_http).await {
            Ok(channel) => channel.guild(),
            Err(e) => {
                tracing::debug!("Channel lookup for {} failed: {:?}", channel_id, e);
                None
            }
        }
        .ok_or(VoiceError::ChannelNotFound(channel_id))?;

        ensure_voice_channel(guild_id, &channel)?;

        Ok(channel.name)
    }

    async fn connect(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
        policy: AudioPolicy,
    ) -> Result<(), VoiceError> {
        let (_, call) = self
            .songbird
            .join_gateway(guild_id, channel_id)
            .await
            .map_err(|e| VoiceError::Connection(e.to_string()))?;

        let mut call = call.lock().await;

        call.deafen(policy.self_deaf)
            .await
            .map_err(|e| VoiceError::Connection(e.to_string()))?;
        call.mute(policy.self_mute)
            .await
            .map_err(|e| VoiceError::Connection(e.to_string()))?;

        Ok(())
    }

    async fn disconnect(&self, guild_id: GuildId) -> Result<(), VoiceError> {
        self.songbird
            .remove(guild_id)
            .await
            .map_err(|e| VoiceError::Connection(e.to_string()))
    }

    async fn connection_state(&self, guild_id: GuildId) -> Option<ConnectionState> {
        let call = self.songbird.get(guild_id)?;
        let call = call.lock().await;

        let state = if call.current_connection().is_some() {
            ConnectionState::Ready
        } else if call.current_channel().is_some() {
            // Voice state sent, still waiting on the voice server handshake.
            ConnectionState::Signalling
        } else {
            ConnectionState::Disconnected
        };

        Some(state)
    }
}

/// Checks that a channel belongs to the guild and is a voice channel.
///
/// Stage channels are rejected along with text channels.
///
/// # Returns
/// - `Ok(())` - The channel can be joined
/// - `Err(VoiceError::ChannelNotFound)` - The channel belongs to another guild
/// - `Err(VoiceError::NotVoiceChannel)` - The channel is not a voice channel
pub fn ensure_voice_channel(guild_id: GuildId, channel: &GuildChannel) -> Result<(), VoiceError> {
    if channel.guild_id != guild_id {
        return Err(VoiceError::ChannelNotFound(channel.id));
    }

    if channel.kind != ChannelType::Voice {
        return Err(VoiceError::NotVoiceChannel {
            channel_id: channel.id,
            kind: channel.kind,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_channel;

    const VOICE: u8 = 2;
    const TEXT: u8 = 0;
    const STAGE: u8 = 13;

    #[test]
    fn accepts_voice_channel_in_guild() {
        let channel = create_test_channel(222, 111, "General", VOICE);

        assert_eq!(ensure_voice_channel(GuildId::new(111), &channel), Ok(()));
    }

    #[test]
    fn rejects_text_channel() {
        let channel = create_test_channel(222, 111, "chat", TEXT);

        assert_eq!(
            ensure_voice_channel(GuildId::new(111), &channel),
            Err(VoiceError::NotVoiceChannel {
                channel_id: ChannelId::new(222),
                kind: ChannelType::Text,
            })
        );
    }

    #[test]
    fn rejects_stage_channel() {
        let channel = create_test_channel(222, 111, "Stage", STAGE);

        assert!(matches!(
            ensure_voice_channel(GuildId::new(111), &channel),
            Err(VoiceError::NotVoiceChannel { .. })
        ));
    }

    /// Tests that a voice channel from a different guild counts as not found.
    #[test]
    fn rejects_channel_from_other_guild() {
        let channel = create_test_channel(222, 999, "General", VOICE);

        assert_eq!(
            ensure_voice_channel(GuildId::new(111), &channel),
            Err(VoiceError::ChannelNotFound(ChannelId::new(222)))
        );
    }
}
