//! Status reporting for the HTTP surface.

use crate::{
    model::status::{BotDetailDto, BotSummaryDto},
    server::{
        model::bot::{BotStatus, ConnectionState, ControllerState},
        service::registry::{BotHandle, BotRegistry},
    },
};

pub struct StatusService<'a> {
    registry: &'a BotRegistry,
}

impl<'a> StatusService<'a> {
    pub fn new(registry: &'a BotRegistry) -> Self {
        Self { registry }
    }

    /// Summaries of every configured bot, in configuration order.
    pub async fn get_all(&self) -> Vec<BotSummaryDto> {
        let mut summaries = Vec::with_capacity(self.registry.len());

        for handle in self.registry.iter() {
            let status = handle.status().await;
            summaries.push(summary(handle, &status));
        }

        summaries
    }

    /// Detailed status of the bot at `index`, including its live voice connection.
    ///
    /// # Returns
    /// - `Some(BotDetailDto)` - The bot exists
    /// - `None` - `index` is out of range
    pub async fn get_by_index(&self, index: usize) -> Option<BotDetailDto> {
        let handle = self.registry.get(index)?;
        let status = handle.status().await;
        let live = handle.live_connection().await;

        Some(BotDetailDto {
            summary: summary(handle, &status),
            state: status.state.to_string(),
            voice_connected: live.is_some(),
            voice_state: reported_voice_state(&status, live).map(|state| state.to_string()),
            last_joined_at: status.last_joined_at,
        })
    }
}

fn summary(handle: &BotHandle, status: &BotStatus) -> BotSummaryDto {
    BotSummaryDto {
        index: handle.index,
        name: handle.config.name.clone(),
        ready: status.ready,
        user: status.user.clone(),
        guild_id: handle.config.guild_id.clone(),
        channel_id: handle.config.channel_id.clone(),
    }
}

/// Voice state to report for a bot.
///
/// The live connection wins when there is one. Without it, a join in flight is
/// reported as `connecting` and a connection torn down on request as `destroyed`.
fn reported_voice_state(
    status: &BotStatus,
    live: Option<ConnectionState>,
) -> Option<ConnectionState> {
    if live.is_some() {
        return live;
    }

    if status.state == ControllerState::VoiceJoining {
        Some(ConnectionState::Connecting)
    } else if status.left_on_request {
        Some(ConnectionState::Destroyed)
    } else {
        None
    }
}
