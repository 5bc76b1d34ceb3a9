use serenity::all::{Context, UserId, VoiceState};
use tokio::sync::mpsc;

use crate::server::model::event::BotEvent;

/// Handle a voice state change for any member of a guild the bot is in.
///
/// Only the bot's own updates are forwarded to the connection controller.
pub async fn handle_voice_state_update(
    name: &str,
    events: &mpsc::Sender<BotEvent>,
    ctx: Context,
    _old: Option<VoiceState>,
    new: VoiceState,
) {
    let own_id = ctx.cache.current_user().id;

    let Some(event) = own_voice_update(own_id, &new) else {
        return;
    };

    if events.send(event).await.is_err() {
        tracing::warn!("{}: connection controller is not running", name);
    }
}

/// Converts a voice state into a controller event if it belongs to the bot itself.
pub fn own_voice_update(own_id: UserId, new: &VoiceState) -> Option<BotEvent> {
    if new.user_id != own_id {
        return None;
    }

    Some(BotEvent::VoiceStateUpdate {
        guild_id: new.guild_id,
        channel_id: new.channel_id,
    })
}
