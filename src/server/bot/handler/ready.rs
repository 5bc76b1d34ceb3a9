//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The event is
//! forwarded to the connection controller as session-ready, which triggers the
//! first voice join.

use serenity::all::{Context, Ready};
use tokio::sync::mpsc;

use crate::server::model::event::BotEvent;

/// Handles the ready event when the bot connects to Discord.
///
/// Fires once per new gateway session (not on resumes).
///
/// # Arguments
/// - `name` - Configured bot name for logging
/// - `events` - Inbox of the bot's connection controller
/// - `_ctx` - Discord context (unused)
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    name: &str,
    events: &mpsc::Sender<BotEvent>,
    _ctx: Context,
    ready: Ready,
) {
    tracing::info!("{} is connected to Discord as {}", name, ready.user.name);

    let identity = ready.user.tag();

    if events
        .send(BotEvent::SessionReady { identity })
        .await
        .is_err()
    {
        tracing::warn!("{}: connection controller is not running", name);
    }
}
