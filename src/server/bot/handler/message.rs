use serenity::all::{Context, Message};
use tokio::sync::{mpsc, oneshot};

use crate::server::{
    config::DeploymentMode,
    model::{command::Command, event::BotEvent},
    service::command::parse_command,
};

/// Handle message creation in a channel
///
/// Recognised commands are forwarded to the connection controller, which answers
/// with the reply text; the reply is then posted to the message's channel.
pub async fn handle_message(
    name: &str,
    mode: DeploymentMode,
    events: &mpsc::Sender<BotEvent>,
    ctx: Context,
    message: Message,
) {
    let Some(command) = command_from_message(mode, &message) else {
        return;
    };

    tracing::debug!(
        "{}: {:?} command from {}",
        name,
        command,
        message.author.name
    );

    let (reply_tx, reply_rx) = oneshot::channel();

    if events
        .send(BotEvent::Command {
            command,
            reply: reply_tx,
        })
        .await
        .is_err()
    {
        tracing::warn!("{}: connection controller is not running", name);
        return;
    }

    let Ok(reply) = reply_rx.await else {
        tracing::warn!("{}: no reply for {:?} command", name, command);
        return;
    };

    if let Err(e) = message.reply(&ctx, reply).await {
        tracing::error!("{}: failed to reply to command: {:?}", name, e);
    }
}

/// Extracts a command from a guild message.
///
/// Direct messages and messages from bot accounts never carry a command.
pub fn command_from_message(mode: DeploymentMode, message: &Message) -> Option<Command> {
    if message.guild_id.is_none() {
        return None;
    }

    parse_command(mode, message.author.bot, &message.content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_message;

    #[test]
    fn extracts_command_from_guild_message() {
        let message = create_test_message("$join", false, Some(111));

        assert_eq!(
            command_from_message(DeploymentMode::Single, &message),
            Some(Command::Join)
        );
    }

    #[test]
    fn extracts_multi_mode_leave() {
        let message = create_test_message("!LEAVE", false, Some(111));

        assert_eq!(
            command_from_message(DeploymentMode::Multi, &message),
            Some(Command::Leave)
        );
    }

    #[test]
    fn ignores_messages_from_bots() {
        let message = create_test_message("$leave", true, Some(111));

        assert_eq!(command_from_message(DeploymentMode::Single, &message), None);
    }

    #[test]
    fn ignores_direct_messages() {
        let message = create_test_message("$join", false, None);

        assert_eq!(command_from_message(DeploymentMode::Single, &message), None);
    }

    #[test]
    fn ignores_ordinary_chat() {
        let message = create_test_message("hello there", false, Some(111));

        assert_eq!(command_from_message(DeploymentMode::Single, &message), None);
    }
}
