//! Chat command recognition.
//!
//! Only two literal commands exist. The whole message is compared after lower-casing,
//! so `$JOIN` matches but `$join now` does not.

use crate::server::{config::DeploymentMode, model::command::Command};

/// Literal command strings for a deployment mode.
pub struct CommandSet {
    pub join: &'static str,
    pub leave: &'static str,
}

impl CommandSet {
    pub fn for_mode(mode: DeploymentMode) -> Self {
        match mode {
            DeploymentMode::Single => Self {
                join: "$join",
                leave: "$leave",
            },
            DeploymentMode::Multi => Self {
                join: "!join",
                leave: "!leave",
            },
        }
    }
}

/// Parses a message into a command.
///
/// # Arguments
/// - `mode` - Deployment mode selecting the command literals
/// - `author_is_bot` - Whether the message author is a bot account
/// - `content` - Full message text
///
/// # Returns
/// - `Some(Command)` - The message is exactly one of the mode's commands
/// - `None` - Bot author or any other content
pub fn parse_command(mode: DeploymentMode, author_is_bot: bool, content: &str) -> Option<Command> {
    if author_is_bot {
        return None;
    }

    let commands = CommandSet::for_mode(mode);
    let content = content.to_lowercase();

    if content == commands.join {
        Some(Command::Join)
    } else if content == commands.leave {
        Some(Command::Leave)
    } else {
        None
    }
}
