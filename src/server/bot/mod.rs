//! Discord bot integration for keeping bots parked in voice channels.
//!
//! Each configured bot gets its own serenity client and songbird voice manager,
//! running in a separate tokio task so bots never block each other or the HTTP
//! server. Gateway events are forwarded to the bot's connection controller, which
//! owns all voice decisions.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel data used to resolve the target channel
//! - `GUILD_VOICE_STATES` - The bot's own voice state changes and voice sessions
//! - `GUILD_MESSAGES` - Messages carrying the join/leave commands
//! - `MESSAGE_CONTENT` - Reading the text of those messages (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
pub mod voice;
