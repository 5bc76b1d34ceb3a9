use std::fmt;
use std::num::NonZeroU64;

use serenity::all::{ChannelId, GuildId};

use crate::server::error::{config::ConfigError, voice::VoiceError};

/// Port the status server binds to when `PORT` is not set.
const DEFAULT_PORT: u16 = 3000;

/// Number of numbered bot slots read in multi-bot mode (`BOT_TOKEN_1`, `BOT_TOKEN_2`).
const MULTI_BOT_SLOTS: usize = 2;

/// How the process was configured, which decides command literals and the
/// format of the aggregate status page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    /// One bot configured through `BOT_TOKEN`, `GUILD_ID` and `CHANNEL_ID`.
    Single,
    /// Numbered bots configured through `BOT_TOKEN_n` and `CHANNEL_ID_n`.
    Multi,
}

/// Credentials and voice target for one bot account.
///
/// Immutable after load. Guild and channel ids are kept as configured; they are
/// only parsed when a join is attempted so a malformed id surfaces as a lookup
/// failure for that bot rather than a startup error.
#[derive(Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub token: String,
    pub guild_id: String,
    pub channel_id: String,
    pub name: String,
}

impl BotConfig {
    /// Parses the configured guild and channel ids into Discord snowflakes.
    ///
    /// # Returns
    /// - `Ok((GuildId, ChannelId))` - Both ids are valid non-zero integers
    /// - `Err(VoiceError::InvalidId)` - Either id is empty, non-numeric or zero
    pub fn target(&self) -> Result<(GuildId, ChannelId), VoiceError> {
        let guild_id = parse_snowflake("guild", &self.guild_id)?;
        let channel_id = parse_snowflake("channel", &self.channel_id)?;

        Ok((GuildId::from(guild_id), ChannelId::from(channel_id)))
    }
}

// Tokens must never reach the logs.
impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"<redacted>")
            .field("guild_id", &self.guild_id)
            .field("channel_id", &self.channel_id)
            .field("name", &self.name)
            .finish()
    }
}

fn parse_snowflake(kind: &'static str, value: &str) -> Result<NonZeroU64, VoiceError> {
    value
        .trim()
        .parse::<NonZeroU64>()
        .map_err(|_| VoiceError::InvalidId {
            kind,
            value: value.to_string(),
        })
}

pub struct Config {
    pub mode: DeploymentMode,
    pub port: u16,
    /// Bots with a token, in configuration order.
    pub bots: Vec<BotConfig>,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration using the provided variable lookup.
    ///
    /// Multi-bot mode is selected when any numbered token variable is present;
    /// otherwise the single-bot variables are read. Entries whose token is absent
    /// or blank are dropped without error.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of an environment variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - Loaded configuration, possibly with zero bots
    /// - `Err(ConfigError::InvalidEnvVar)` - `PORT` is set but is not a valid port
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) if !value.trim().is_empty() => {
                value
                    .trim()
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidEnvVar {
                        name: "PORT".to_string(),
                        value: value.clone(),
                    })?
            }
            _ => DEFAULT_PORT,
        };

        let multi = (1..=MULTI_BOT_SLOTS).any(|slot| lookup(&format!("BOT_TOKEN_{slot}")).is_some());

        let (mode, candidates) = if multi {
            let shared_guild = lookup("GUILD_ID").unwrap_or_default();
            let candidates = (1..=MULTI_BOT_SLOTS)
                .map(|slot| BotConfig {
                    token: lookup(&format!("BOT_TOKEN_{slot}")).unwrap_or_default(),
                    guild_id: lookup(&format!("GUILD_ID_{slot}"))
                        .unwrap_or_else(|| shared_guild.clone()),
                    channel_id: lookup(&format!("CHANNEL_ID_{slot}")).unwrap_or_default(),
                    name: format!("Bot {slot}"),
                })
                .collect::<Vec<_>>();

            (DeploymentMode::Multi, candidates)
        } else {
            let candidate = BotConfig {
                token: lookup("BOT_TOKEN").unwrap_or_default(),
                guild_id: lookup("GUILD_ID").unwrap_or_default(),
                channel_id: lookup("CHANNEL_ID").unwrap_or_default(),
                name: "Bot".to_string(),
            };

            (DeploymentMode::Single, vec![candidate])
        };

        let bots = candidates
            .into_iter()
            .filter(|bot| !bot.token.trim().is_empty())
            .collect();

        Ok(Self { mode, port, bots })
    }
}
