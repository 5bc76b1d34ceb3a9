use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of a single configured bot as reported by the status endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BotSummaryDto {
    /// Position of the bot in the configuration list.
    pub index: usize,
    pub name: String,
    /// Whether the bot's session has reported ready.
    pub ready: bool,
    /// Logged-in identity (`name#discriminator` or username), once known.
    pub user: Option<String>,
    pub guild_id: String,
    pub channel_id: String,
}

/// Aggregate status returned by `GET /` in multi-bot mode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusDto {
    pub status: String,
    pub bots: Vec<BotSummaryDto>,
}

/// Detailed status of one bot returned by `GET /bot/{index}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BotDetailDto {
    #[serde(flatten)]
    pub summary: BotSummaryDto,
    /// Connection controller state, e.g. `voice_connected`.
    pub state: String,
    /// Whether a voice connection object currently exists for the target guild.
    pub voice_connected: bool,
    /// State of the voice connection (`disconnected`, `connecting`, `ready`,
    /// `signalling` or `destroyed`), if any.
    pub voice_state: Option<String>,
    pub last_joined_at: Option<DateTime<Utc>>,
}
