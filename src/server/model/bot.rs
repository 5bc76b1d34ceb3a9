use std::fmt;

use chrono::{DateTime, Utc};

/// Lifecycle state of a bot's connection controller.
///
/// `Idle -> LoggingIn -> Ready -> VoiceJoining -> VoiceConnected`, falling to
/// `Error` (failed connection) or `VoiceDisconnected` (removed from the channel)
/// before the next `VoiceJoining` attempt. A failed login returns to `Idle` for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    LoggingIn,
    Ready,
    VoiceJoining,
    VoiceConnected,
    VoiceDisconnected,
    Error,
}

impl ControllerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::LoggingIn => "logging_in",
            Self::Ready => "ready",
            Self::VoiceJoining => "voice_joining",
            Self::VoiceConnected => "voice_connected",
            Self::VoiceDisconnected => "voice_disconnected",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ControllerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observed state of the voice connection object for a guild.
///
/// Derived from the voice client at query time; the controller never stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Ready,
    Signalling,
    Destroyed,
}

impl ConnectionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Ready => "ready",
            Self::Signalling => "signalling",
            Self::Destroyed => "destroyed",
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self mute/deafen flags applied on every voice join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioPolicy {
    pub self_deaf: bool,
    pub self_mute: bool,
}

/// The bot only needs to be present in the channel: it never listens and
/// stays unmuted so it shows as an ordinary member.
pub const AUDIO_POLICY: AudioPolicy = AudioPolicy {
    self_deaf: true,
    self_mute: false,
};

/// Snapshot of a bot's runtime status, published by its controller.
#[derive(Debug, Clone, PartialEq)]
pub struct BotStatus {
    pub state: ControllerState,
    /// Set once the session reports ready; cleared again on login failure.
    pub ready: bool,
    /// Logged-in identity, known after session-ready.
    pub user: Option<String>,
    /// Set while the bot has been told to leave and has not been told to rejoin.
    pub left_on_request: bool,
    pub last_joined_at: Option<DateTime<Utc>>,
}

impl Default for BotStatus {
    fn default() -> Self {
        Self {
            state: ControllerState::Idle,
            ready: false,
            user: None,
            left_on_request: false,
            last_joined_at: None,
        }
    }
}
