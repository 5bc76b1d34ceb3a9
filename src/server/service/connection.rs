//! Per-bot connection controller.
//!
//! Each configured bot gets one `ConnectionController` running in its own task. The
//! controller owns the bot's voice state and consumes a single stream of
//! [`BotEvent`]s, so handlers for one bot never interleave. Its job is to keep the
//! bot sitting in the configured voice channel:
//!
//! - On session-ready it joins the channel.
//! - When a join fails with a connection error, or the bot is removed from the
//!   channel, it schedules a rejoin after [`RETRY_DELAY`].
//! - Manual `join`/`leave` commands join immediately or tear the connection down.
//!
//! Rejoins are coalesced (at most one pending per bot) and tagged with a generation
//! number. A manual join or leave bumps the generation so a rejoin scheduled
//! before it is discarded when it fires. A leave also sets a flag that suppresses
//! rejoins until the next manual join.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serenity::all::{ChannelId, GuildId};
use tokio::sync::{mpsc, oneshot, RwLock};

use crate::server::{
    config::BotConfig,
    model::{
        bot::{BotStatus, ControllerState, AUDIO_POLICY},
        command::{reply, Command},
        event::BotEvent,
    },
    service::voice::VoiceGateway,
};

/// Fixed delay before a rejoin attempt.
pub const RETRY_DELAY: Duration = Duration::from_secs(5);

pub struct ConnectionController {
    config: BotConfig,
    voice: Arc<dyn VoiceGateway>,
    /// Snapshot shared with the status server.
    status: Arc<RwLock<BotStatus>>,
    /// Sender side of this controller's own inbox, used by retry timers.
    events: mpsc::Sender<BotEvent>,
    state: ControllerState,
    generation: u64,
    retry_pending: bool,
    left_on_request: bool,
}

impl ConnectionController {
    /// Creates a controller in the `Idle` state.
    ///
    /// # Arguments
    /// - `config` - The bot this controller manages
    /// - `voice` - Voice client used to look up channels and connect
    /// - `status` - Status snapshot to keep up to date
    /// - `events` - Sender for the inbox later passed to `run`
    pub fn new(
        config: BotConfig,
        voice: Arc<dyn VoiceGateway>,
        status: Arc<RwLock<BotStatus>>,
        events: mpsc::Sender<BotEvent>,
    ) -> Self {
        Self {
            config,
            voice,
            status,
            events,
            state: ControllerState::Idle,
            generation: 0,
            retry_pending: false,
            left_on_request: false,
        }
    }

    /// Processes events until `BotEvent::Shutdown` is received.
    ///
    /// Enters `LoggingIn` immediately; the caller starts the client session
    /// alongside this task.
    pub async fn run(mut self, mut inbox: mpsc::Receiver<BotEvent>) {
        self.transition(ControllerState::LoggingIn).await;

        while let Some(event) = inbox.recv().await {
            if !self.handle(event).await {
                break;
            }
        }

        tracing::debug!("{}: connection controller stopped", self.config.name);
    }

    /// Handles a single event.
    ///
    /// # Returns
    /// - `false` - The event was `Shutdown` and the controller should stop
    /// - `true` - Otherwise
    pub async fn handle(&mut self, event: BotEvent) -> bool {
        match event {
            BotEvent::SessionReady { identity } => self.on_session_ready(identity).await,
            BotEvent::Command { command, reply } => self.on_command(command, reply).await,
            BotEvent::VoiceStateUpdate {
                guild_id,
                channel_id,
            } => self.on_voice_state_update(guild_id, channel_id).await,
            BotEvent::Retry { generation } => self.on_retry(generation).await,
            BotEvent::LoginFailed { reason } => self.on_login_failed(reason).await,
            BotEvent::Shutdown => {
                tracing::info!("{}: shutting down", self.config.name);
                return false;
            }
        }

        true
    }

    /// Joins the configured voice channel.
    ///
    /// Lookup failures (bad ids, unknown guild or channel, non-voice channel) are
    /// logged and abort the attempt without a retry. Connection failures are
    /// logged and schedule a rejoin. Nothing is returned to the caller.
    pub async fn join_voice_channel(&mut self) {
        self.transition(ControllerState::VoiceJoining).await;

        let (guild_id, channel_id) = match self.config.target() {
            Ok(target) => target,
            Err(e) => {
                tracing::error!("{}: {}", self.config.name, e);
                self.transition(ControllerState::Ready).await;
                return;
            }
        };

        let channel_name = match self.voice.resolve_channel(guild_id, channel_id).await {
            Ok(name) => name,
            Err(e) => {
                tracing::error!("{}: {}", self.config.name, e);
                self.transition(ControllerState::Ready).await;
                return;
            }
        };

        match self.voice.connect(guild_id, channel_id, AUDIO_POLICY).await {
            Ok(()) => {
                tracing::info!(
                    "🎤 {} joined voice channel: {}",
                    self.config.name,
                    channel_name
                );
                self.status.write().await.last_joined_at = Some(Utc::now());
                self.transition(ControllerState::VoiceConnected).await;
            }
            Err(e) => {
                tracing::error!("{}: {}", self.config.name, e);
                self.transition(ControllerState::Error).await;

                if e.is_retryable() {
                    self.schedule_retry();
                }
            }
        }
    }

    async fn on_session_ready(&mut self, identity: String) {
        tracing::info!(
            "✅ {} is ready! Logged in as {}",
            self.config.name,
            identity
        );

        {
            let mut status = self.status.write().await;
            status.ready = true;
            status.user = Some(identity);
        }
        self.transition(ControllerState::Ready).await;

        // A new gateway session must not undo a manual leave.
        if self.left_on_request {
            tracing::info!(
                "{}: staying out of voice until told to join",
                self.config.name
            );
            return;
        }

        self.join_voice_channel().await;
    }

    async fn on_command(&mut self, command: Command, reply_tx: oneshot::Sender<String>) {
        match command {
            Command::Join => {
                // Any pending rejoin is superseded by this join.
                self.generation += 1;
                self.retry_pending = false;
                self.set_left_on_request(false).await;

                self.join_voice_channel().await;
                self.send_reply(reply_tx, reply::JOINING);
            }
            Command::Leave => {
                let text = self.leave_voice_channel().await;
                self.send_reply(reply_tx, text);
            }
        }
    }

    /// Destroys the existing voice connection, if there is one.
    ///
    /// Once the connection is gone, pending rejoins are invalidated and no rejoin
    /// is scheduled for the resulting disconnect. A failed teardown leaves the
    /// controller as it was, so a later involuntary disconnect still rejoins.
    async fn leave_voice_channel(&mut self) -> &'static str {
        let Ok((guild_id, _)) = self.config.target() else {
            return reply::NOT_CONNECTED;
        };

        if self.voice.connection_state(guild_id).await.is_none() {
            return reply::NOT_CONNECTED;
        }

        if let Err(e) = self.voice.disconnect(guild_id).await {
            tracing::error!(
                "{}: failed to leave voice channel: {}",
                self.config.name,
                e
            );
            return reply::LEAVE_FAILED;
        }

        self.generation += 1;
        self.retry_pending = false;
        self.set_left_on_request(true).await;

        tracing::info!("👋 {} left voice channel", self.config.name);
        self.transition(ControllerState::Ready).await;

        reply::LEFT
    }

    async fn on_voice_state_update(
        &mut self,
        guild_id: Option<GuildId>,
        channel_id: Option<ChannelId>,
    ) {
        let Ok((target_guild, _)) = self.config.target() else {
            return;
        };

        if guild_id.is_some_and(|id| id != target_guild) {
            return;
        }

        match channel_id {
            Some(channel_id) => {
                tracing::debug!(
                    "{}: voice state now in channel {}",
                    self.config.name,
                    channel_id
                );
            }
            None if self.left_on_request => {
                tracing::info!("{}: disconnected from voice on request", self.config.name);
            }
            None => {
                tracing::warn!(
                    "⚠️ {} was disconnected from voice. Rejoining in {} seconds...",
                    self.config.name,
                    RETRY_DELAY.as_secs()
                );
                self.transition(ControllerState::VoiceDisconnected).await;
                self.schedule_retry();
            }
        }
    }

    async fn on_retry(&mut self, generation: u64) {
        if generation != self.generation {
            tracing::debug!(
                "{}: discarding rejoin scheduled before a manual leave",
                self.config.name
            );
            return;
        }

        self.retry_pending = false;
        tracing::info!("{}: rejoining voice channel", self.config.name);
        self.join_voice_channel().await;
    }

    async fn on_login_failed(&mut self, reason: String) {
        tracing::error!("❌ {} failed to log in: {}", self.config.name, reason);

        self.status.write().await.ready = false;
        self.transition(ControllerState::Idle).await;
    }

    /// Posts a `Retry` event to this controller's inbox after `RETRY_DELAY`.
    ///
    /// Does nothing if a rejoin is already pending. Timers cannot be cancelled;
    /// stale ones are filtered by generation when they fire.
    fn schedule_retry(&mut self) {
        if self.retry_pending {
            tracing::debug!("{}: rejoin already scheduled", self.config.name);
            return;
        }

        self.retry_pending = true;

        let events = self.events.clone();
        let generation = self.generation;
        let name = self.config.name.clone();

        tokio::spawn(async move {
            tokio::time::sleep(RETRY_DELAY).await;

            if events.send(BotEvent::Retry { generation }).await.is_err() {
                tracing::debug!("{}: controller stopped, dropping rejoin", name);
            }
        });
    }

    async fn transition(&mut self, next: ControllerState) {
        if self.state == next {
            return;
        }

        tracing::info!(
            "{}: connection state changed: {} -> {}",
            self.config.name,
            self.state,
            next
        );

        self.state = next;
        self.status.write().await.state = next;
    }

    async fn set_left_on_request(&mut self, left: bool) {
        self.left_on_request = left;
        self.status.write().await.left_on_request = left;
    }

    fn send_reply(&self, reply_tx: oneshot::Sender<String>, text: &str) {
        if reply_tx.send(text.to_string()).is_err() {
            tracing::debug!("{}: command reply dropped", self.config.name);
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    #[cfg(test)]
    pub fn retry_pending(&self) -> bool {
        self.retry_pending
    }
}
