use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};
use songbird::{SerenityInit, Songbird};
use tokio::sync::mpsc;

use crate::server::{
    bot::{handler::Handler, voice::SongbirdVoice},
    config::{BotConfig, DeploymentMode},
    error::AppError,
    model::event::BotEvent,
};

/// Builds the Discord client for one bot
///
/// The client is created with its own songbird voice manager; the returned
/// [`SongbirdVoice`] shares that manager together with the client's cache and HTTP
/// client, so it can be handed to the bot's connection controller.
///
/// # Arguments
/// - `config` - The bot's configuration
/// - `mode` - Deployment mode, which selects the command prefix
/// - `events` - Inbox of the bot's connection controller
///
/// # Returns
/// - `Ok((Client, Arc<SongbirdVoice>))` - Client ready to be started
/// - `Err(AppError)` - If the client could not be built (e.g. malformed token)
pub async fn init_bot(
    config: &BotConfig,
    mode: DeploymentMode,
    events: mpsc::Sender<BotEvent>,
) -> Result<(Client, Arc<SongbirdVoice>), AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(config.name.clone(), mode, events);
    let songbird = Songbird::serenity();

    let client = Client::builder(&config.token, intents)
        .event_handler(handler)
        .register_songbird_with(songbird.clone())
        .await?;

    let voice = Arc::new(SongbirdVoice::new(
        client.cache.clone(),
        client.http.clone(),
        songbird,
    ));

    Ok((client, voice))
}

/// Starts the Discord bot in a blocking manner
///
/// This function logs the bot in and runs its gateway connection. It should be
/// called from within a tokio::spawn task since it will block until the bot shuts down.
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if login or the gateway connection fails
pub async fn start_bot(name: &str, mut client: Client) -> Result<(), AppError> {
    tracing::info!("Logging in {}...", name);

    client.start().await?;

    Ok(())
}
