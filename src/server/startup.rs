use std::sync::Arc;

use serenity::gateway::ShardManager;
use tokio::{
    sync::{mpsc, RwLock},
    task::JoinHandle,
};
use tracing_subscriber::EnvFilter;

use crate::server::{
    bot::start::{init_bot, start_bot},
    config::Config,
    model::{bot::BotStatus, event::BotEvent},
    service::{
        connection::ConnectionController,
        registry::{BotHandle, BotRegistry},
        voice::VoiceGateway,
    },
};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info,serenity=warn,songbird=warn,tower_http=info";

/// Capacity of each controller's event inbox.
const EVENT_BUFFER: usize = 32;

/// Background tasks belonging to one running bot.
pub struct BotRuntime {
    name: String,
    events: mpsc::Sender<BotEvent>,
    controller: JoinHandle<()>,
    shard_manager: Arc<ShardManager>,
}

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds and starts every configured bot.
///
/// Each bot gets its own serenity client, connection controller task and client
/// task. A bot whose client cannot be built is still registered so it shows up
/// on the status page as never ready; the other bots are unaffected.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `BotRegistry` - Every configured bot, in configuration order
/// - `Vec<BotRuntime>` - Tasks of the bots that were started, for shutdown
pub async fn launch_bots(config: &Config) -> (BotRegistry, Vec<BotRuntime>) {
    let mut handles = Vec::with_capacity(config.bots.len());
    let mut runtimes = Vec::with_capacity(config.bots.len());

    for (index, bot) in config.bots.iter().enumerate() {
        let status = Arc::new(RwLock::new(BotStatus::default()));
        let (events, inbox) = mpsc::channel(EVENT_BUFFER);

        let (client, voice) = match init_bot(bot, config.mode, events.clone()).await {
            Ok(built) => built,
            Err(e) => {
                tracing::error!("❌ Failed to create client for {}: {}", bot.name, e);
                handles.push(BotHandle::new(index, bot.clone(), status, None));
                continue;
            }
        };

        let voice: Arc<dyn VoiceGateway> = voice;
        let shard_manager = client.shard_manager.clone();

        let controller =
            ConnectionController::new(bot.clone(), voice.clone(), status.clone(), events.clone());
        let controller = tokio::spawn(controller.run(inbox));

        let name = bot.name.clone();
        let login_events = events.clone();
        tokio::spawn(async move {
            if let Err(e) = start_bot(&name, client).await {
                tracing::error!("❌ {} failed to log in: {}", name, e);

                let reason = e.to_string();
                if login_events
                    .send(BotEvent::LoginFailed { reason })
                    .await
                    .is_err()
                {
                    tracing::debug!("{}: controller stopped before login failure", name);
                }
            }
        });

        handles.push(BotHandle::new(index, bot.clone(), status, Some(voice)));
        runtimes.push(BotRuntime {
            name: bot.name.clone(),
            events,
            controller,
            shard_manager,
        });
    }

    (BotRegistry::new(handles), runtimes)
}

/// Resolves when the process receives Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}

/// Disconnects every bot from Discord and stops its controller.
pub async fn shutdown_bots(runtimes: Vec<BotRuntime>) {
    for runtime in runtimes {
        runtime.shard_manager.shutdown_all().await;

        if runtime.events.send(BotEvent::Shutdown).await.is_err() {
            tracing::debug!("{}: controller already stopped", runtime.name);
        }

        if let Err(e) = runtime.controller.await {
            tracing::error!("{}: controller task failed: {}", runtime.name, e);
        }
    }
}
