//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the resources the status
//! endpoints read from. The state is initialized once during startup and then
//! cloned for each request handler through Axum's state extraction.

use std::sync::Arc;

use crate::server::{config::DeploymentMode, service::registry::BotRegistry};

/// Application state containing shared resources.
///
/// All fields are cheap to clone: the registry sits behind an `Arc` and the
/// deployment mode is `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Every configured bot with its status snapshot and voice client.
    ///
    /// Built once at startup and never modified afterwards; the per-bot status
    /// inside each entry is updated by that bot's controller.
    pub registry: Arc<BotRegistry>,

    /// Deployment mode, which selects the response format of `GET /`.
    pub mode: DeploymentMode,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `registry` - Registry of configured bots
    /// - `mode` - Deployment mode the configuration was loaded in
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(registry: Arc<BotRegistry>, mode: DeploymentMode) -> Self {
        Self { registry, mode }
    }
}
