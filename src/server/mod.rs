//! Bot supervision and the status server.
//!
//! This module contains everything that runs inside the process: one Discord
//! client and connection controller per configured bot, and the Axum server that
//! reports their status.
//!
//! # Architecture
//!
//! - **Bot Layer** (`bot/`) - Serenity clients, gateway event handlers and the songbird voice client
//! - **Service Layer** (`service/`) - Connection controller, command parsing, bot registry and status reporting
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Model Layer** (`model/`) - Controller states, commands and events
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based bot configuration
//! - **State** (`state`) - Shared application state (bot registry, deployment mode)
//! - **Startup** (`startup`) - Logging, bot launch and shutdown
//! - **Router** (`router`) - Axum route configuration
//!
//! # Event Flow
//!
//! 1. **Bot** handlers receive gateway events and forward them as `BotEvent`s
//! 2. **Connection controller** handles the events for its bot one at a time
//! 3. **Controller** publishes its state into the bot's status snapshot
//! 4. **Status endpoints** read the snapshots through the registry

pub mod bot;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
