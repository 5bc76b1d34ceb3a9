//! Server-side domain models.
//!
//! Runtime state of each bot (controller and voice connection states, status
//! snapshots), chat commands and the inbound event type consumed by the
//! connection controller.

pub mod bot;
pub mod command;
pub mod event;
