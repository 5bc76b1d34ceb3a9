//! Service layer for bot orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! Discord event handlers / HTTP controllers and the voice client. Services are
//! responsible for:
//!
//! - **Connection control**: Keeping each bot in its voice channel (`connection`)
//! - **Command recognition**: Mapping chat messages to commands (`command`)
//! - **Bot registry**: The startup-built list of bots shared with the HTTP layer (`registry`)
//! - **Status reporting**: Building status DTOs from the registry (`status`)
//! - **Voice abstraction**: The `VoiceGateway` seam over the voice client (`voice`)

pub mod command;
pub mod connection;
pub mod registry;
pub mod status;
pub mod voice;

#[cfg(test)]
pub(crate) mod test;
