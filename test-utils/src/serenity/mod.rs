//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Channel, Message, VoiceState) for testing purposes. These factories create
//! valid Serenity objects by deserializing JSON, simulating what Discord's gateway
//! and API would deliver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_channel, create_test_message};
//!
//! #[test]
//! fn test_command_parsing() {
//!     // A voice channel the bot could join
//!     let channel = create_test_channel(222, 111, "General", 2);
//!
//!     // A human typing a command in a guild
//!     let message = create_test_message("$join", false, Some(111));
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects
//! - `message::create_test_message` - Create Serenity Message objects
//! - `voice_state::create_test_voice_state` - Create Serenity VoiceState objects

pub mod channel;
pub mod message;
pub mod voice_state;

// Re-export commonly used functions for convenience
pub use channel::create_test_channel;
pub use message::create_test_message;
pub use voice_state::create_test_voice_state;
