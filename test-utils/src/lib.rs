//! Voicekeeper Test Utils
//!
//! Shared testing utilities for the voicekeeper crate. Gateway events and Discord
//! API objects are awkward to construct by hand, so this crate provides factories
//! that build valid Serenity structs from JSON payloads shaped like Discord's own.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_voice_state;
//!
//! #[test]
//! fn test_disconnect_event() {
//!     // Bot 500 left its voice channel in guild 111
//!     let state = create_test_voice_state(500, 111, None);
//!     assert!(state.channel_id.is_none());
//! }
//! ```

pub mod serenity;
