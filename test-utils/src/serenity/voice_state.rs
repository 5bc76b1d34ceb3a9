//! Test factory for creating Serenity VoiceState objects.

use serenity::all::VoiceState;

/// Creates a test Serenity VoiceState for a user in a guild.
///
/// A `channel_id` of `None` represents the user having left voice in that guild.
///
/// # Arguments
/// - `user_id` - Discord user ID the voice state belongs to
/// - `guild_id` - Discord guild ID
/// - `channel_id` - Voice channel the user is in, if any
///
/// # Returns
/// - `VoiceState` - A valid Serenity VoiceState struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a VoiceState (indicates invalid test data)
pub fn create_test_voice_state(user_id: u64, guild_id: u64, channel_id: Option<u64>) -> VoiceState {
    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "channel_id": channel_id.map(|id| id.to_string()),
        "user_id": user_id.to_string(),
        "member": null,
        "session_id": "test-session",
        "deaf": false,
        "mute": false,
        "self_deaf": true,
        "self_mute": false,
        "self_stream": null,
        "self_video": false,
        "suppress": false,
        "request_to_speak_timestamp": null,
    }))
    .expect("Failed to create test voice state - invalid JSON structure")
}
