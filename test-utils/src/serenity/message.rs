//! Test factory for creating Serenity Message objects.
//!
//! Messages are created as they arrive over the gateway's MESSAGE_CREATE event,
//! with a single author and no attachments, embeds or mentions.

use serenity::all::Message;

/// Creates a test Serenity Message with customizable content and origin.
///
/// # Arguments
/// - `content` - Message text
/// - `author_bot` - Whether the author is a bot account
/// - `guild_id` - Guild the message was sent in, or `None` for a direct message
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::message::create_test_message;
///
/// // Guild message from a human
/// let message = create_test_message("$join", false, Some(111));
/// assert_eq!(message.content, "$join");
///
/// // Direct message from another bot
/// let message = create_test_message("!leave", true, None);
/// assert!(message.guild_id.is_none());
/// ```
pub fn create_test_message(content: &str, author_bot: bool, guild_id: Option<u64>) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": "300000000000000000",
        "channel_id": "200000000000000000",
        "guild_id": guild_id.map(|id| id.to_string()),
        "author": {
            "id": "100000000000000000",
            "username": "tester",
            "discriminator": "1234",
            "global_name": null,
            "avatar": null,
            "bot": author_bot,
        },
        "content": content,
        "timestamp": "2024-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "type": 0,
        "components": [],
        "sticker_items": [],
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
