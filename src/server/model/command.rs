/// Manual voice control commands recognised in chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Join,
    Leave,
}

/// Replies sent back to the author of a command.
pub mod reply {
    pub const JOINING: &str = "Joining voice channel...";
    pub const LEFT: &str = "Left voice channel!";
    pub const NOT_CONNECTED: &str = "Not in a voice channel!";
    pub const LEAVE_FAILED: &str = "Failed to leave voice channel!";
}
