/// One notification delivered by the gateway.
///
/// Updates without a message payload (edits, callback queries, and so on)
/// map to `Other` and are skipped by the loop with no side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    Message(InboundMessage),
    Other,
}

/// One received chat message, already reduced to the fields the loop needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub chat_id: i64,
    pub sender_name: String,
    pub text: String,
}

impl InboundMessage {
    pub fn new(chat_id: i64, sender_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            sender_name: sender_name.into(),
            text: text.into(),
        }
    }

    /// Returns the command name when the text is shaped like a bot command:
    /// a leading `/`, then the command, then an optional `@botname` suffix.
    ///
    /// Leading whitespace disqualifies the text; `" /start"` is ordinary text.
    pub fn command(&self) -> Option<&str> {
        let rest = self.text.strip_prefix('/')?;
        let token = rest.split(char::is_whitespace).next()?;
        let name = token.split('@').next()?;

        (!name.is_empty()).then_some(name)
    }

    /// Only `/start` is special-cased. Every other text, including other
    /// `/commands`, falls through to the persistence handler as a name.
    pub fn is_start_command(&self) -> bool {
        self.command() == Some("start")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(text: &str) -> InboundMessage {
        InboundMessage::new(1, "alice", text)
    }

    #[test]
    fn recognizes_plain_start_command() {
        assert!(message("/start").is_start_command());
    }

    #[test]
    fn recognizes_start_command_with_bot_mention() {
        assert!(message("/start@rollcall_bot").is_start_command());
    }

    #[test]
    fn recognizes_start_command_with_trailing_arguments() {
        assert!(message("/start now please").is_start_command());
    }

    #[test]
    fn other_commands_are_parsed_but_are_not_start() {
        let msg = message("/help");

        assert_eq!(msg.command(), Some("help"));
        assert!(!msg.is_start_command());
    }

    #[test]
    fn plain_text_is_not_a_command() {
        assert_eq!(message("Alice").command(), None);
    }

    #[test]
    fn empty_text_is_not_a_command() {
        assert_eq!(message("").command(), None);
    }

    #[test]
    fn bare_slash_is_not_a_command() {
        assert_eq!(message("/").command(), None);
    }

    #[test]
    fn leading_whitespace_disqualifies_a_command() {
        assert_eq!(message(" /start").command(), None);
    }

    #[test]
    fn slash_followed_by_space_is_not_a_command() {
        assert_eq!(message("/ start").command(), None);
    }
}
