use crate::usecases::contracts::ReplySender;

pub const GREETING: &str = "Hello! What is your name?";

/// Sends the fixed greeting to the originating chat. No persistence side
/// effect; the send result is ignored (the adapter logs failures).
pub fn greet(replies: &mut dyn ReplySender, chat_id: i64) {
    let _ = replies.send_reply(chat_id, GREETING);
}
