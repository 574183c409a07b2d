use anyhow::Result;

use crate::domain::event::InboundEvent;

/// Inbound side of the gateway: yields events in arrival order.
///
/// `Ok(None)` means the stream is exhausted; the live gateway never
/// returns it, but scripted test sources use it to end the loop.
pub trait UpdateSource {
    fn next_event(&mut self) -> Result<Option<InboundEvent>>;
}

/// Outbound side of the gateway: one plain-text reply to one chat.
///
/// Callers treat sends as fire-and-forget; a returned error is logged by
/// the implementation and deliberately ignored at the call site.
pub trait ReplySender {
    fn send_reply(&mut self, chat_id: i64, text: &str) -> Result<()>;
}
