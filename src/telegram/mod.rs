//! Telegram integration layer: the teloxide-backed gateway adapter.

mod gateway;

pub use gateway::TelegramGateway;

/// Returns the telegram module name for smoke checks.
pub fn module_name() -> &'static str {
    "telegram"
}
