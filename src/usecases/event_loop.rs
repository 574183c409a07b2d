use anyhow::Result;

use crate::{
    domain::event::InboundEvent,
    infra::contracts::NameStore,
    usecases::{
        contracts::{ReplySender, UpdateSource},
        greet::greet,
        record_name::record_name,
    },
};

const NAME_STORE_APPEND_FAILED: &str = "NAME_STORE_APPEND_FAILED";

/// Sequentially consumes gateway events and dispatches each to exactly one
/// handler. A message is fully processed, blocking file append included,
/// before the next one is taken; rows therefore land in arrival order.
///
/// Handler failures are logged and the current event is dropped; only the
/// source itself can end the loop.
pub fn run<G>(gateway: &mut G, store: &mut dyn NameStore) -> Result<()>
where
    G: UpdateSource + ReplySender,
{
    while let Some(event) = gateway.next_event()? {
        let InboundEvent::Message(message) = event else {
            continue;
        };

        tracing::info!(
            sender = %message.sender_name,
            text = %message.text,
            "message received"
        );

        if message.is_start_command() {
            greet(gateway, message.chat_id);
        } else if let Err(error) = record_name(store, gateway, message.chat_id, &message.text) {
            tracing::error!(
                code = NAME_STORE_APPEND_FAILED,
                error = %error,
                "failed to store name; message dropped"
            );
        }
    }

    Ok(())
}
