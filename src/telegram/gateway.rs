use std::{collections::VecDeque, fmt, thread, time::Duration};

use anyhow::Result;
use teloxide::{
    payloads::GetUpdatesSetters,
    prelude::*,
    requests::Request,
    types::{Update, UpdateKind, User},
};
use tokio::runtime::{Builder, Runtime};

use crate::{
    domain::event::{InboundEvent, InboundMessage},
    infra::{config::TelegramConfig, error::AppError},
    usecases::contracts::{ReplySender, UpdateSource},
};

const TELEGRAM_POLL_FAILED: &str = "TELEGRAM_POLL_FAILED";
const TELEGRAM_SEND_FAILED: &str = "TELEGRAM_SEND_FAILED";

const POLL_RETRY_DELAY: Duration = Duration::from_secs(3);

/// Long-polling gateway over the Bot API. The core stays synchronous; the
/// adapter owns a current-thread runtime and blocks on each client call.
pub struct TelegramGateway {
    rt: Runtime,
    bot: Bot,
    poll_timeout_secs: u32,
    debug: bool,
    offset: Option<i32>,
    pending: VecDeque<InboundEvent>,
}

impl TelegramGateway {
    /// Builds the client and verifies the session with a `getMe` call.
    /// Any failure here is fatal for the process.
    pub fn connect(config: &TelegramConfig) -> Result<Self, AppError> {
        if config.token.is_empty() {
            return Err(AppError::MissingToken);
        }

        let rt = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(AppError::RuntimeInit)?;

        let bot = Bot::new(&config.token);
        let me = rt
            .block_on(bot.get_me().send())
            .map_err(AppError::GatewayInit)?;

        tracing::info!(username = me.username(), "authorized with telegram");

        Ok(Self {
            rt,
            bot,
            poll_timeout_secs: config.poll_timeout_secs,
            debug: config.debug,
            offset: None,
            pending: VecDeque::new(),
        })
    }
}

impl UpdateSource for TelegramGateway {
    fn next_event(&mut self) -> Result<Option<InboundEvent>> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(Some(event));
            }

            let mut request = self.bot.get_updates().timeout(self.poll_timeout_secs);
            if let Some(offset) = self.offset {
                request = request.offset(offset);
            }

            match self.rt.block_on(request.send()) {
                Ok(updates) => {
                    if self.debug {
                        tracing::debug!(count = updates.len(), "update batch received");
                    }

                    for update in updates {
                        self.offset = Some(update.id.0 as i32 + 1);
                        self.pending.push_back(map_update(update));
                    }
                }
                Err(error) => {
                    tracing::warn!(
                        code = TELEGRAM_POLL_FAILED,
                        error = %error,
                        "update poll failed; retrying"
                    );
                    thread::sleep(POLL_RETRY_DELAY);
                }
            }
        }
    }
}

impl ReplySender for TelegramGateway {
    fn send_reply(&mut self, chat_id: i64, text: &str) -> Result<()> {
        let request = self.bot.send_message(ChatId(chat_id), text);

        if let Err(error) = self.rt.block_on(request.send()) {
            tracing::warn!(
                code = TELEGRAM_SEND_FAILED,
                chat_id,
                error = %error,
                "reply send failed"
            );
            return Err(error.into());
        }

        Ok(())
    }
}

// Manual impl so the bot token never reaches Debug output.
impl fmt::Debug for TelegramGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramGateway")
            .field("poll_timeout_secs", &self.poll_timeout_secs)
            .field("debug", &self.debug)
            .field("offset", &self.offset)
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}

fn map_update(update: Update) -> InboundEvent {
    match update.kind {
        UpdateKind::Message(message) => {
            let sender_name = message
                .from
                .as_ref()
                .map(sender_display_name)
                .unwrap_or_default();
            let text = message.text().unwrap_or_default().to_owned();

            InboundEvent::Message(InboundMessage::new(message.chat.id.0, sender_name, text))
        }
        _ => InboundEvent::Other,
    }
}

fn sender_display_name(user: &User) -> String {
    user.username
        .clone()
        .unwrap_or_else(|| user.full_name())
}
