//! Long-poll loop: updates in, dispatcher replies out.

use std::time::Duration;

use crate::{
    telegram::api::BotApiClient,
    usecases::dispatch::{Dispatcher, IncomingMessage},
};

const POLL_FAILED: &str = "TELEGRAM_POLL_FAILED";
const REPLY_SEND_FAILED: &str = "TELEGRAM_REPLY_SEND_FAILED";

const POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

pub struct UpdatePoller {
    client: BotApiClient,
    poll_timeout_secs: u64,
}

impl UpdatePoller {
    pub fn new(client: BotApiClient, poll_timeout_secs: u64) -> Self {
        Self {
            client,
            poll_timeout_secs,
        }
    }

    /// Serves commands until the surrounding task is cancelled. Transport
    /// failures back off and retry; nothing inside a command cycle is
    /// allowed to take the loop down.
    pub async fn run(&self, dispatcher: &Dispatcher<'_>) {
        tracing::info!("bot started, listening for commands");
        let mut offset = 0i64;

        loop {
            let updates = match self.client.get_updates(offset, self.poll_timeout_secs).await {
                Ok(updates) => updates,
                Err(error) => {
                    tracing::warn!(code = POLL_FAILED, error = %error, "getUpdates failed");
                    tokio::time::sleep(POLL_RETRY_DELAY).await;
                    continue;
                }
            };

            for update in updates {
                offset = offset.max(update.update_id + 1);

                let Some(message) = update.message else {
                    continue;
                };
                let Some(text) = message.text else {
                    continue;
                };

                let incoming = IncomingMessage {
                    chat_id: message.chat.id,
                    text,
                };
                let Some(reply) = dispatcher.dispatch(&incoming).await else {
                    continue;
                };

                if let Err(error) = self.client.send_message(incoming.chat_id, &reply).await {
                    tracing::warn!(
                        code = REPLY_SEND_FAILED,
                        chat_id = incoming.chat_id,
                        error = %error,
                        "failed to deliver reply"
                    );
                }
            }
        }
    }
}
