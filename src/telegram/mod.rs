//! Telegram integration layer: Bot API client and update polling.

pub mod api;
pub mod poller;

/// Returns the telegram module name for smoke checks.
pub fn module_name() -> &'static str {
    "telegram"
}
