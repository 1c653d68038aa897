//! Infrastructure layer: config, persistent store, logging, and outbound
//! delivery adapters.

pub mod config;
pub mod error;
pub mod logging;
pub mod secrets;
pub mod store;
pub mod webhook;

/// Returns the infra module name for smoke checks.
pub fn module_name() -> &'static str {
    "infra"
}
