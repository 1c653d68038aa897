//! Block-check integration layer: the remote status API client.

mod client;

pub use client::BlockCheckClient;

/// Returns the blockcheck module name for smoke checks.
pub fn module_name() -> &'static str {
    "blockcheck"
}
