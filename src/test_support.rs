//! Shared helpers for tests that mutate process-wide state.

use std::sync::{Mutex, MutexGuard};

// Tests that touch environment variables must serialize; the overlay in
// the config loader reads the same process-global environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().expect("env lock should not be poisoned")
}
