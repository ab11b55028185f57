//! Loading Timer
//!
//! Cancellable delay that clears the loading flag after hydration.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Holds at most one pending timeout
#[derive(Clone, Copy)]
pub struct LoadingTimer {
    pending: StoredValue<Option<Timeout>, LocalStorage>,
}

impl LoadingTimer {
    pub fn new() -> Self {
        Self {
            pending: StoredValue::new_local(None),
        }
    }

    /// Run `on_done` after `delay_ms`, replacing any pending timeout
    pub fn start(&self, delay_ms: u32, on_done: impl FnOnce() + 'static) {
        let pending = self.pending;
        let timeout = Timeout::new(delay_ms, move || {
            // Dropping the timeout here would free the running closure.
            pending.try_update_value(|slot| slot.take().map(Timeout::forget));
            on_done();
        });
        if let Some(Some(previous)) = self.pending.try_update_value(|slot| slot.replace(timeout)) {
            previous.cancel();
        }
    }

    pub fn cancel(&self) {
        if let Some(Some(timeout)) = self.pending.try_update_value(Option::take) {
            timeout.cancel();
            log::debug!("[Loading] Pending timer cancelled");
        }
    }
}
