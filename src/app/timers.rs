use std::time::Duration;

use leptos::prelude::*;

/// Timeouts owned by one component. Everything still pending is cleared when
/// the owner is cleaned up, so no callback runs against unmounted state.
#[derive(Clone, Copy)]
pub struct Timers {
    handles: StoredValue<Vec<TimeoutHandle>>,
}

impl Timers {
    pub fn new() -> Self {
        let timers = Self {
            handles: StoredValue::new(Vec::new()),
        };
        on_cleanup(move || timers.clear());
        timers
    }

    /// Schedules `cb`. Returns false when the browser refused the timeout.
    pub fn after(&self, delay: Duration, cb: impl FnOnce() + 'static) -> bool {
        match set_timeout_with_handle(cb, delay) {
            Ok(handle) => {
                self.handles.try_update_value(|handles| handles.push(handle));
                true
            }
            Err(e) => {
                log::warn!("couldn't schedule timeout: {e:?}");
                false
            }
        }
    }

    /// Clears everything pending, then schedules `cb`. A timer that is
    /// rescheduled over and over must go through here so it holds a single
    /// slot instead of growing the handle list.
    pub fn replace(&self, delay: Duration, cb: impl FnOnce() + 'static) -> bool {
        self.clear();
        self.after(delay, cb)
    }

    pub fn clear(&self) {
        self.handles.try_update_value(|handles| {
            for handle in handles.drain(..) {
                handle.clear();
            }
        });
    }
}
