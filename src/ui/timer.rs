//! Cancellable delayed actions
//!
//! A [`DelayedAction`] holds at most one pending timeout. Scheduling a new
//! action drops the previous one, which cancels it; this is also how the page
//! debounces. On the server nothing is ever scheduled.

use std::time::Duration;

#[cfg(not(feature = "ssr"))]
use gloo_timers::callback::Timeout;

#[derive(Default)]
pub struct DelayedAction {
    #[cfg(not(feature = "ssr"))]
    pending: Option<Timeout>,
}

impl DelayedAction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` after `delay`, superseding whatever was pending
    #[cfg(not(feature = "ssr"))]
    pub fn schedule(&mut self, delay: Duration, action: impl FnOnce() + 'static) {
        // Dropping a gloo Timeout clears it
        self.pending = Some(Timeout::new(timeout_millis(delay), action));
    }

    #[cfg(feature = "ssr")]
    pub fn schedule(&mut self, _delay: Duration, _action: impl FnOnce() + 'static) {}

    pub fn cancel(&mut self) {
        #[cfg(not(feature = "ssr"))]
        {
            self.pending = None;
        }
    }
}

/// Browser timeouts take a `u32` millisecond count; longer delays saturate
pub fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_millis() {
        assert_eq!(timeout_millis(Duration::from_millis(3000)), 3000);
        assert_eq!(timeout_millis(Duration::ZERO), 0);
        assert_eq!(timeout_millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
