//! Interaction tuning shared by the server render and the hydrated client.
//!
//! Both sides must agree on these values, so they are compiled in rather than
//! read from the environment. The page provides them through Leptos context.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Scroll offset (px) after which the navbar switches to its elevated style
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;

/// Scroll offset (px) after which the back-to-top control is shown
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// Height of the fixed navbar, subtracted from anchor scroll targets
pub const ANCHOR_OFFSET: f64 = 80.0;

/// Simulated delivery latency for the contact form
pub const SUBMIT_DELAY_MS: u32 = 2000;

/// How long the success message stays before the form resets
pub const SUCCESS_RESET_MS: u32 = 5000;

/// How long an internal link shows its loading label before reverting
pub const LINK_LOADING_RESET_MS: u32 = 3000;

/// Fraction of a tracked element that must be visible to reveal it
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin used for reveal observation
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Timing and threshold values for every page reactor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionSettings {
    pub navbar_scroll_threshold: f64,
    pub back_to_top_threshold: f64,
    pub anchor_offset: f64,
    pub submit_delay_ms: u32,
    pub success_reset_ms: u32,
    pub link_loading_reset_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            navbar_scroll_threshold: NAVBAR_SCROLL_THRESHOLD,
            back_to_top_threshold: BACK_TO_TOP_THRESHOLD,
            anchor_offset: ANCHOR_OFFSET,
            submit_delay_ms: SUBMIT_DELAY_MS,
            success_reset_ms: SUCCESS_RESET_MS,
            link_loading_reset_ms: LINK_LOADING_RESET_MS,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_string(),
        }
    }
}

impl InteractionSettings {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms as u64)
    }

    pub fn success_reset(&self) -> Duration {
        Duration::from_millis(self.success_reset_ms as u64)
    }

    pub fn link_loading_reset(&self) -> Duration {
        Duration::from_millis(self.link_loading_reset_ms as u64)
    }
}
