//! Analytics context
//!
//! Components call [`use_analytics`] and track events without knowing where
//! they go. Without a provider, events are logged to the console.

use std::sync::Arc;

use leptos::prelude::*;

use crate::core::{AnalyticsEvent, AnalyticsSink, ConsoleSink};

#[derive(Clone)]
pub struct Analytics {
    sink: Arc<dyn AnalyticsSink>,
}

impl Analytics {
    pub fn new(sink: impl AnalyticsSink + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }

    pub fn track(&self, event: AnalyticsEvent) {
        self.sink.track(&event);
    }
}

impl Default for Analytics {
    fn default() -> Self {
        Self::new(ConsoleSink)
    }
}

/// Provide the analytics sink for the page
pub fn provide_analytics(sink: impl AnalyticsSink + 'static) -> Analytics {
    let analytics = Analytics::new(sink);
    provide_context(analytics.clone());
    analytics
}

pub fn use_analytics() -> Analytics {
    use_context::<Analytics>().unwrap_or_default()
}
