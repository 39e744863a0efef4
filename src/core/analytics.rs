//! Analytics events
//!
//! Events are handed to an [`AnalyticsSink`]. The site has no analytics
//! provider, so the default sink writes them to the console.

use serde::Serialize;

/// Fallback label when a clicked card has no title
pub const UNKNOWN_LABEL: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub category: String,
    pub action: String,
    pub label: String,
}

impl AnalyticsEvent {
    pub fn new(
        category: impl Into<String>,
        action: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            label: label.into(),
        }
    }

    pub fn contact_submit() -> Self {
        Self::new("Form", "Submit", "Contact Form")
    }

    /// Click on a service or feature card, labelled with its title
    pub fn card_click(title: Option<&str>) -> Self {
        let label = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(UNKNOWN_LABEL);
        Self::new("Engagement", "Card Click", label)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Destination for tracked events
pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: &AnalyticsEvent);
}

/// Writes events to the console (browser) or stdout (server)
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl AnalyticsSink for ConsoleSink {
    fn track(&self, event: &AnalyticsEvent) {
        leptos::logging::log!("Event tracked: {}", event.to_json());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink(Mutex<Vec<AnalyticsEvent>>);

    impl AnalyticsSink for RecordingSink {
        fn track(&self, event: &AnalyticsEvent) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn test_contact_submit_event() {
        let event = AnalyticsEvent::contact_submit();
        assert_eq!(event.category, "Form");
        assert_eq!(event.action, "Submit");
        assert_eq!(event.label, "Contact Form");
    }

    #[test]
    fn test_card_click_label() {
        assert_eq!(
            AnalyticsEvent::card_click(Some(" Home Repair ")).label,
            "Home Repair"
        );
        assert_eq!(AnalyticsEvent::card_click(Some("")).label, "Unknown");
        assert_eq!(AnalyticsEvent::card_click(None).label, "Unknown");
    }

    #[test]
    fn test_json_payload() {
        let json = AnalyticsEvent::new("A", "B", "C").to_json();
        assert_eq!(json, r#"{"category":"A","action":"B","label":"C"}"#);
    }

    #[test]
    fn test_sink_receives_events() {
        let sink = RecordingSink::default();
        sink.track(&AnalyticsEvent::contact_submit());
        sink.track(&AnalyticsEvent::card_click(Some("Tutoring")));

        let events = sink.0.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].label, "Tutoring");
    }

    #[test]
    fn test_console_sink_does_not_panic() {
        ConsoleSink.track(&AnalyticsEvent::contact_submit());
    }
}
