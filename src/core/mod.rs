//! Page interaction rules and state, independent of the browser

pub mod accordion;
pub mod analytics;
#[cfg(feature = "ssr")]
pub mod config;
pub mod form;
pub mod links;
pub mod menu;
pub mod scroll;
pub mod settings;
pub mod submission;
pub mod validation;
pub mod viewport;
#[cfg(test)]
mod tests;

pub use accordion::{Accordion, FaqItemState};
pub use analytics::{AnalyticsEvent, AnalyticsSink, ConsoleSink};
pub use form::{ContactForm, FormField};
pub use links::LinkLoading;
pub use menu::{MenuEvent, MenuState};
pub use scroll::{BackToTopVisibility, NavbarStyle, ScrollPresentation};
pub use settings::InteractionSettings;
pub use submission::{
    SubmissionEffect, SubmissionEvent, SubmissionMachine, SubmissionState, SubmissionTiming,
    SubmissionView, SubmitLabel, Ticket,
};
pub use validation::{FieldError, FieldKind};
pub use viewport::{Observation, OneShotObserver};
