//! Contact form submission lifecycle
//!
//! A small state machine:
//!
//! ```text
//! Idle ──submit(valid)──▶ Submitting ──delivered──▶ Success ──reset elapsed──▶ Idle
//!                            │
//!                            └──rejected──▶ Failed ──submit(valid)──▶ Submitting
//! ```
//!
//! Delivery is simulated: entering `Submitting` schedules a `Delivered` event
//! after the configured delay. Every scheduled event carries a [`Ticket`]; each
//! transition cancels the pending one, and callbacks holding an older ticket
//! are ignored when they fire.
//!
//! What the page shows for a state is computed by [`SubmissionState::view`];
//! the effects returned by the machine cover only the imperative work
//! (timers, scrolling, clearing fields).

use std::time::Duration;

use super::settings::InteractionSettings;

/// Identifies one scheduled callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed {
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    /// Submit pressed; carries the form validator's verdict
    Submit { form_valid: bool },
    /// Delivery finished
    Delivered,
    /// Delivery refused
    Rejected { reason: String },
    /// The success message has been shown long enough
    ResetElapsed,
}

/// Imperative work the page must perform after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEffect {
    /// Drop the pending timer, if any
    CancelPending,
    /// Feed `event` back into the machine after `after`
    Schedule {
        ticket: Ticket,
        after: Duration,
        event: SubmissionEvent,
    },
    ScrollToSuccess,
    ResetFields,
}

/// Label shown on the submit control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitLabel {
    Send,
    Sending,
}

impl SubmitLabel {
    pub fn text(&self) -> &'static str {
        match self {
            SubmitLabel::Send => "Send Message",
            SubmitLabel::Sending => "Sending...",
        }
    }
}

/// Render state derived from a [`SubmissionState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionView {
    pub form_visible: bool,
    pub success_visible: bool,
    pub submit_disabled: bool,
    pub submit_label: SubmitLabel,
    pub failure: Option<String>,
}

impl SubmissionState {
    /// Next state for `event`, or `None` when the event does not apply.
    pub fn next(&self, event: &SubmissionEvent) -> Option<SubmissionState> {
        use SubmissionEvent as E;
        use SubmissionState as S;

        match (self, event) {
            (S::Idle | S::Failed { .. }, E::Submit { form_valid: true }) => Some(S::Submitting),
            (S::Submitting, E::Delivered) => Some(S::Success),
            (S::Submitting, E::Rejected { reason }) => Some(S::Failed {
                reason: reason.clone(),
            }),
            (S::Success, E::ResetElapsed) => Some(S::Idle),
            _ => None,
        }
    }

    pub fn view(&self) -> SubmissionView {
        let submitting = matches!(self, SubmissionState::Submitting);
        SubmissionView {
            form_visible: !matches!(self, SubmissionState::Success),
            success_visible: matches!(self, SubmissionState::Success),
            submit_disabled: submitting,
            submit_label: if submitting {
                SubmitLabel::Sending
            } else {
                SubmitLabel::Send
            },
            failure: match self {
                SubmissionState::Failed { reason } => Some(reason.clone()),
                _ => None,
            },
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionState::Idle)
    }
}

/// Delays applied by the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTiming {
    pub delivery: Duration,
    pub reset: Duration,
}

impl From<&InteractionSettings> for SubmissionTiming {
    fn from(settings: &InteractionSettings) -> Self {
        Self {
            delivery: settings.submit_delay(),
            reset: settings.success_reset(),
        }
    }
}

impl Default for SubmissionTiming {
    fn default() -> Self {
        Self::from(&InteractionSettings::default())
    }
}

/// Owns the submission state and the identity of the pending timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionMachine {
    state: SubmissionState,
    timing: SubmissionTiming,
    next_ticket: u64,
    pending: Option<Ticket>,
}

impl Default for SubmissionMachine {
    fn default() -> Self {
        Self::new(SubmissionTiming::default())
    }
}

impl SubmissionMachine {
    pub fn new(timing: SubmissionTiming) -> Self {
        Self {
            state: SubmissionState::Idle,
            timing,
            next_ticket: 0,
            pending: None,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    /// Apply a user-originated event
    pub fn handle(&mut self, event: SubmissionEvent) -> Vec<SubmissionEffect> {
        let Some(next) = self.state.next(&event) else {
            return Vec::new();
        };
        self.enter(next)
    }

    /// Apply an event delivered by a scheduled callback.
    ///
    /// Callbacks that were superseded by a later transition are ignored.
    pub fn handle_scheduled(
        &mut self,
        ticket: Ticket,
        event: SubmissionEvent,
    ) -> Vec<SubmissionEffect> {
        if self.pending != Some(ticket) {
            return Vec::new();
        }
        self.pending = None;
        self.handle(event)
    }

    fn enter(&mut self, next: SubmissionState) -> Vec<SubmissionEffect> {
        let mut effects = vec![SubmissionEffect::CancelPending];
        self.pending = None;

        match &next {
            SubmissionState::Submitting => {
                effects.push(self.schedule(self.timing.delivery, SubmissionEvent::Delivered));
            }
            SubmissionState::Success => {
                effects.push(SubmissionEffect::ScrollToSuccess);
                effects.push(self.schedule(self.timing.reset, SubmissionEvent::ResetElapsed));
            }
            SubmissionState::Idle => {
                effects.push(SubmissionEffect::ResetFields);
            }
            SubmissionState::Failed { .. } => {}
        }

        self.state = next;
        effects
    }

    fn schedule(&mut self, after: Duration, event: SubmissionEvent) -> SubmissionEffect {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);
        SubmissionEffect::Schedule {
            ticket,
            after,
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(effects: &[SubmissionEffect]) -> Option<(Ticket, SubmissionEvent)> {
        effects.iter().find_map(|e| match e {
            SubmissionEffect::Schedule { ticket, event, .. } => Some((*ticket, event.clone())),
            _ => None,
        })
    }

    #[test]
    fn test_invalid_submit_stays_idle() {
        let mut machine = SubmissionMachine::default();
        let effects = machine.handle(SubmissionEvent::Submit { form_valid: false });

        assert!(effects.is_empty());
        assert_eq!(machine.state(), &SubmissionState::Idle);
        assert!(machine.pending().is_none());
    }

    #[test]
    fn test_valid_submit_schedules_delivery() {
        let mut machine = SubmissionMachine::default();
        let effects = machine.handle(SubmissionEvent::Submit { form_valid: true });

        assert_eq!(machine.state(), &SubmissionState::Submitting);
        assert_eq!(effects[0], SubmissionEffect::CancelPending);
        match &effects[1] {
            SubmissionEffect::Schedule { after, event, .. } => {
                assert_eq!(*after, Duration::from_millis(2000));
                assert_eq!(event, &SubmissionEvent::Delivered);
            }
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn test_full_lifecycle() {
        let mut machine = SubmissionMachine::default();

        let effects = machine.handle(SubmissionEvent::Submit { form_valid: true });
        let (ticket, event) = scheduled(&effects).unwrap();

        let effects = machine.handle_scheduled(ticket, event);
        assert_eq!(machine.state(), &SubmissionState::Success);
        assert!(effects.contains(&SubmissionEffect::ScrollToSuccess));
        let (ticket, event) = scheduled(&effects).unwrap();
        assert_eq!(event, SubmissionEvent::ResetElapsed);

        let effects = machine.handle_scheduled(ticket, event);
        assert_eq!(machine.state(), &SubmissionState::Idle);
        assert!(effects.contains(&SubmissionEffect::ResetFields));
        assert!(machine.pending().is_none());
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut machine = SubmissionMachine::default();
        let effects = machine.handle(SubmissionEvent::Submit { form_valid: true });
        let (stale, _) = scheduled(&effects).unwrap();

        machine.handle(SubmissionEvent::Rejected {
            reason: "offline".into(),
        });
        let effects = machine.handle_scheduled(stale, SubmissionEvent::Delivered);

        assert!(effects.is_empty());
        assert!(matches!(machine.state(), SubmissionState::Failed { .. }));
    }

    #[test]
    fn test_resubmit_while_submitting_is_ignored() {
        let mut machine = SubmissionMachine::default();
        let first = machine.handle(SubmissionEvent::Submit { form_valid: true });
        let (ticket, _) = scheduled(&first).unwrap();

        assert!(
            machine
                .handle(SubmissionEvent::Submit { form_valid: true })
                .is_empty()
        );
        assert_eq!(machine.pending(), Some(ticket));
    }

    #[test]
    fn test_each_schedule_gets_new_ticket() {
        let mut machine = SubmissionMachine::default();
        let first = scheduled(&machine.handle(SubmissionEvent::Submit { form_valid: true }))
            .unwrap()
            .0;
        let second = scheduled(&machine.handle(SubmissionEvent::Delivered))
            .unwrap()
            .0;
        assert_ne!(first, second);
    }

    #[test]
    fn test_failed_can_be_retried() {
        let mut machine = SubmissionMachine::default();
        machine.handle(SubmissionEvent::Submit { form_valid: true });
        machine.handle(SubmissionEvent::Rejected {
            reason: "Server unavailable".into(),
        });

        let view = machine.state().view();
        assert_eq!(view.failure.as_deref(), Some("Server unavailable"));
        assert!(!view.submit_disabled);

        machine.handle(SubmissionEvent::Submit { form_valid: true });
        assert_eq!(machine.state(), &SubmissionState::Submitting);
    }

    #[test]
    fn test_out_of_order_events_do_nothing() {
        let mut machine = SubmissionMachine::default();
        assert!(machine.handle(SubmissionEvent::Delivered).is_empty());
        assert!(machine.handle(SubmissionEvent::ResetElapsed).is_empty());
        assert_eq!(machine.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_views() {
        let idle = SubmissionState::Idle.view();
        assert!(idle.form_visible && !idle.success_visible && !idle.submit_disabled);
        assert_eq!(idle.submit_label.text(), "Send Message");

        let sending = SubmissionState::Submitting.view();
        assert!(sending.form_visible && sending.submit_disabled);
        assert_eq!(sending.submit_label, SubmitLabel::Sending);

        let success = SubmissionState::Success.view();
        assert!(!success.form_visible && success.success_visible);
    }
}
