#[cfg(test)]
mod tests {
    use crate::core::{
        Accordion, ContactForm, FieldError, SubmissionEffect, SubmissionEvent, SubmissionMachine,
        SubmissionState, Ticket,
    };
    use std::time::Duration;

    /// Drives the form and the machine the way the page does, with a manual clock
    struct Harness {
        form: ContactForm,
        machine: SubmissionMachine,
        timer: Option<(Ticket, Duration, SubmissionEvent)>,
        scrolled_to_success: bool,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                form: ContactForm::contact(),
                machine: SubmissionMachine::default(),
                timer: None,
                scrolled_to_success: false,
            }
        }

        fn submit(&mut self) {
            let form_valid = self.form.validate();
            let effects = self.machine.handle(SubmissionEvent::Submit { form_valid });
            self.apply(effects);
        }

        fn fire_timer(&mut self) -> Duration {
            let (ticket, after, event) = self.timer.take().expect("a pending timer");
            let effects = self.machine.handle_scheduled(ticket, event);
            self.apply(effects);
            after
        }

        fn apply(&mut self, effects: Vec<SubmissionEffect>) {
            for effect in effects {
                match effect {
                    SubmissionEffect::CancelPending => self.timer = None,
                    SubmissionEffect::Schedule {
                        ticket,
                        after,
                        event,
                    } => self.timer = Some((ticket, after, event)),
                    SubmissionEffect::ScrollToSuccess => self.scrolled_to_success = true,
                    SubmissionEffect::ResetFields => self.form.reset(),
                }
            }
        }

        fn fill(&mut self) {
            self.form.set_value("name", "Jane Doe");
            self.form.set_value("email", "a@b.com");
            self.form.set_value("phone", "123-456-7890");
            self.form.set_value("message", "Please call me back");
        }
    }

    #[test]
    fn test_valid_submission_round_trips_to_idle() {
        let mut page = Harness::new();
        page.fill();

        page.submit();
        assert_eq!(page.machine.state(), &SubmissionState::Submitting);
        let view = page.machine.state().view();
        assert!(view.submit_disabled);
        assert_eq!(view.submit_label.text(), "Sending...");

        assert_eq!(page.fire_timer(), Duration::from_millis(2000));
        assert_eq!(page.machine.state(), &SubmissionState::Success);
        assert!(page.scrolled_to_success);
        assert!(!page.machine.state().view().form_visible);

        assert_eq!(page.fire_timer(), Duration::from_millis(5000));
        assert_eq!(page.machine.state(), &SubmissionState::Idle);
        let view = page.machine.state().view();
        assert!(view.form_visible);
        assert!(!view.success_visible);
        assert!(!view.submit_disabled);
        assert!(page.form.is_blank());
        assert!(page.timer.is_none());
    }

    #[test]
    fn test_one_empty_required_field_stays_idle() {
        let mut page = Harness::new();
        page.fill();
        page.form.set_value("message", "  ");

        page.submit();

        assert_eq!(page.machine.state(), &SubmissionState::Idle);
        assert!(page.timer.is_none());
        assert_eq!(page.form.error_count(), 1);
        assert_eq!(
            page.form.field("message").unwrap().error,
            Some(FieldError::Required)
        );
        for name in ["name", "email", "phone"] {
            assert!(!page.form.field(name).unwrap().has_error(), "{name}");
        }
    }

    #[test]
    fn test_invalid_email_blocks_submission() {
        let mut page = Harness::new();
        page.fill();
        page.form.set_value("email", "abc");

        page.submit();
        assert!(page.machine.state().is_idle());
        assert_eq!(
            page.form.field("email").unwrap().error_message().as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_fix_and_resubmit_after_errors() {
        let mut page = Harness::new();
        page.submit();
        assert_eq!(page.form.error_count(), 3);

        page.fill();
        page.submit();
        assert_eq!(page.form.error_count(), 0);
        assert_eq!(page.machine.state(), &SubmissionState::Submitting);
    }

    #[test]
    fn test_rejection_cancels_delivery_timer() {
        let mut page = Harness::new();
        page.fill();
        page.submit();
        assert!(page.timer.is_some());

        let effects = page.machine.handle(SubmissionEvent::Rejected {
            reason: "Could not reach the server".into(),
        });
        page.apply(effects);

        assert!(page.timer.is_none());
        assert!(!page.form.is_blank());
        assert_eq!(
            page.machine.state().view().failure.as_deref(),
            Some("Could not reach the server")
        );
    }

    #[test]
    fn test_accordion_single_open() {
        let mut faq = Accordion::new(5);
        faq.toggle(0);
        faq.toggle(3);

        assert!(!faq.is_expanded(0));
        assert!(faq.is_expanded(3));
        assert_eq!((0..5).filter(|i| faq.is_expanded(*i)).count(), 1);
    }
}
