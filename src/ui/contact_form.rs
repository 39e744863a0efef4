//! Contact form with client-side validation and simulated delivery
//!
//! [`ContactForm`] holds values and errors, [`SubmissionMachine`] decides the
//! lifecycle, and [`SubmissionController`] is the only part that applies the
//! machine's effects to the page.
//!
//! Delivery is simulated and always succeeds, so nothing here sends
//! `SubmissionEvent::Rejected` and the failure banner stays hidden. A real
//! delivery backend would dispatch that event when it refuses a message.

use leptos::html;
use leptos::prelude::*;

use crate::core::{
    AnalyticsEvent, ContactForm, InteractionSettings, SubmissionEffect, SubmissionEvent,
    SubmissionMachine, SubmissionTiming, Ticket,
};
use crate::ui::analytics::use_analytics;
use crate::ui::common::{ErrorMessage, FieldInput, SubmitButton};
use crate::ui::icon::{Icon, icons};
use crate::ui::timer::DelayedAction;

/// Ties the form model, the submission machine and its pending timer together
#[derive(Clone, Copy)]
struct SubmissionController {
    form: RwSignal<ContactForm>,
    machine: RwSignal<SubmissionMachine>,
    timer: StoredValue<DelayedAction, LocalStorage>,
    success_ref: NodeRef<html::Div>,
}

impl SubmissionController {
    fn new(timing: SubmissionTiming) -> Self {
        Self {
            form: RwSignal::new(ContactForm::contact()),
            machine: RwSignal::new(SubmissionMachine::new(timing)),
            timer: StoredValue::new_local(DelayedAction::new()),
            success_ref: NodeRef::new(),
        }
    }

    /// Validate every field, then let the machine decide
    fn submit(&self) {
        let form_valid = self.form.try_update(|form| form.validate()).unwrap_or(false);
        self.dispatch(SubmissionEvent::Submit { form_valid });
    }

    fn dispatch(&self, event: SubmissionEvent) {
        let effects = self
            .machine
            .try_update(|machine| machine.handle(event))
            .unwrap_or_default();
        self.apply(effects);
    }

    fn dispatch_scheduled(&self, ticket: Ticket, event: SubmissionEvent) {
        let effects = self
            .machine
            .try_update(|machine| machine.handle_scheduled(ticket, event))
            .unwrap_or_default();
        self.apply(effects);
    }

    fn apply(&self, effects: Vec<SubmissionEffect>) {
        for effect in effects {
            match effect {
                SubmissionEffect::CancelPending => {
                    self.timer.update_value(|t| t.cancel());
                }
                SubmissionEffect::Schedule {
                    ticket,
                    after,
                    event,
                } => {
                    let this = *self;
                    self.timer.update_value(|t| {
                        t.schedule(after, move || this.dispatch_scheduled(ticket, event));
                    });
                }
                SubmissionEffect::ScrollToSuccess => self.scroll_to_success(),
                SubmissionEffect::ResetFields => self.form.update(|form| form.reset()),
            }
        }
    }

    fn scroll_to_success(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            let success_ref = self.success_ref;
            // Wait until the success panel has been made visible
            set_timeout(
                move || {
                    if let Some(panel) = success_ref.get_untracked() {
                        crate::ui::scroll::scroll_into_view_centered(&panel);
                    }
                },
                std::time::Duration::ZERO,
            );
        }
    }

    fn field_value(&self, name: &'static str) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || {
            form.with(|f| f.field(name).map(|field| field.value.clone()))
                .unwrap_or_default()
        })
    }

    fn field_error(&self, name: &'static str) -> Signal<Option<String>> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.field(name).and_then(|field| field.error_message())))
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let settings = use_context::<InteractionSettings>().unwrap_or_default();
    let analytics = use_analytics();
    let controller = SubmissionController::new(SubmissionTiming::from(&settings));

    let machine = controller.machine;
    let view_state = Memo::new(move |_| machine.with(|m| m.state().view()));
    let fields = controller.form.with_untracked(|form| form.fields().to_vec());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        analytics.track(AnalyticsEvent::contact_submit());
        controller.submit();
    };

    let submit_disabled = Signal::derive(move || view_state.get().submit_disabled);
    let success_ref = controller.success_ref;

    view! {
        <section id="contact" class="section contact">
            <div class="container">
                <div class="section-header">
                    <h2>"Get In Touch"</h2>
                    <p>"Tell us what you need and we will get back to you within one business day."</p>
                </div>

                <form
                    id="contactForm"
                    class="contact-form"
                    novalidate=true
                    style:display=move || if view_state.get().form_visible { "block" } else { "none" }
                    on:submit=on_submit
                >
                    {fields.into_iter().map(|field| {
                        let name = field.name;
                        let form = controller.form;
                        let value = controller.field_value(name);
                        let error = controller.field_error(name);
                        view! {
                            <FieldInput
                                name=name
                                label=field.label
                                kind=field.kind
                                required=field.required
                                placeholder=field.placeholder
                                value=value
                                error=error
                                on_input=Callback::new(move |value: String| {
                                    form.update(|f| f.on_input(name, value));
                                })
                                on_blur=Callback::new(move |_: ()| {
                                    form.update(|f| {
                                        f.validate_field(name);
                                    });
                                })
                                disabled=submit_disabled
                            />
                        }
                    }).collect_view()}

                    <ErrorMessage error=Signal::derive(move || view_state.get().failure) />

                    <SubmitButton
                        label=Signal::derive(move || view_state.get().submit_label)
                        disabled=submit_disabled
                    />
                </form>

                <div
                    id="successMessage"
                    node_ref=success_ref
                    class="success-message"
                    style:display=move || if view_state.get().success_visible { "block" } else { "none" }
                    role="status"
                >
                    <Icon name=icons::CHECK class="icon-success"/>
                    <h3>"Thank you!"</h3>
                    <p>"Your message has been sent. We will be in touch shortly."</p>
                </div>
            </div>
        </section>
    }
}
