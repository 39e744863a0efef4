//! FAQ accordion section

use leptos::prelude::*;

use crate::core::Accordion;
use crate::ui::icon::{Icon, icons};

/// Questions and answers shown on the page
pub const FAQ_ITEMS: &[(&str, &str)] = &[
    (
        "How quickly can someone help me?",
        "Most requests are matched with a helper within one business day. Urgent home repairs are usually scheduled the same day.",
    ),
    (
        "Are your helpers vetted?",
        "Every helper passes a background check and an interview, and we collect reviews after each job.",
    ),
    (
        "How much does it cost?",
        "Pricing depends on the service. You always get a written quote before any work starts, and there are no call-out fees.",
    ),
    (
        "Which areas do you cover?",
        "We currently serve the greater metro area and the surrounding suburbs. Send us a message if you are unsure.",
    ),
    (
        "Can I cancel or reschedule?",
        "Yes. Let us know at least 24 hours ahead and there is no charge for cancelling or moving an appointment.",
    ),
];

#[component]
pub fn FaqSection() -> impl IntoView {
    let accordion = RwSignal::new(Accordion::new(FAQ_ITEMS.len()));

    view! {
        <section id="faq" class="section faq">
            <div class="container">
                <div class="section-header">
                    <h2>"Frequently Asked Questions"</h2>
                    <p>"Quick answers to the questions we hear most."</p>
                </div>

                <div class="faq-list">
                    {FAQ_ITEMS.iter().enumerate().map(|(index, &(question, answer))| {
                        let expanded = move || accordion.with(|acc| acc.is_expanded(index));
                        view! {
                            <div class="faq-item" class:active=expanded>
                                <h4
                                    style="cursor: pointer;"
                                    role="button"
                                    aria-expanded=move || expanded().to_string()
                                    on:click=move |_| {
                                        accordion.update(|acc| {
                                            acc.toggle(index);
                                        });
                                    }
                                >
                                    <span>{question}</span>
                                    <Icon name=icons::CHEVRON_DOWN class="faq-chevron"/>
                                </h4>
                                <p style:display=move || if expanded() { "block" } else { "none" }>
                                    {answer}
                                </p>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
