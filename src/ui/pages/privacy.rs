use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::common::{ButtonLink, ButtonVariant};

const SECTIONS: &[(&str, &str)] = &[
    (
        "What we collect",
        "Only what you type into the contact form: your name, email address, an optional phone number and your message.",
    ),
    (
        "How we use it",
        "To reply to your request and match you with a helper. We never sell your details or use them for advertising.",
    ),
    (
        "How long we keep it",
        "Messages are deleted twelve months after your last request. Ask us at any time and we will remove them sooner.",
    ),
];

/// Static privacy notice linked from the home page
#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <Title text="Privacy - Get Helped"/>
        <main class="section privacy">
            <div class="container">
                <div class="section-header">
                    <h1>"Our Privacy Promise"</h1>
                </div>
                {SECTIONS.iter().map(|&(heading, body)| view! {
                    <div class="feature">
                        <h3>{heading}</h3>
                        <p>{body}</p>
                    </div>
                }).collect_view()}
                <ButtonLink href="/" variant=ButtonVariant::Outline>
                    "Back to home"
                </ButtonLink>
            </div>
        </main>
    }
}
