//! Home page
//!
//! Single scrolling page:
//! - Fixed navbar with mobile menu
//! - Hero with calls to action
//! - Services and features cards (tracked clicks, reveal on scroll)
//! - About block with lazily loaded image and stats
//! - FAQ accordion
//! - Contact form
//! - Footer and back-to-top control

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::{AnalyticsEvent, InteractionSettings};
use crate::ui::analytics::use_analytics;
use crate::ui::back_to_top::BackToTop;
use crate::ui::common::{ButtonLink, ButtonVariant};
use crate::ui::contact_form::ContactSection;
use crate::ui::faq::FaqSection;
use crate::ui::navbar::Navbar;
use crate::ui::scroll::{scroll_to_anchor, track_scroll_y};
use crate::ui::viewport::ViewportEffects;

const SERVICES: &[(&str, &str)] = &[
    (
        "Home Repair",
        "Leaky taps, squeaky doors and flat-pack furniture handled by people who do it every day.",
    ),
    (
        "Moving Help",
        "Packing, lifting and transport for apartments and family homes, on your schedule.",
    ),
    (
        "Tech Support",
        "Wi-Fi, printers, new phones and smart devices set up and explained in plain language.",
    ),
    (
        "Tutoring",
        "Patient one-to-one sessions in maths, languages and science for every school level.",
    ),
];

const FEATURES: &[(&str, &str)] = &[
    ("Vetted Helpers", "Background-checked and reviewed after every job."),
    ("Upfront Quotes", "Know the price before anything starts."),
    ("Fast Matching", "Most requests are matched within one business day."),
];

const STATS: &[(&str, &str)] = &[
    ("2,500+", "Jobs completed"),
    ("4.9/5", "Average rating"),
    ("24h", "Typical response"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let scroll_y = track_scroll_y();

    Effect::new(move |_| {
        leptos::logging::log!("Get Helped website initialized successfully!");
    });

    view! {
        <Title text="Get Helped - Local help, when you need it"/>
        <Meta
            name="description"
            content="Get Helped connects you with vetted local helpers for home repair, moving, tech support and tutoring."
        />

        <Navbar scroll_y=scroll_y />

        <main>
            <section id="home" class="hero">
                <div class="container hero-content">
                    <h1>"Local help, when you need it"</h1>
                    <p class="hero-subtitle">
                        "From fixing a shelf to moving house, we match you with trusted helpers in your neighbourhood."
                    </p>
                    <div class="hero-buttons">
                        <ButtonLink href="#contact">"Get Help Now"</ButtonLink>
                        <ButtonLink href="#services" variant=ButtonVariant::Secondary>
                            "Our Services"
                        </ButtonLink>
                    </div>
                </div>
            </section>

            <section id="services" class="section services">
                <div class="container">
                    <div class="section-header">
                        <h2>"What We Help With"</h2>
                        <p>"Pick a service or just tell us what is going on."</p>
                    </div>
                    <div class="services-grid">
                        {SERVICES.iter().map(|&(title, description)| view! {
                            <Card card_class="service-card" title=title description=description />
                        }).collect_view()}
                    </div>
                </div>
            </section>

            <section id="about" class="section about">
                <div class="container">
                    <div class="section-header">
                        <h2>"Why Get Helped?"</h2>
                        <p>"A small team that cares about doing the job properly."</p>
                    </div>
                    <div class="features-grid">
                        {FEATURES.iter().map(|&(title, description)| view! {
                            <Card card_class="feature-card" title=title description=description />
                        }).collect_view()}
                    </div>

                    <div class="about-content">
                        <img
                            class="about-image lazy"
                            src="/images/placeholder.svg"
                            data-src="/images/team.svg"
                            alt="The Get Helped team"
                            width="480"
                            height="320"
                        />
                        <div class="about-text">
                            <div class="feature">
                                <h3>"Neighbours helping neighbours"</h3>
                                <p>
                                    "We started Get Helped to make everyday jobs less stressful. Every helper lives locally and is paid fairly."
                                </p>
                            </div>
                            <div class="stats">
                                {STATS.iter().map(|&(value, label)| view! {
                                    <div class="stat">
                                        <span class="stat-value">{value}</span>
                                        <span class="stat-label">{label}</span>
                                    </div>
                                }).collect_view()}
                            </div>
                            <ButtonLink href="/privacy" variant=ButtonVariant::Outline>
                                "Read our privacy promise"
                            </ButtonLink>
                        </div>
                    </div>
                </div>
            </section>

            <FaqSection />

            <ContactSection />
        </main>

        <Footer />

        <BackToTop scroll_y=scroll_y />

        <ViewportEffects />
    }
}

/// Service or feature card; clicks are reported to analytics with the card title
#[component]
fn Card(
    card_class: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    let analytics = use_analytics();

    view! {
        <div
            class=card_class
            on:click=move |_| analytics.track(AnalyticsEvent::card_click(Some(title)))
        >
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let anchor_offset = use_context::<InteractionSettings>()
        .unwrap_or_default()
        .anchor_offset;

    view! {
        <footer class="footer">
            <div class="container footer-content">
                <p>"© 2025 Get Helped. All rights reserved."</p>
                <nav class="footer-links">
                    <a href="/privacy">"Privacy"</a>
                    <a href="#contact" on:click=move |ev| scroll_to_anchor(&ev, "#contact", anchor_offset)>
                        "Contact"
                    </a>
                </nav>
            </div>
        </footer>
    }
}
