//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::common::ButtonLink;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found - Get Helped"/>
        <div class="not-found">
            <div class="not-found-content">
                <div class="not-found-icon">
                    <Icon name=icons::ALERT_CIRCLE class="icon-large" />
                </div>

                <h1>"404"</h1>
                <h2>"Page Not Found"</h2>
                <p>"The page you're looking for doesn't exist or has been moved."</p>

                <ButtonLink href="/">"Back to Get Helped"</ButtonLink>
            </div>

            <p class="not-found-footer">"© 2025 Get Helped"</p>
        </div>
    }
}
