use leptos::prelude::*;

use crate::core::{BackToTopVisibility, InteractionSettings};
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::scroll_to_top;

/// Floating button that appears once the page is scrolled down
#[component]
pub fn BackToTop(
    /// Window scroll offset
    scroll_y: ReadSignal<f64>,
) -> impl IntoView {
    let threshold = use_context::<InteractionSettings>()
        .unwrap_or_default()
        .back_to_top_threshold;
    let visibility = Memo::new(move |_| BackToTopVisibility::for_scroll(scroll_y.get(), threshold));

    view! {
        <button
            class="back-to-top"
            style=move || visibility.get().inline_style()
            on:click=move |_| scroll_to_top()
            aria-label="Back to top"
        >
            <Icon name=icons::ARROW_UP class="icon-nav"/>
        </button>
    }
}
