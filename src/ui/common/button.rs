use crate::core::links::shows_loading;
use crate::core::{InteractionSettings, LinkLoading, SubmitLabel};
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::scroll_to_anchor;
use crate::ui::timer::DelayedAction;
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Outline => "btn btn-outline",
        }
    }
}

/// Contact form submit button with a loading state
#[component]
pub fn SubmitButton(
    /// Label to show; `Sending` adds a spinner
    label: Signal<SubmitLabel>,
    /// Whether the button is disabled
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="btn btn-primary btn-block"
            disabled=move || disabled.get()
            aria-busy=move || (label.get() == SubmitLabel::Sending).to_string()
        >
            {move || (label.get() == SubmitLabel::Sending).then(|| view! {
                <Icon name=icons::LOADER class="icon-spin"/>
            })}
            <span>{move || label.get().text()}</span>
        </button>
    }
}

/// Anchor styled as a button.
///
/// In-page anchors scroll smoothly. Internal links show a "Loading..." label while the browser navigates and
/// revert after a delay in case navigation never happens.
#[component]
pub fn ButtonLink(
    href: &'static str,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    children: Children,
) -> impl IntoView {
    let settings = use_context::<InteractionSettings>().unwrap_or_default();
    let reset_after = settings.link_loading_reset();
    let anchor_offset = settings.anchor_offset;
    let loading = RwSignal::new(LinkLoading::Idle);
    let reset = StoredValue::new_local(DelayedAction::new());

    let on_click = move |ev: leptos::ev::MouseEvent| {
        scroll_to_anchor(&ev, href, anchor_offset);
        if !shows_loading(href, &page_host()) {
            return;
        }
        loading.set(LinkLoading::Loading);
        reset.update_value(|timer| {
            timer.schedule(reset_after, move || loading.set(LinkLoading::Idle));
        });
    };

    let content = children();

    view! {
        <a href=href class=variant.class() on:click=on_click>
            <span style:display=move || if loading.get().is_loading() { "none" } else { "inline" }>
                {content}
            </span>
            {move || loading.get().label().map(|text| view! {
                <span class="btn-loading">
                    <Icon name=icons::LOADER class="icon-spin"/>
                    {text}
                </span>
            })}
        </a>
    }
}

fn page_host() -> String {
    #[cfg(not(feature = "ssr"))]
    {
        web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default()
    }
    #[cfg(feature = "ssr")]
    {
        String::new()
    }
}
