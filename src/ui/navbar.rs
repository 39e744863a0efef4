//! Fixed navigation bar with a collapsible mobile menu
//!
//! The hamburger and the menu panel share one [`MenuState`]. The menu closes
//! when a link is followed or when a click lands outside both of them.

use leptos::html;
use leptos::prelude::*;

use crate::core::{InteractionSettings, MenuEvent, MenuState, NavbarStyle};
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::scroll_to_anchor;

/// In-page navigation targets
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#services", "Services"),
    ("#about", "About"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

#[component]
pub fn Navbar(
    /// Window scroll offset
    scroll_y: ReadSignal<f64>,
) -> impl IntoView {
    let settings = use_context::<InteractionSettings>().unwrap_or_default();
    let threshold = settings.navbar_scroll_threshold;
    let anchor_offset = settings.anchor_offset;

    let menu = RwSignal::new(MenuState::Closed);
    let hamburger_ref = NodeRef::<html::Button>::new();
    let menu_ref = NodeRef::<html::Ul>::new();

    let navbar_style = Memo::new(move |_| NavbarStyle::for_scroll(scroll_y.get(), threshold));
    let send = move |event: MenuEvent| menu.update(|state| *state = state.next(event));

    // Removed with the navbar so no click reaches disposed signals
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::menu::outside_click_event;
        use leptos::ev::click;
        use wasm_bindgen::JsCast;

        let handle_click = window_event_listener(click, move |ev| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
                return;
            };
            let inside = |node: Option<web_sys::Element>| {
                node.is_some_and(|n| n.contains(Some(&target)))
            };
            let inside_controls = inside(hamburger_ref.get_untracked().map(Into::into))
                || inside(menu_ref.get_untracked().map(Into::into));
            if let Some(event) = outside_click_event(menu.try_get_untracked(), inside_controls) {
                send(event);
            }
        });

        on_cleanup(move || drop(handle_click));
    }

    view! {
        <nav class="navbar" style=move || navbar_style.get().inline_style()>
            <div class="nav-container">
                <a href="#home" class="nav-logo" on:click=move |ev| scroll_to_anchor(&ev, "#home", anchor_offset)>
                    "Get Helped"
                </a>

                <ul
                    node_ref=menu_ref
                    class="nav-menu"
                    class:active=move || menu.get().is_open()
                >
                    {NAV_LINKS.iter().map(|&(href, label)| view! {
                        <li class="nav-item">
                            <a
                                href=href
                                class="nav-link"
                                on:click=move |ev| {
                                    send(MenuEvent::LinkClicked);
                                    scroll_to_anchor(&ev, href, anchor_offset);
                                }
                            >
                                {label}
                            </a>
                        </li>
                    }).collect_view()}
                </ul>

                <button
                    node_ref=hamburger_ref
                    class="hamburger"
                    class:active=move || menu.get().is_open()
                    on:click=move |_| send(MenuEvent::Toggle)
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                >
                    {move || if menu.get().is_open() {
                        view! { <Icon name=icons::X class="icon-nav"/> }
                    } else {
                        view! { <Icon name=icons::MENU class="icon-nav"/> }
                    }}
                </button>
            </div>
        </nav>
    }
}
