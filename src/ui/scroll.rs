//! Window scroll tracking and smooth scrolling helpers

use leptos::prelude::*;

use crate::core::scroll::anchor_selector;

/// Track the window's vertical scroll offset.
///
/// Call once per page and hand the signal to every scroll reactor. The
/// listener is removed when the calling component is disposed.
pub fn track_scroll_y() -> ReadSignal<f64> {
    let (scroll_y, set_scroll_y) = signal(0.0_f64);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        let read_offset = move || {
            if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                set_scroll_y.set(y);
            }
        };

        // Pick up the offset the page was restored at
        Effect::new(move |_| read_offset());

        let handle_scroll = window_event_listener(scroll, move |_| read_offset());
        on_cleanup(move || drop(handle_scroll));
    }

    #[cfg(feature = "ssr")]
    let _ = set_scroll_y;

    scroll_y
}

/// Smooth-scroll to an in-page anchor, leaving room for the fixed navbar.
///
/// Default navigation is only suppressed when the target exists.
pub fn scroll_to_anchor(ev: &leptos::ev::MouseEvent, href: &str, navbar_offset: f64) {
    let Some(selector) = anchor_selector(href) else {
        return;
    };

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::scroll::anchor_scroll_top;
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(Some(target)) = document.query_selector(selector) else {
            return;
        };
        let Ok(target) = target.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };

        ev.prevent_default();
        scroll_window_to(anchor_scroll_top(
            f64::from(target.offset_top()),
            navbar_offset,
        ));
    }

    #[cfg(feature = "ssr")]
    let _ = (ev, selector, navbar_offset);
}

/// Smooth-scroll the window back to the top
pub fn scroll_to_top() {
    #[cfg(not(feature = "ssr"))]
    scroll_window_to(0.0);
}

#[cfg(not(feature = "ssr"))]
fn scroll_window_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scroll an element to the middle of the viewport
#[cfg(not(feature = "ssr"))]
pub fn scroll_into_view_centered(element: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
