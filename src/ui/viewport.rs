//! Viewport observers: reveal-on-scroll animations and lazy images
//!
//! Both attach an `IntersectionObserver` once the page has hydrated, act on
//! the first intersection of each element and then unobserve it. Observers
//! are disconnected when the component is disposed.

use leptos::prelude::*;

/// Attribute holding the observer key of a watched element
#[cfg(not(feature = "ssr"))]
const REVEAL_KEY_ATTR: &str = "data-reveal-key";
#[cfg(not(feature = "ssr"))]
const LAZY_KEY_ATTR: &str = "data-lazy-key";

/// Attaches the reveal and lazy-image observers. Renders nothing.
///
/// Place it after the content it observes.
#[component]
pub fn ViewportEffects() -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::InteractionSettings;
        use crate::core::viewport::{
            LAZY_CLASS, LAZY_IMAGE_SELECTOR, REVEAL_ANIMATION, REVEAL_INITIAL_OPACITY,
            REVEAL_SELECTOR, lazy_source,
        };
        use wasm_bindgen::{JsCast, JsValue};

        let settings = use_context::<InteractionSettings>().unwrap_or_default();
        let watches = StoredValue::new_local(Vec::<Watch>::new());

        on_cleanup(move || {
            watches.try_update_value(|list| list.clear());
        });

        Effect::new(move |_| {
            let reveal_options = web_sys::IntersectionObserverInit::new();
            reveal_options.set_threshold(&JsValue::from_f64(settings.reveal_threshold));
            reveal_options.set_root_margin(&settings.reveal_root_margin);

            match observe_once(
                REVEAL_SELECTOR,
                REVEAL_KEY_ATTR,
                &reveal_options,
                |element| set_style(element, "opacity", REVEAL_INITIAL_OPACITY),
                |element| set_style(element, "animation", REVEAL_ANIMATION),
            ) {
                Some(watch) => watches.update_value(|list| list.push(watch)),
                None => leptos::logging::warn!("reveal animations unavailable"),
            }

            let lazy_options = web_sys::IntersectionObserverInit::new();
            // Browsers without IntersectionObserver keep the placeholder source
            let lazy = observe_once(
                LAZY_IMAGE_SELECTOR,
                LAZY_KEY_ATTR,
                &lazy_options,
                |_| {},
                |element| {
                    let Some(image) = element.dyn_ref::<web_sys::HtmlImageElement>() else {
                        return;
                    };
                    if let Some(src) = lazy_source(image.get_attribute("data-src")) {
                        image.set_src(&src);
                    }
                    let _ = image.class_list().remove_1(LAZY_CLASS);
                },
            );
            if let Some(watch) = lazy {
                watches.update_value(|list| list.push(watch));
            }
        });
    }

    view! { <div class="hidden" aria-hidden="true"></div> }
}

/// A live observer and the callback it invokes; dropping it disconnects
#[cfg(not(feature = "ssr"))]
struct Watch {
    observer: web_sys::IntersectionObserver,
    _callback: wasm_bindgen::closure::Closure<
        dyn FnMut(js_sys::Array, web_sys::IntersectionObserver),
    >,
}

#[cfg(not(feature = "ssr"))]
impl Drop for Watch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(not(feature = "ssr"))]
fn set_style(element: &web_sys::Element, property: &str, value: &str) {
    use wasm_bindgen::JsCast;

    if let Some(element) = element.dyn_ref::<web_sys::HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

/// Observe every element matching `selector` and call `on_first` the first
/// time each one intersects the viewport.
///
/// Returns `None` when the document or the observer is unavailable.
#[cfg(not(feature = "ssr"))]
fn observe_once(
    selector: &str,
    key_attr: &'static str,
    options: &web_sys::IntersectionObserverInit,
    prepare: impl Fn(&web_sys::Element),
    on_first: impl Fn(&web_sys::Element) + 'static,
) -> Option<Watch> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::core::{Observation, OneShotObserver};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let document = web_sys::window()?.document()?;
    let nodes = document.query_selector_all(selector).ok()?;
    let tracker = Rc::new(RefCell::new(OneShotObserver::<u32>::new()));

    let callback_tracker = Rc::clone(&tracker);
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(key) = target
                    .get_attribute(key_attr)
                    .and_then(|k| k.parse::<u32>().ok())
                else {
                    continue;
                };

                let observation = callback_tracker
                    .borrow_mut()
                    .report(&key, entry.is_intersecting());
                if observation == Observation::Fire {
                    on_first(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        options,
    )
    .ok()?;

    for index in 0..nodes.length() {
        let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        if element.set_attribute(key_attr, &index.to_string()).is_err() {
            continue;
        }
        tracker.borrow_mut().watch(index);
        prepare(&element);
        observer.observe(&element);
    }

    Some(Watch {
        observer,
        _callback: callback,
    })
}
