use crate::core::FieldKind;
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Labelled input or textarea with an inline error slot.
///
/// The error slot renders at most one message, driven by `error`.
#[component]
pub fn FieldInput(
    /// Field name, used for `name` and `id`
    name: &'static str,
    /// Field label text
    label: &'static str,
    /// Input kind; textareas render as `<textarea>`
    #[prop(default = FieldKind::Text)]
    kind: FieldKind,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Current error message
    error: Signal<Option<String>>,
    /// Input event callback
    on_input: Callback<String>,
    /// Blur event callback
    on_blur: Callback<()>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let has_error = move || error.get().is_some();
    let border = move || {
        if has_error() {
            "border-color: #ef4444;"
        } else {
            ""
        }
    };

    let control = if kind == FieldKind::TextArea {
        view! {
            <textarea
                id=name
                name=name
                class="form-input"
                class:error=has_error
                style=border
                rows=5
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
                disabled=move || disabled.get()
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=name
                name=name
                type=kind.input_type()
                class="form-input"
                class:error=has_error
                style=border
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
                disabled=move || disabled.get()
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=name class="form-label">
                {label}
                {required.then(|| view! { <span class="required-mark">"*"</span> })}
            </label>
            {control}
            {move || {
                error.get().map(|err| view! {
                    <div class="error-message" role="alert">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}
