//! Controlled text input.

use leptos::prelude::*;

/// Text field that always shows `value` and reports every keystroke.
///
/// The field keeps no buffer of its own: the caller writes the new text back
/// to wherever `value` reads from, and the field re-renders from there.
#[component]
pub fn TextInput(
    #[prop(into)] name: Signal<String>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="input">
            <input
                class="input__element"
                type="text"
                name=move || name.get()
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </label>
    }
}
