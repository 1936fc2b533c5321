//! Value cell of a row, chosen by the parameter's type.

use leptos::prelude::*;
use params::{EditorKind, ParamType};

use crate::components::text_input::TextInput;

pub const UNSUPPORTED_NOTICE: &str = "По ТЗ предусмотрен только тип String";

#[component]
pub fn ValueEditor(
    #[prop(into)] kind: Signal<ParamType>,
    #[prop(into)] name: Signal<String>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        {move || match kind.get().editor() {
            EditorKind::Text => view! { <TextInput name value on_change/> }.into_any(),
            EditorKind::Unsupported => view! { <span class="notice">{UNSUPPORTED_NOTICE}</span> }.into_any(),
        }}
    }
}
