//! One editable row of the parameter table.
//!
//! ARCHITECTURE
//! ============
//! The row is bound to a parameter id, not to a copy of the record. Every
//! field reads the current record from the store and every edit goes back
//! through `ParameterStore::update`, so the store stays the only source of
//! truth for what the inputs display.

use leptos::prelude::*;
use params::{ParamType, ParameterId, ParameterPatch, ParameterStore};

use crate::components::icon::{Icon, MDI_DELETE_OUTLINE};
use crate::components::text_input::TextInput;
use crate::components::value_editor::ValueEditor;

#[cfg(test)]
#[path = "row_editor_test.rs"]
mod row_editor_test;

pub const DELETE_LABEL: &str = "Удалить параметр";

#[component]
pub fn RowEditor(id: ParameterId) -> impl IntoView {
    let store = expect_context::<RwSignal<ParameterStore>>();

    let parameter = Memo::new(move |_| store.with(|s| s.get(id).cloned()));

    let name = Signal::derive(move || {
        parameter.with(|p| p.as_ref().map(|p| p.name.clone()).unwrap_or_default())
    });
    let value = Signal::derive(move || {
        parameter.with(|p| p.as_ref().map(|p| p.value.clone()).unwrap_or_default())
    });
    let kind = Signal::derive(move || parameter.with(|p| p.as_ref().map(|p| p.kind).unwrap_or_default()));

    let on_name = Callback::new(move |text: String| apply(store, id, ParameterPatch::name(text)));
    let on_value = Callback::new(move |text: String| apply(store, id, ParameterPatch::value(text)));

    let on_kind = move |ev| {
        let raw = event_target_value(&ev);
        log::debug!("{raw} select changed");
        match raw.parse::<ParamType>() {
            Ok(kind) => apply(store, id, ParameterPatch::kind(kind)),
            Err(err) => log::warn!("parameter {id}: {err}"),
        }
    };

    let on_delete = move |_| {
        store.maybe_update(|s| s.delete(id));
    };

    view! {
        <li class="table__row">
            <span class="table__cell">{id}</span>
            <span class="table__cell">
                <TextInput name value=name on_change=on_name/>
            </span>
            <span class="table__cell">
                <select name="select" on:change=on_kind>
                    {ParamType::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option
                                    value=option.as_str()
                                    prop:selected=move || kind.get() == option
                                >
                                    {option.display_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </span>
            <span class="table__cell">
                <ValueEditor kind name value on_change=on_value/>
            </span>
            <span class="table__cell">
                <button
                    class="button_type_icon"
                    title=DELETE_LABEL
                    aria-label=DELETE_LABEL
                    on:click=on_delete
                >
                    <Icon path=MDI_DELETE_OUTLINE title=DELETE_LABEL/>
                </button>
            </span>
        </li>
    }
}

fn apply(store: RwSignal<ParameterStore>, id: ParameterId, patch: ParameterPatch) {
    store.maybe_update(|s| s.update(id, patch));
}
