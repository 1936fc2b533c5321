//! Table shell: header, one row per parameter, and the footer controls.

use leptos::prelude::*;
use params::{HEADERS, ParameterId, ParameterStore};

use crate::components::export_csv::ExportCsv;
use crate::components::icon::{Icon, MDI_PLUS};
use crate::components::row_editor::RowEditor;
use crate::config::AppConfig;
use crate::util::console;

#[cfg(test)]
#[path = "parameters_table_test.rs"]
mod parameters_table_test;

pub const ADD_LABEL: &str = "Добавить параметр";
pub const PRINT_LABEL: &str = "Вывести параметры в консоль";

#[component]
pub fn ParametersTable() -> impl IntoView {
    let store = expect_context::<RwSignal<ParameterStore>>();
    let config = expect_context::<AppConfig>();

    let parameters = Signal::derive(move || store.with(ParameterStore::snapshot));
    let row_ids = move || store.with(|s| s.items().iter().map(|p| p.id).collect::<Vec<_>>());

    let on_add = move |_| {
        add_row(store);
    };

    let on_print = move |_| {
        store.with_untracked(|s| console::print_parameters(s.items()));
    };

    let header_cells = column_titles()
        .into_iter()
        .map(|title| view! { <span class="table__cell">{title}</span> })
        .collect_view();

    view! {
        <ul class="table">
            <li class="table__row table__row_header">{header_cells}</li>
            <For
                each=row_ids
                key=|id| *id
                children=move |id| view! { <RowEditor id/> }
            />
            <li class="table__row">
                <button title=ADD_LABEL aria-label=ADD_LABEL on:click=on_add>
                    <Icon path=MDI_PLUS/>
                </button>
                <ExportCsv parameters file_name=config.export_file_name/>
                <button on:click=on_print>{PRINT_LABEL}</button>
            </li>
        </ul>
    }
}

/// Header row titles. The last, empty cell sits above the delete buttons.
fn column_titles() -> [&'static str; 5] {
    let [id, name, kind, value] = HEADERS;
    [id, name, kind, value, ""]
}

fn add_row(store: RwSignal<ParameterStore>) -> Option<ParameterId> {
    store.try_update(ParameterStore::add)
}
