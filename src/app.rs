//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use params::ParameterStore;

use crate::components::parameters_table::ParametersTable;
use crate::config::AppConfig;

/// Root application component.
///
/// Owns the single parameter store signal; every component below reads and
/// mutates the collection through it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::default();
    let store = RwSignal::new(ParameterStore::with_initial_parameters());

    provide_context(store);
    provide_context(config.clone());

    view! {
        <Title text=config.title.clone()/>

        <header class="header">
            <h1>{config.title}</h1>
        </header>
        <main class="main">
            <ParametersTable/>
        </main>
    }
}
