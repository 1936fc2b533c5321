//! Button that downloads the current collection as a CSV file.

use leptos::prelude::*;
use params::{Parameter, csv};

use crate::util::download;

pub const EXPORT_LABEL: &str = "Скачать CSV файл";

#[component]
pub fn ExportCsv(
    #[prop(into)] parameters: Signal<Vec<Parameter>>,
    #[prop(into)] file_name: String,
) -> impl IntoView {
    let on_click = move |_| {
        let contents = parameters.with_untracked(|p| csv::to_csv(p));
        let file_name = csv::resolve_file_name(&file_name);
        match download::trigger_download(file_name, csv::MIME_TYPE, &contents) {
            Ok(()) => log::info!("exported {} bytes to {file_name}", contents.len()),
            Err(err) => log::warn!("CSV export failed: {err}"),
        }
    };

    view! { <button on:click=on_click>{EXPORT_LABEL}</button> }
}
