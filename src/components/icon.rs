//! Inline SVG icons (Material Design Icons paths).

use leptos::prelude::*;

pub const MDI_DELETE_OUTLINE: &str =
    "M6,19A2,2 0 0,0 8,21H16A2,2 0 0,0 18,19V7H6V19M8,9H16V19H8V9M15.5,4L14.5,3H9.5L8.5,4H5V6H19V4H15.5Z";
pub const MDI_PLUS: &str = "M19,13H13V19H11V13H5V11H11V5H13V11H19V13Z";

#[component]
pub fn Icon(path: &'static str, #[prop(optional)] title: Option<&'static str>) -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" width="24" height="24" role="img" aria-label=title>
            <path d=path fill="currentColor"/>
        </svg>
    }
}
