//! Data model for the editable parameter table.
//!
//! This crate is UI-framework agnostic so the Leptos application can stay a
//! thin rendering layer over it. It owns the parameter records, the fixed
//! type registry, the store with its add/update/delete operations, the CSV
//! exporter and the plain-text table used for console diagnostics.

pub mod csv;
pub mod kind;
pub mod parameter;
pub mod store;
pub mod table;

pub use kind::{EditorKind, ParamType, UnknownParamType};
pub use parameter::{Parameter, ParameterId, ParameterPatch};
pub use store::ParameterStore;

/// Column headers shared by the rendered table and the CSV export.
pub const HEADERS: [&str; 4] = ["ID", "Название", "Тип", "Значение"];
