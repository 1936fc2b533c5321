//! Table components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ParametersTable` is the shell; it renders one `RowEditor` per parameter
//! and the footer controls. Components read the store through the
//! `RwSignal<ParameterStore>` context provided by `App`.

pub mod export_csv;
pub mod icon;
pub mod parameters_table;
pub mod row_editor;
pub mod text_input;
pub mod value_editor;
