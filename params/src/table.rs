//! Plain-text table of the collection for the console diagnostic.

use cli_table::{ColorChoice, Table, WithTitle};

use crate::kind::ParamType;
use crate::parameter::{Parameter, ParameterId};

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

#[derive(Table)]
struct ParameterRow {
    #[table(title = "id")]
    id: ParameterId,
    #[table(title = "name")]
    name: String,
    #[table(title = "type")]
    kind: ParamType,
    #[table(title = "value")]
    value: String,
}

impl From<&Parameter> for ParameterRow {
    fn from(parameter: &Parameter) -> Self {
        Self {
            id: parameter.id,
            name: parameter.name.clone(),
            kind: parameter.kind,
            value: parameter.value.clone(),
        }
    }
}

/// Render `parameters` as a bordered table with a title row.
///
/// Colors are off: the text ends up in the browser console, not a terminal.
pub fn render(parameters: &[Parameter]) -> std::io::Result<String> {
    let rows: Vec<ParameterRow> = parameters.iter().map(ParameterRow::from).collect();
    let table = rows.with_title().color_choice(ColorChoice::Never).display()?;
    Ok(table.to_string())
}
