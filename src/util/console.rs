//! Developer-console dump of the parameter collection.

use params::Parameter;

#[cfg(test)]
#[path = "console_test.rs"]
mod console_test;

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("could not serialize parameters: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("console rejected the table payload: {0}")]
    Js(String),
}

/// JSON array handed to `console.table`.
pub fn table_payload(parameters: &[Parameter]) -> Result<String, ConsoleError> {
    Ok(serde_json::to_string(parameters)?)
}

/// Print the collection as a table. Failures are logged, never raised.
pub fn print_parameters(parameters: &[Parameter]) {
    match params::table::render(parameters) {
        Ok(text) => log::debug!("{} parameters:\n{text}", parameters.len()),
        Err(err) => log::warn!("could not render parameter table: {err}"),
    }
    if let Err(err) = write_table(parameters) {
        log::warn!("{err}");
    }
}

fn write_table(parameters: &[Parameter]) -> Result<(), ConsoleError> {
    let payload = table_payload(parameters)?;
    #[cfg(feature = "csr")]
    {
        let rows = js_sys::JSON::parse(&payload).map_err(|e| ConsoleError::Js(format!("{e:?}")))?;
        web_sys::console::table_1(&rows);
    }
    #[cfg(not(feature = "csr"))]
    {
        log::info!("{payload}");
    }
    Ok(())
}
