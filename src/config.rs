//! Static application settings.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_TITLE: &str = "Selsup test assignment";
pub const DEFAULT_EXPORT_FILE_NAME: &str = "parameters-list.csv";

/// Settings shared through context with the table components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Page heading and document title.
    pub title: String,
    /// Name offered for the CSV download.
    pub export_file_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_owned(),
        }
    }
}
