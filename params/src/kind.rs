//! Registry of the value types a parameter can have.
//!
//! The set is closed: every variant decides for itself how its value is
//! edited through [`ParamType::editor`], so supporting a new type touches one
//! match arm instead of every place that renders a value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "kind_test.rs"]
mod kind_test;

/// Value type of a parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    #[default]
    String,
    Number,
    Select,
}

/// How the value cell of a row is edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorKind {
    /// Free text input bound to the value.
    Text,
    /// No editor yet; the row shows a static notice instead.
    Unsupported,
}

impl ParamType {
    /// All registry entries in display order.
    pub const ALL: [ParamType; 3] = [ParamType::String, ParamType::Number, ParamType::Select];

    /// Identifier used in the select control and in exported data.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Select => "select",
        }
    }

    /// Label shown to the user. Identical to the identifier for now.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        self.as_str()
    }

    #[must_use]
    pub fn editor(self) -> EditorKind {
        match self {
            ParamType::String => EditorKind::Text,
            // `select` may later constrain values to a list; nothing decided yet.
            ParamType::Number | ParamType::Select => EditorKind::Unsupported,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type identifier that is not part of the registry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown parameter type: {0:?}")]
pub struct UnknownParamType(pub String);

impl FromStr for ParamType {
    type Err = UnknownParamType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownParamType(s.to_owned()))
    }
}
