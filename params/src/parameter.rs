//! A single row of the parameter table and partial updates to it.

use serde::{Deserialize, Serialize};

use crate::kind::ParamType;

#[cfg(test)]
#[path = "parameter_test.rs"]
mod parameter_test;

pub type ParameterId = u32;

/// One editable record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: ParameterId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ParamType,
    pub value: String,
}

impl Parameter {
    /// A fresh record as created by the add control.
    #[must_use]
    pub fn blank(id: ParameterId) -> Self {
        Self {
            id,
            name: String::new(),
            kind: ParamType::default(),
            value: String::new(),
        }
    }
}

/// Fields to overwrite on an existing record. `None` keeps the current value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterPatch {
    pub name: Option<String>,
    pub kind: Option<ParamType>,
    pub value: Option<String>,
}

impl ParameterPatch {
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn kind(kind: ParamType) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Merge the present fields into `parameter`. The id is never touched.
    pub fn apply_to(self, parameter: &mut Parameter) {
        if let Some(name) = self.name {
            parameter.name = name;
        }
        if let Some(kind) = self.kind {
            parameter.kind = kind;
        }
        if let Some(value) = self.value {
            parameter.value = value;
        }
    }
}
