//! Ordered, in-memory owner of the parameter collection.
//!
//! DESIGN
//! ======
//! Ids come from a counter owned by the store rather than from the current
//! length of the collection, so deleting a row and adding another never
//! hands out an id that is still in use. Mutators report whether anything
//! changed; the UI layer uses that to skip notifying readers on no-ops.

use crate::kind::ParamType;
use crate::parameter::{Parameter, ParameterId, ParameterPatch};

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

const FIRST_ID: ParameterId = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterStore {
    items: Vec<Parameter>,
    /// `None` once the counter has passed `ParameterId::MAX`.
    next_id: Option<ParameterId>,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: Some(FIRST_ID),
        }
    }
}

impl ParameterStore {
    /// Store seeded with `parameters` in the given order. The id counter
    /// continues after the largest id present.
    #[must_use]
    pub fn from_parameters(parameters: Vec<Parameter>) -> Self {
        let next_id = match parameters.iter().map(|p| p.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(FIRST_ID),
        };
        Self {
            items: parameters,
            next_id,
        }
    }

    /// Store holding the two rows the table starts with.
    #[must_use]
    pub fn with_initial_parameters() -> Self {
        Self::from_parameters(vec![
            Parameter {
                id: 1,
                name: "Назначение".to_owned(),
                kind: ParamType::String,
                value: "повседневное".to_owned(),
            },
            Parameter {
                id: 2,
                name: "Длина".to_owned(),
                kind: ParamType::String,
                value: "макси".to_owned(),
            },
        ])
    }

    #[must_use]
    pub fn items(&self) -> &[Parameter] {
        &self.items
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<Parameter> {
        self.items.clone()
    }

    #[must_use]
    pub fn get(&self, id: ParameterId) -> Option<&Parameter> {
        self.items.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a blank `string` parameter and return its id.
    pub fn add(&mut self) -> ParameterId {
        let id = match self.next_id {
            Some(candidate) if self.get(candidate).is_none() => candidate,
            _ => self.lowest_unused_id(),
        };
        self.next_id = id.checked_add(1);
        self.items.push(Parameter::blank(id));
        log::debug!("parameter {id} added");
        id
    }

    /// Only reached once the counter is exhausted or runs into a seeded id.
    fn lowest_unused_id(&self) -> ParameterId {
        let mut used: Vec<ParameterId> = self.items.iter().map(|p| p.id).collect();
        used.sort_unstable();
        used.dedup();

        let mut candidate = FIRST_ID;
        for id in used.into_iter().filter(|id| *id >= FIRST_ID) {
            if id != candidate {
                break;
            }
            candidate = candidate.saturating_add(1);
        }
        candidate
    }

    /// Merge `patch` into the parameter with `id`. Returns `false` when no
    /// parameter has that id; the collection is left as it was.
    pub fn update(&mut self, id: ParameterId, patch: ParameterPatch) -> bool {
        let Some(parameter) = self.items.iter_mut().find(|p| p.id == id) else {
            log::debug!("update ignored, no parameter {id}");
            return false;
        };
        patch.apply_to(parameter);
        true
    }

    /// Remove the parameter with `id`, keeping the order of the others.
    pub fn delete(&mut self, id: ParameterId) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        let removed = self.items.len() != before;
        if removed {
            log::debug!("parameter {id} deleted");
        }
        removed
    }
}
