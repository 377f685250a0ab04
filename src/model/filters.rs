//! Filter Selection Model
//!
//! The filter values chosen in the overlay. Sets keep the values ordered
//! so summaries render deterministically.

use std::collections::BTreeSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub makes: BTreeSet<String>,

    /// (make, model) pairs
    pub models: BTreeSet<(String, String)>,

    pub body_types: BTreeSet<String>,
    pub fuel_types: BTreeSet<String>,
    pub transmissions: BTreeSet<String>,
}

fn toggle(set: &mut BTreeSet<String>, value: &str) -> bool {
    if set.remove(value) {
        false
    } else {
        set.insert(value.to_string());
        true
    }
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a make. Deselecting it also drops its selected models.
    /// Returns whether the make is now selected.
    pub fn toggle_make(&mut self, make: &str) -> bool {
        let selected = toggle(&mut self.makes, make);
        if !selected {
            self.models.retain(|(m, _)| m != make);
        }
        selected
    }

    /// Toggle a model of `make`. Returns whether it is now selected.
    pub fn toggle_model(&mut self, make: &str, model: &str) -> bool {
        let key = (make.to_string(), model.to_string());
        if self.models.remove(&key) {
            false
        } else {
            self.models.insert(key);
            true
        }
    }

    pub fn toggle_body_type(&mut self, value: &str) -> bool {
        toggle(&mut self.body_types, value)
    }

    pub fn toggle_fuel_type(&mut self, value: &str) -> bool {
        toggle(&mut self.fuel_types, value)
    }

    pub fn toggle_transmission(&mut self, value: &str) -> bool {
        toggle(&mut self.transmissions, value)
    }

    pub fn has_model(&self, make: &str, model: &str) -> bool {
        self.models
            .iter()
            .any(|(m, name)| m == make && name == model)
    }

    /// Selected models of one make, in order
    pub fn models_of<'a>(&'a self, make: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.models
            .iter()
            .filter(move |(m, _)| m == make)
            .map(|(_, model)| model.as_str())
    }

    /// Total number of selected values across all groups
    pub fn active_count(&self) -> usize {
        self.makes.len()
            + self.models.len()
            + self.body_types.len()
            + self.fuel_types.len()
            + self.transmissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
