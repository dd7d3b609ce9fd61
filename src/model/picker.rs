//! Picker options offered to the user.

use super::region::{FederativeUnit, Municipality};

/// A selectable `(label, value)` pair shown in a picker.
///
/// Used for both the state (UF) and city lists. Lists of options are always
/// rebuilt from a fresh fetch, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    /// Text shown to the user.
    pub label: String,
    /// Value stored in the selection when this option is chosen.
    pub value: String,
}

impl PickerOption {
    /// Build an option from a label and a value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A state is listed by its full name and selected by its abbreviation.
impl From<&FederativeUnit> for PickerOption {
    fn from(unit: &FederativeUnit) -> Self {
        Self::new(unit.name(), unit.abbreviation())
    }
}

/// Cities use their name as both label and value.
impl From<&Municipality> for PickerOption {
    fn from(city: &Municipality) -> Self {
        Self::new(city.name(), city.name())
    }
}

/// Map fetched states into picker options, preserving order.
pub fn state_options(units: &[FederativeUnit]) -> Vec<PickerOption> {
    units.iter().map(PickerOption::from).collect()
}

/// Map fetched cities into picker options, preserving order.
pub fn city_options(cities: &[Municipality]) -> Vec<PickerOption> {
    cities.iter().map(PickerOption::from).collect()
}
