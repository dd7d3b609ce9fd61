//! Geographic reference data and the Home screen's region selection.

use thiserror::Error;

/// Brazilian federative unit (state) as listed by the geographic API.
///
/// Both fields are guaranteed non-empty: an empty abbreviation would be
/// indistinguishable from "no state selected".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederativeUnit {
    abbreviation: String,
    name: String,
}

impl FederativeUnit {
    /// Smart constructor: validates non-empty abbreviation and name.
    pub fn new(
        abbreviation: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, InvalidRegion> {
        let abbreviation = abbreviation.into();
        let name = name.into();
        if abbreviation.trim().is_empty() {
            return Err(InvalidRegion::EmptyAbbreviation);
        }
        if name.trim().is_empty() {
            return Err(InvalidRegion::EmptyName);
        }
        Ok(Self { abbreviation, name })
    }

    /// Two-letter abbreviation, e.g. `"SP"`.
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    /// Full state name, e.g. `"São Paulo"`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// City (município) belonging to a federative unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Municipality {
    name: String,
}

impl Municipality {
    /// Smart constructor: validates a non-empty name.
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidRegion> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InvalidRegion::EmptyName);
        }
        Ok(Self { name })
    }

    /// City name, e.g. `"Campinas"`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Validation failures for region reference data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRegion {
    /// State abbreviation was empty.
    #[error("state abbreviation cannot be empty")]
    EmptyAbbreviation,
    /// State or city name was empty.
    #[error("name cannot be empty")]
    EmptyName,
}

/// Currently selected state and city.
///
/// Empty strings mean "unselected".
///
/// # Invariant
///
/// The city is cleared whenever the state changes or becomes empty. A city
/// is never carried over to a different state, even when a city with the
/// same name exists there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionSelection {
    uf: String,
    city: String,
}

impl RegionSelection {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected state abbreviation, empty when unselected.
    pub fn uf(&self) -> &str {
        &self.uf
    }

    /// Selected city name, empty when unselected.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Select a state.
    ///
    /// Returns `true` when the state value actually changed. The city is
    /// cleared on any change and whenever the new state is empty.
    pub fn set_uf(&mut self, uf: impl Into<String>) -> bool {
        let uf = uf.into();
        let changed = uf != self.uf;
        if changed || uf.is_empty() {
            self.city.clear();
        }
        self.uf = uf;
        changed
    }

    /// Select a city. Does not touch the state.
    ///
    /// Ignored while no state is selected; returns whether the city was set.
    pub fn set_city(&mut self, city: impl Into<String>) -> bool {
        if self.uf.is_empty() {
            return false;
        }
        self.city = city.into();
        true
    }

    /// Both state and city are selected.
    pub fn is_complete(&self) -> bool {
        !self.uf.is_empty() && !self.city.is_empty()
    }
}
