//! Home screen controller: cascading state/city pickers.
//!
//! Mounting fetches the state list. Choosing a state fetches its cities.
//! Confirming with both values selected navigates to the points of that
//! city. Fetch failures leave the affected list empty.

use super::LoadPhase;
use crate::model::picker::{city_options, state_options};
use crate::model::{ApiError, FederativeUnit, Municipality, PickerOption, RegionSelection};
use crate::state::{
    FetchGuard, FetchKind, FetchRequest, FetchTicket, Navigate, Route, ScreenId, Store,
};
use tracing::debug;

/// View state of the Home screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeState {
    /// State picker options, in fetch order.
    pub states: Vec<PickerOption>,
    /// City picker options for the selected state, in fetch order.
    pub cities: Vec<PickerOption>,
    /// Current picker values.
    pub selection: RegionSelection,
    /// Progress of the state list fetch.
    pub states_phase: LoadPhase,
    /// Progress of the city list fetch.
    pub cities_phase: LoadPhase,
}

/// Controller for the Home screen.
#[derive(Debug)]
pub struct HomeController {
    id: ScreenId,
    store: Store<HomeState>,
    states_guard: FetchGuard,
    cities_guard: FetchGuard,
}

impl HomeController {
    /// New, unmounted controller.
    pub fn new(id: ScreenId) -> Self {
        Self {
            id,
            store: Store::new(HomeState::default()),
            states_guard: FetchGuard::new(id),
            cities_guard: FetchGuard::new(id),
        }
    }

    /// Screen identity.
    pub fn id(&self) -> ScreenId {
        self.id
    }

    /// Current view state.
    pub fn state(&self) -> &HomeState {
        self.store.state()
    }

    /// View-state store, for subscribing.
    pub fn store_mut(&mut self) -> &mut Store<HomeState> {
        &mut self.store
    }

    /// Request the full state list.
    pub fn mount(&mut self) -> FetchRequest {
        let ticket = self.states_guard.issue();
        self.store.set_state(|s| s.states_phase = LoadPhase::Loading);
        FetchRequest {
            ticket,
            kind: FetchKind::States,
        }
    }

    /// Apply the state list fetch result.
    ///
    /// Returns `false` when the ticket is stale and nothing was written.
    /// On failure the list keeps its previous (empty) contents.
    pub fn states_loaded(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<FederativeUnit>, ApiError>,
    ) -> bool {
        if !self.states_guard.accepts(ticket) {
            debug!(screen = %self.id, generation = ticket.generation, "discarding stale states");
            return false;
        }
        if let Ok(units) = result {
            let options = state_options(&units);
            self.store.set_state(|s| {
                s.states = options;
                s.states_phase = LoadPhase::Loaded;
            });
        }
        true
    }

    /// Select a state.
    ///
    /// A changed value clears the city and the city list, so cities of the
    /// previous state can never be picked. An empty value issues nothing; a
    /// new non-empty value returns the request for its cities.
    pub fn select_uf(&mut self, value: impl Into<String>) -> Option<FetchRequest> {
        let uf = value.into();
        let changed = self.store.set_state(|s| {
            let changed = s.selection.set_uf(uf.clone());
            if changed || uf.is_empty() {
                s.cities.clear();
                s.cities_phase = LoadPhase::Idle;
            }
            changed
        });

        if uf.is_empty() {
            self.cities_guard.invalidate();
            return None;
        }
        if !changed {
            return None;
        }

        let ticket = self.cities_guard.issue();
        self.store.set_state(|s| s.cities_phase = LoadPhase::Loading);
        Some(FetchRequest {
            ticket,
            kind: FetchKind::Cities { uf },
        })
    }

    /// Apply the city list fetch result for the latest selected state.
    pub fn cities_loaded(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Municipality>, ApiError>,
    ) -> bool {
        if !self.cities_guard.accepts(ticket) {
            debug!(screen = %self.id, generation = ticket.generation, "discarding stale cities");
            return false;
        }
        if let Ok(cities) = result {
            let options = city_options(&cities);
            self.store.set_state(|s| {
                s.cities = options;
                s.cities_phase = LoadPhase::Loaded;
            });
        }
        true
    }

    /// Select a city. The value is not checked against the city list, and
    /// is ignored while no state is selected.
    pub fn select_city(&mut self, value: impl Into<String>) {
        let city = value.into();
        if !self.store.set_state(|s| s.selection.set_city(city)) {
            debug!("city selected without a state, ignored");
        }
    }

    /// Navigate to the points of the selected city.
    ///
    /// `None` unless both state and city are selected.
    pub fn confirm(&self) -> Option<Navigate> {
        let selection = &self.store.state().selection;
        if !selection.is_complete() {
            return None;
        }
        Some(Navigate::To(Route::Points {
            uf: selection.uf().to_string(),
            city: selection.city().to_string(),
        }))
    }

    /// Screen popped: later deliveries are discarded.
    pub fn unmount(&mut self) {
        self.states_guard.retire();
        self.cities_guard.retire();
    }
}

#[cfg(test)]
#[path = "home_tests.rs"]
mod tests;
