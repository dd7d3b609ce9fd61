//! Points screen controller: collection points registered in one city.

use super::LoadPhase;
use crate::model::{ApiError, PointSummary};
use crate::state::{
    FetchGuard, FetchKind, FetchRequest, FetchTicket, Navigate, Route, ScreenId, Store,
};
use tracing::debug;

/// View state of the Points screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsState {
    /// State abbreviation from navigation.
    pub uf: String,
    /// City name from navigation.
    pub city: String,
    /// Points in fetch order.
    pub points: Vec<PointSummary>,
    /// Cursor into `points`.
    pub selected: usize,
    /// Fetch progress.
    pub phase: LoadPhase,
}

/// Controller for the Points screen.
#[derive(Debug)]
pub struct PointsController {
    id: ScreenId,
    store: Store<PointsState>,
    guard: FetchGuard,
}

impl PointsController {
    /// New, unmounted controller for a city.
    pub fn new(id: ScreenId, uf: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            id,
            store: Store::new(PointsState {
                uf: uf.into(),
                city: city.into(),
                points: Vec::new(),
                selected: 0,
                phase: LoadPhase::Idle,
            }),
            guard: FetchGuard::new(id),
        }
    }

    /// Screen identity.
    pub fn id(&self) -> ScreenId {
        self.id
    }

    /// Current view state.
    pub fn state(&self) -> &PointsState {
        self.store.state()
    }

    /// View-state store, for subscribing.
    pub fn store_mut(&mut self) -> &mut Store<PointsState> {
        &mut self.store
    }

    /// Request the city's points.
    pub fn mount(&mut self) -> FetchRequest {
        let ticket = self.guard.issue();
        let (uf, city) = self.store.set_state(|s| {
            s.phase = LoadPhase::Loading;
            (s.uf.clone(), s.city.clone())
        });
        FetchRequest {
            ticket,
            kind: FetchKind::Points { uf, city },
        }
    }

    /// Replace the list with the fetch result.
    pub fn points_loaded(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<PointSummary>, ApiError>,
    ) -> bool {
        if !self.guard.accepts(ticket) {
            debug!(screen = %self.id, generation = ticket.generation, "discarding stale points");
            return false;
        }
        if let Ok(points) = result {
            self.store.set_state(|s| {
                s.points = points;
                s.selected = 0;
                s.phase = LoadPhase::Loaded;
            });
        }
        true
    }

    /// Move the cursor up.
    pub fn select_prev(&mut self) {
        self.store
            .set_state(|s| s.selected = s.selected.saturating_sub(1));
    }

    /// Move the cursor down, clamping at the last point.
    pub fn select_next(&mut self) {
        self.store.set_state(|s| {
            if !s.points.is_empty() {
                s.selected = (s.selected + 1).min(s.points.len() - 1);
            }
        });
    }

    /// Jump to the first point.
    pub fn select_first(&mut self) {
        self.store.set_state(|s| s.selected = 0);
    }

    /// Jump to the last point.
    pub fn select_last(&mut self) {
        self.store
            .set_state(|s| s.selected = s.points.len().saturating_sub(1));
    }

    /// Open the point under the cursor. `None` while the list is empty.
    pub fn open_selected(&self) -> Option<Navigate> {
        let state = self.store.state();
        state.points.get(state.selected).map(|point| {
            Navigate::To(Route::Detail {
                point_id: point.id,
            })
        })
    }

    /// Leave the screen.
    pub fn go_back(&self) -> Navigate {
        Navigate::Back
    }

    /// Screen popped.
    pub fn unmount(&mut self) {
        self.guard.retire();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PointId;

    fn summary(id: u32, name: &str) -> PointSummary {
        PointSummary {
            id: PointId::new(id).unwrap(),
            name: name.into(),
            image_url: String::new(),
            city: "Campinas".into(),
            uf: "SP".into(),
        }
    }

    fn loaded(points: Vec<PointSummary>) -> PointsController {
        let mut controller = PointsController::new(ScreenId::new(2), "SP", "Campinas");
        let request = controller.mount();
        controller.points_loaded(request.ticket, Ok(points));
        controller
    }

    #[test]
    fn mount_requests_points_of_city() {
        let mut controller = PointsController::new(ScreenId::new(2), "SP", "Campinas");
        let request = controller.mount();
        assert_eq!(
            request.kind,
            FetchKind::Points {
                uf: "SP".into(),
                city: "Campinas".into()
            }
        );
    }

    #[test]
    fn cursor_clamps_to_list() {
        let mut controller = loaded(vec![summary(1, "A"), summary(2, "B")]);
        controller.select_next();
        controller.select_next();
        assert_eq!(controller.state().selected, 1);
        controller.select_prev();
        controller.select_prev();
        assert_eq!(controller.state().selected, 0);
        controller.select_last();
        assert_eq!(controller.state().selected, 1);
        controller.select_first();
        assert_eq!(controller.state().selected, 0);
    }

    #[test]
    fn open_selected_navigates_to_detail() {
        let mut controller = loaded(vec![summary(1, "A"), summary(9, "B")]);
        controller.select_next();
        assert_eq!(
            controller.open_selected(),
            Some(Navigate::To(Route::Detail {
                point_id: PointId::new(9).unwrap()
            }))
        );
    }

    #[test]
    fn open_selected_on_empty_list_is_none() {
        let controller = loaded(Vec::new());
        assert_eq!(controller.open_selected(), None);
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut controller = PointsController::new(ScreenId::new(2), "SP", "Campinas");
        let request = controller.mount();
        controller.unmount();
        assert!(!controller.points_loaded(request.ticket, Ok(vec![summary(1, "A")])));
        assert!(controller.state().points.is_empty());
    }
}
