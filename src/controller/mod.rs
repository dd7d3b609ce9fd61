//! Screen controllers (pure).
//!
//! Controllers own their view state in a [`Store`](crate::state::Store) and
//! never perform I/O: fetches come out as [`FetchRequest`] values and
//! navigation as [`Navigate`] values, which the shell executes. The only
//! side-effecting collaborator a controller sees is a
//! [`LinkOpener`](crate::links::LinkOpener), passed per call.

pub mod detail;
pub mod home;
pub mod input;
pub mod points;
pub mod stack;

pub use detail::{Alert, DetailController, DetailState};
pub use home::{HomeController, HomeState};
pub use input::handle_action;
pub use points::{PointsController, PointsState};
pub use stack::ScreenStack;

use crate::model::ApiError;
use crate::state::{
    FetchKind, FetchOutcome, FetchPayload, FetchRequest, HomeForm, Navigate, RedrawFlag, Route,
    ScreenId,
};

/// Progress of one fetch chain as the user sees it.
///
/// A failed fetch never reaches `Loaded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing requested.
    #[default]
    Idle,
    /// Request in flight, or failed.
    Loading,
    /// Result applied.
    Loaded,
}

/// Work a controller hands back to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start a background fetch.
    Fetch(FetchRequest),
    /// Change screens.
    Navigate(Navigate),
}

/// Home controller plus the keyboard state of its form.
#[derive(Debug)]
pub struct HomeScreen {
    /// Picker logic.
    pub controller: HomeController,
    /// Focus and open popup.
    pub form: HomeForm,
}

/// A mounted screen.
#[derive(Debug)]
pub enum Screen {
    /// State/city selection.
    Home(HomeScreen),
    /// Points of a city.
    Points(PointsController),
    /// One point.
    Detail(DetailController),
}

impl Screen {
    /// Build the controller for a route.
    pub fn for_route(id: ScreenId, route: Route) -> Self {
        match route {
            Route::Home => Screen::Home(HomeScreen {
                controller: HomeController::new(id),
                form: HomeForm::default(),
            }),
            Route::Points { uf, city } => Screen::Points(PointsController::new(id, uf, city)),
            Route::Detail { point_id } => Screen::Detail(DetailController::new(id, point_id)),
        }
    }

    /// Screen identity.
    pub fn id(&self) -> ScreenId {
        match self {
            Screen::Home(home) => home.controller.id(),
            Screen::Points(points) => points.id(),
            Screen::Detail(detail) => detail.id(),
        }
    }

    /// Route this screen was opened with.
    pub fn route(&self) -> Route {
        match self {
            Screen::Home(_) => Route::Home,
            Screen::Points(points) => Route::Points {
                uf: points.state().uf.clone(),
                city: points.state().city.clone(),
            },
            Screen::Detail(detail) => Route::Detail {
                point_id: detail.state().point_id,
            },
        }
    }

    /// Raise `flag` on every view-state change.
    pub fn subscribe_redraw(&mut self, flag: &RedrawFlag) {
        let flag = flag.clone();
        match self {
            Screen::Home(home) => {
                home.controller.store_mut().subscribe(move |_| flag.raise());
            }
            Screen::Points(points) => {
                points.store_mut().subscribe(move |_| flag.raise());
            }
            Screen::Detail(detail) => {
                detail.store_mut().subscribe(move |_| flag.raise());
            }
        }
    }

    /// Issue the screen's initial fetch.
    pub fn mount(&mut self) -> FetchRequest {
        match self {
            Screen::Home(home) => home.controller.mount(),
            Screen::Points(points) => points.mount(),
            Screen::Detail(detail) => detail.mount(),
        }
    }

    /// Stop accepting fetch results.
    pub fn unmount(&mut self) {
        match self {
            Screen::Home(home) => home.controller.unmount(),
            Screen::Points(points) => points.unmount(),
            Screen::Detail(detail) => detail.unmount(),
        }
    }

    /// Route a fetch outcome to the matching controller callback.
    ///
    /// Returns whether the outcome was accepted.
    pub fn deliver(&mut self, outcome: FetchOutcome) -> bool {
        let FetchOutcome {
            ticket,
            kind,
            result,
        } = outcome;
        match (self, &kind) {
            (Screen::Home(home), FetchKind::States) => {
                let result = extract(result, &kind, |p| match p {
                    FetchPayload::States(units) => Some(units),
                    _ => None,
                });
                home.controller.states_loaded(ticket, result)
            }
            (Screen::Home(home), FetchKind::Cities { .. }) => {
                let result = extract(result, &kind, |p| match p {
                    FetchPayload::Cities(cities) => Some(cities),
                    _ => None,
                });
                home.controller.cities_loaded(ticket, result)
            }
            (Screen::Points(points), FetchKind::Points { .. }) => {
                let result = extract(result, &kind, |p| match p {
                    FetchPayload::Points(list) => Some(list),
                    _ => None,
                });
                points.points_loaded(ticket, result)
            }
            (Screen::Detail(detail), FetchKind::Point { .. }) => {
                let result = extract(result, &kind, |p| match p {
                    FetchPayload::Point(point) => Some(point),
                    _ => None,
                });
                detail.point_loaded(ticket, result)
            }
            _ => false,
        }
    }
}

fn extract<T>(
    result: Result<FetchPayload, ApiError>,
    kind: &FetchKind,
    pick: impl FnOnce(FetchPayload) -> Option<T>,
) -> Result<T, ApiError> {
    result.and_then(|payload| {
        pick(payload)
            .ok_or_else(|| ApiError::malformed(kind.to_string(), "payload does not match request"))
    })
}
