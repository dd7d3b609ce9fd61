//! Fetch requests, outcomes, and the liveness check guarding write-back.
//!
//! Fetches are fire-and-forget: a screen issues a [`FetchRequest`] and keeps
//! rendering. The outcome may arrive after the user selected another state,
//! or after the screen was popped. Every request therefore carries a
//! [`FetchTicket`]; the screen's [`FetchGuard`] only accepts the ticket of
//! its latest request while the screen is mounted.

use crate::model::{
    ApiError, FederativeUnit, Municipality, PointDetail, PointId, PointSummary,
};
use std::fmt;

/// Identity of one mounted screen instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(u64);

impl ScreenId {
    /// Wrap a raw id. Ids are handed out by the screen stack.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "screen#{}", self.0)
    }
}

/// Addressing and liveness token attached to a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    /// Screen the result must be delivered to.
    pub screen: ScreenId,
    /// Generation of the issuing guard when the request was made.
    pub generation: u64,
}

/// Generation counter for one fetch chain of one screen.
///
/// Each call to [`issue`](Self::issue) supersedes every earlier ticket.
/// [`invalidate`](Self::invalidate) does the same without issuing a new
/// request, and [`retire`](Self::retire) rejects everything from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchGuard {
    screen: ScreenId,
    generation: u64,
    alive: bool,
}

impl FetchGuard {
    /// Guard for a freshly mounted screen. Accepts nothing until `issue`.
    pub fn new(screen: ScreenId) -> Self {
        Self {
            screen,
            generation: 0,
            alive: true,
        }
    }

    /// Start a new request, superseding any outstanding one.
    pub fn issue(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket {
            screen: self.screen,
            generation: self.generation,
        }
    }

    /// Drop interest in any outstanding request.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Screen unmounted: reject all future deliveries.
    pub fn retire(&mut self) {
        self.alive = false;
    }

    /// Liveness check performed before a result is written into view state.
    pub fn accepts(&self, ticket: FetchTicket) -> bool {
        self.alive
            && self.generation > 0
            && ticket.screen == self.screen
            && ticket.generation == self.generation
    }

    /// Whether the owning screen is still mounted.
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

/// What to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchKind {
    /// Full list of states.
    States,
    /// Cities of one state.
    Cities {
        /// State abbreviation.
        uf: String,
    },
    /// One collection point with its items.
    Point {
        /// Point identifier.
        id: PointId,
    },
    /// Collection points of a city.
    Points {
        /// State abbreviation.
        uf: String,
        /// City name.
        city: String,
    },
}

impl fmt::Display for FetchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchKind::States => write!(f, "estados"),
            FetchKind::Cities { uf } => write!(f, "estados/{uf}/municipios"),
            FetchKind::Point { id } => write!(f, "points/{id}"),
            FetchKind::Points { uf, city } => write!(f, "points?city={city}&uf={uf}"),
        }
    }
}

/// A request issued by a screen controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Delivery address and liveness token.
    pub ticket: FetchTicket,
    /// What to fetch.
    pub kind: FetchKind,
}

/// Successful fetch result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPayload {
    /// Result of [`FetchKind::States`].
    States(Vec<FederativeUnit>),
    /// Result of [`FetchKind::Cities`].
    Cities(Vec<Municipality>),
    /// Result of [`FetchKind::Point`].
    Point(PointDetail),
    /// Result of [`FetchKind::Points`].
    Points(Vec<PointSummary>),
}

/// Completed fetch travelling back to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Ticket of the originating request.
    pub ticket: FetchTicket,
    /// Kind of the originating request.
    pub kind: FetchKind,
    /// Payload or failure.
    pub result: Result<FetchPayload, ApiError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_guard_accepts_nothing_before_issue() {
        let mut guard = FetchGuard::new(ScreenId::new(1));
        let forged = FetchTicket {
            screen: ScreenId::new(1),
            generation: 0,
        };
        assert!(!guard.accepts(forged));

        guard.issue();
        assert!(!guard.accepts(forged));
    }

    #[test]
    fn latest_ticket_is_accepted() {
        let mut guard = FetchGuard::new(ScreenId::new(1));
        let ticket = guard.issue();
        assert!(guard.accepts(ticket));
    }

    #[test]
    fn newer_issue_supersedes_older_ticket() {
        let mut guard = FetchGuard::new(ScreenId::new(1));
        let first = guard.issue();
        let second = guard.issue();
        assert!(!guard.accepts(first));
        assert!(guard.accepts(second));
    }

    #[test]
    fn invalidate_rejects_outstanding_ticket() {
        let mut guard = FetchGuard::new(ScreenId::new(1));
        let ticket = guard.issue();
        guard.invalidate();
        assert!(!guard.accepts(ticket));
    }

    #[test]
    fn retired_guard_rejects_everything() {
        let mut guard = FetchGuard::new(ScreenId::new(1));
        let ticket = guard.issue();
        guard.retire();
        assert!(!guard.is_alive());
        assert!(!guard.accepts(ticket));
    }

    #[test]
    fn ticket_for_other_screen_is_rejected() {
        let mut mine = FetchGuard::new(ScreenId::new(1));
        let mut other = FetchGuard::new(ScreenId::new(2));
        mine.issue();
        let foreign = other.issue();
        assert!(!mine.accepts(foreign));
    }

    #[test]
    fn fetch_kind_display_matches_endpoint_paths() {
        assert_eq!(FetchKind::States.to_string(), "estados");
        assert_eq!(
            FetchKind::Cities { uf: "SP".into() }.to_string(),
            "estados/SP/municipios"
        );
        assert_eq!(
            FetchKind::Point {
                id: PointId::new(3).unwrap()
            }
            .to_string(),
            "points/3"
        );
    }
}
