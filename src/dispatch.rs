//! Background execution of fetch requests.
//!
//! Each request runs on its own short-lived thread. Results come back over
//! an mpsc channel that the event loop drains every tick. Nothing is
//! cancelled or retried; liveness is checked on delivery.

use crate::api::{GeoApi, PointsApi};
use crate::model::ApiError;
use crate::state::{FetchKind, FetchOutcome, FetchPayload, FetchRequest};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use tracing::{debug, error};

/// Runs fetches off the UI thread.
#[derive(Clone)]
pub struct FetchDispatcher {
    geo: Arc<dyn GeoApi>,
    points: Arc<dyn PointsApi>,
    sender: Sender<FetchOutcome>,
}

impl FetchDispatcher {
    /// Dispatcher and the receiving end of its outcome channel.
    pub fn new(
        geo: Arc<dyn GeoApi>,
        points: Arc<dyn PointsApi>,
    ) -> (Self, Receiver<FetchOutcome>) {
        let (sender, receiver) = mpsc::channel();
        (
            Self {
                geo,
                points,
                sender,
            },
            receiver,
        )
    }

    /// Start `request` in the background.
    pub fn dispatch(&self, request: FetchRequest) {
        let FetchRequest { ticket, kind } = request;
        let geo = Arc::clone(&self.geo);
        let points = Arc::clone(&self.points);
        let sender = self.sender.clone();
        let name = format!("fetch-{}", ticket.screen.get());
        debug!(kind = %kind, screen = %ticket.screen, generation = ticket.generation, "dispatch");

        let spawned = thread::Builder::new().name(name).spawn(move || {
            let result = execute(geo.as_ref(), points.as_ref(), &kind);
            // Receiver gone means the app is shutting down.
            let _ = sender.send(FetchOutcome {
                ticket,
                kind,
                result,
            });
        });
        if let Err(e) = spawned {
            error!(error = %e, "failed to spawn fetch thread");
        }
    }
}

impl std::fmt::Debug for FetchDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchDispatcher").finish_non_exhaustive()
    }
}

/// Perform one fetch synchronously.
pub fn execute(
    geo: &dyn GeoApi,
    points: &dyn PointsApi,
    kind: &FetchKind,
) -> Result<FetchPayload, ApiError> {
    match kind {
        FetchKind::States => geo.states().map(FetchPayload::States),
        FetchKind::Cities { uf } => geo.cities(uf).map(FetchPayload::Cities),
        FetchKind::Point { id } => points.point(*id).map(FetchPayload::Point),
        FetchKind::Points { uf, city } => points.points(uf, city).map(FetchPayload::Points),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{FakeGeo, FakePoints};
    use super::*;
    use crate::model::{ErrorKind, FederativeUnit, Municipality, PointId};
    use crate::state::{FetchTicket, ScreenId};
    use std::time::Duration;

    fn dispatcher() -> (FetchDispatcher, Receiver<FetchOutcome>) {
        let mut geo = FakeGeo {
            states: vec![FederativeUnit::new("SP", "São Paulo").unwrap()],
            ..FakeGeo::default()
        };
        geo.cities
            .insert("SP".into(), vec![Municipality::new("Campinas").unwrap()]);
        FetchDispatcher::new(Arc::new(geo), Arc::new(FakePoints::default()))
    }

    fn ticket() -> FetchTicket {
        FetchTicket {
            screen: ScreenId::new(1),
            generation: 1,
        }
    }

    #[test]
    fn outcome_carries_ticket_and_payload() {
        let (dispatcher, receiver) = dispatcher();
        dispatcher.dispatch(FetchRequest {
            ticket: ticket(),
            kind: FetchKind::Cities { uf: "SP".into() },
        });
        let outcome = receiver.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(outcome.ticket, ticket());
        assert_eq!(
            outcome.result,
            Ok(FetchPayload::Cities(vec![Municipality::new("Campinas").unwrap()]))
        );
    }

    #[test]
    fn errors_are_delivered_not_swallowed() {
        let (dispatcher, receiver) = dispatcher();
        dispatcher.dispatch(FetchRequest {
            ticket: ticket(),
            kind: FetchKind::Point {
                id: PointId::new(42).unwrap(),
            },
        });
        let outcome = receiver.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(outcome.result.unwrap_err().kind(), ErrorKind::Status);
    }

    #[test]
    fn execute_maps_kind_to_api_call() {
        let geo = FakeGeo {
            states: vec![FederativeUnit::new("AC", "Acre").unwrap()],
            ..FakeGeo::default()
        };
        let payload = execute(&geo, &FakePoints::default(), &FetchKind::States).unwrap();
        assert!(matches!(payload, FetchPayload::States(ref units) if units.len() == 1));
    }
}
