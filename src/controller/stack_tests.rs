//! Tests for the screen stack.

use super::*;
use crate::model::{FederativeUnit, Municipality, PointId};
use crate::state::{FetchKind, FetchPayload};

fn stack() -> (ScreenStack, RedrawFlag) {
    let redraw = RedrawFlag::new();
    (ScreenStack::new(redraw.clone()), redraw)
}

fn points_route() -> Route {
    Route::Points {
        uf: "SP".into(),
        city: "Campinas".into(),
    }
}

fn states_outcome(request: &FetchRequest) -> FetchOutcome {
    FetchOutcome {
        ticket: request.ticket,
        kind: request.kind.clone(),
        result: Ok(FetchPayload::States(vec![
            FederativeUnit::new("SP", "São Paulo").unwrap()
        ])),
    }
}

#[test]
fn navigate_pushes_and_mounts() {
    let (mut stack, redraw) = stack();
    let request = stack.navigate(Route::Home);
    assert_eq!(request.kind, FetchKind::States);
    assert_eq!(stack.depth(), 1);
    assert!(redraw.take());
}

#[test]
fn go_back_never_pops_root() {
    let (mut stack, _) = stack();
    stack.navigate(Route::Home);
    assert!(!stack.go_back());
    assert_eq!(stack.depth(), 1);
}

#[test]
fn apply_back_pops_one_screen() {
    let (mut stack, _) = stack();
    stack.navigate(Route::Home);
    stack.navigate(points_route());
    assert_eq!(stack.apply(Navigate::Back), None);
    assert_eq!(stack.routes(), vec![Route::Home]);
}

#[test]
fn screen_ids_are_unique() {
    let (mut stack, _) = stack();
    let a = stack.navigate(Route::Home);
    let b = stack.navigate(points_route());
    assert_ne!(a.ticket.screen, b.ticket.screen);
}

#[test]
fn deliver_routes_to_issuing_screen() {
    let (mut stack, redraw) = stack();
    let request = stack.navigate(Route::Home);
    stack.navigate(points_route());
    redraw.take();

    assert!(stack.deliver(states_outcome(&request)));
    assert!(redraw.take());
    stack.go_back();
    match stack.current() {
        Some(Screen::Home(home)) => assert_eq!(home.controller.state().states.len(), 1),
        other => panic!("expected Home, got {other:?}"),
    }
}

#[test]
fn outcome_for_popped_screen_is_dropped() {
    let (mut stack, _) = stack();
    stack.navigate(Route::Home);
    let detail = stack.navigate(Route::Detail {
        point_id: PointId::new(1).unwrap(),
    });
    stack.go_back();

    let outcome = FetchOutcome {
        ticket: detail.ticket,
        kind: detail.kind,
        result: Err(crate::model::ApiError::network("points/1", "late")),
    };
    assert!(!stack.deliver(outcome));
}

#[test]
fn mismatched_payload_is_treated_as_failure() {
    let (mut stack, _) = stack();
    let request = stack.navigate(Route::Home);
    let outcome = FetchOutcome {
        ticket: request.ticket,
        kind: request.kind,
        result: Ok(FetchPayload::Cities(vec![Municipality::new("Campinas").unwrap()])),
    };
    assert!(stack.deliver(outcome));
    match stack.current() {
        Some(Screen::Home(home)) => assert!(home.controller.state().states.is_empty()),
        other => panic!("expected Home, got {other:?}"),
    }
}
