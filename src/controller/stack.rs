//! Navigation stack of mounted screens.

use super::Screen;
use crate::state::{FetchOutcome, FetchRequest, Navigate, RedrawFlag, Route, ScreenId};
use tracing::{debug, info};

/// Stack of mounted screens. The bottom screen is the root and is never
/// popped.
#[derive(Debug)]
pub struct ScreenStack {
    screens: Vec<Screen>,
    next_id: u64,
    redraw: RedrawFlag,
}

impl ScreenStack {
    /// Empty stack. Every screen pushed later raises `redraw` on change.
    pub fn new(redraw: RedrawFlag) -> Self {
        Self {
            screens: Vec::new(),
            next_id: 1,
            redraw,
        }
    }

    /// Push and mount a screen for `route`, returning its initial fetch.
    pub fn navigate(&mut self, route: Route) -> FetchRequest {
        let id = ScreenId::new(self.next_id);
        self.next_id += 1;
        info!(route = %route, screen = %id, "navigate");

        let mut screen = Screen::for_route(id, route);
        screen.subscribe_redraw(&self.redraw);
        let request = screen.mount();
        self.screens.push(screen);
        self.redraw.raise();
        request
    }

    /// Pop the current screen. Returns `false` at the root.
    pub fn go_back(&mut self) -> bool {
        if self.screens.len() <= 1 {
            debug!("go_back at root ignored");
            return false;
        }
        if let Some(mut screen) = self.screens.pop() {
            info!(route = %screen.route(), screen = %screen.id(), "back");
            screen.unmount();
        }
        self.redraw.raise();
        true
    }

    /// Execute a navigation command.
    pub fn apply(&mut self, navigate: Navigate) -> Option<FetchRequest> {
        match navigate {
            Navigate::To(route) => Some(self.navigate(route)),
            Navigate::Back => {
                self.go_back();
                None
            }
        }
    }

    /// Hand an outcome to the screen it was issued for.
    ///
    /// Outcomes for popped screens are dropped.
    pub fn deliver(&mut self, outcome: FetchOutcome) -> bool {
        let target = outcome.ticket.screen;
        match self.screens.iter_mut().find(|s| s.id() == target) {
            Some(screen) => screen.deliver(outcome),
            None => {
                debug!(screen = %target, kind = %outcome.kind, "outcome for popped screen dropped");
                false
            }
        }
    }

    /// Top screen.
    pub fn current(&self) -> Option<&Screen> {
        self.screens.last()
    }

    /// Top screen, mutably.
    pub fn current_mut(&mut self) -> Option<&mut Screen> {
        self.screens.last_mut()
    }

    /// Number of mounted screens.
    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    /// Routes from root to top.
    pub fn routes(&self) -> Vec<Route> {
        self.screens.iter().map(Screen::route).collect()
    }
}

#[cfg(test)]
#[path = "stack_tests.rs"]
mod tests;
