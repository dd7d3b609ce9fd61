//! Detail screen controller: one collection point and its contact links.

use super::LoadPhase;
use crate::links::{mail_uri, open_checked, whatsapp_uri, LinkOpener};
use crate::model::{ApiError, PointDetail, PointId};
use crate::state::{
    FetchGuard, FetchKind, FetchRequest, FetchTicket, Navigate, ScreenId, Store,
};
use tracing::{debug, warn};

/// Title of the e-mail failure alert.
pub const ALERT_TITLE: &str = "Ooooops....";

/// Message of the e-mail failure alert.
pub const ALERT_MESSAGE: &str = "Ocorreu um erro ao enviar e-mail, tente novamente";

/// Blocking alert dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Dialog title.
    pub title: String,
    /// Dialog body.
    pub message: String,
}

impl Alert {
    fn email_failure() -> Self {
        Self {
            title: ALERT_TITLE.to_string(),
            message: ALERT_MESSAGE.to_string(),
        }
    }
}

/// View state of the Detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    /// Point being shown.
    pub point_id: PointId,
    /// Fetched payload. `None` until the fetch succeeds; nothing is rendered
    /// meanwhile.
    pub data: Option<PointDetail>,
    /// Fetch progress.
    pub phase: LoadPhase,
    /// Alert awaiting acknowledgement.
    pub alert: Option<Alert>,
}

/// Controller for the Detail screen.
#[derive(Debug)]
pub struct DetailController {
    id: ScreenId,
    store: Store<DetailState>,
    guard: FetchGuard,
}

impl DetailController {
    /// New, unmounted controller for `point_id`.
    pub fn new(id: ScreenId, point_id: PointId) -> Self {
        Self {
            id,
            store: Store::new(DetailState {
                point_id,
                data: None,
                phase: LoadPhase::Idle,
                alert: None,
            }),
            guard: FetchGuard::new(id),
        }
    }

    /// Screen identity.
    pub fn id(&self) -> ScreenId {
        self.id
    }

    /// Current view state.
    pub fn state(&self) -> &DetailState {
        self.store.state()
    }

    /// View-state store, for subscribing.
    pub fn store_mut(&mut self) -> &mut Store<DetailState> {
        &mut self.store
    }

    /// Request the point.
    pub fn mount(&mut self) -> FetchRequest {
        let ticket = self.guard.issue();
        let id = self.store.set_state(|s| {
            s.phase = LoadPhase::Loading;
            s.point_id
        });
        FetchRequest {
            ticket,
            kind: FetchKind::Point { id },
        }
    }

    /// Store the fetched point verbatim. Failures leave the screen blank.
    pub fn point_loaded(
        &mut self,
        ticket: FetchTicket,
        result: Result<PointDetail, ApiError>,
    ) -> bool {
        if !self.guard.accepts(ticket) {
            debug!(screen = %self.id, generation = ticket.generation, "discarding stale point");
            return false;
        }
        if let Ok(detail) = result {
            self.store.set_state(|s| {
                s.data = Some(detail);
                s.phase = LoadPhase::Loaded;
            });
        }
        true
    }

    /// Leave the screen.
    pub fn go_back(&self) -> Navigate {
        Navigate::Back
    }

    /// Open the platform mail composer addressed to the point.
    ///
    /// An unsupported scheme or a launch failure raises the e-mail alert.
    /// Does nothing before the point is loaded.
    pub fn compose_email(&mut self, opener: &dyn LinkOpener) {
        let Some(detail) = &self.store.state().data else {
            return;
        };
        let uri = mail_uri(&detail.point.email);
        if let Err(e) = open_checked(opener, &uri) {
            debug!(error = %e, "compose e-mail failed");
            self.store.set_state(|s| s.alert = Some(Alert::email_failure()));
        }
    }

    /// Open a WhatsApp conversation with the point.
    ///
    /// No capability check. Failures are logged only.
    pub fn open_whatsapp(&self, opener: &dyn LinkOpener) {
        let Some(detail) = &self.store.state().data else {
            return;
        };
        let uri = whatsapp_uri(&detail.point.whatsapp);
        if let Err(e) = opener.open(&uri) {
            warn!(error = %e, "failed to open WhatsApp");
        }
    }

    /// Acknowledge the alert.
    pub fn dismiss_alert(&mut self) {
        if self.store.state().alert.is_some() {
            self.store.set_state(|s| s.alert = None);
        }
    }

    /// Screen popped.
    pub fn unmount(&mut self) {
        self.guard.retire();
    }
}

#[cfg(test)]
#[path = "detail_tests.rs"]
mod tests;
