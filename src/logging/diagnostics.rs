//! User-configurable warning suppression.

use std::collections::BTreeSet;
use tracing::{trace, warn};

/// Warning sink with an explicit suppression list.
///
/// Messages starting with any configured prefix are dropped before they
/// reach the log. The list comes from `suppressed_warnings` in the config
/// file and never changes after startup.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    suppressed: BTreeSet<String>,
}

impl Diagnostics {
    /// Create a sink that drops warnings matching any of the given prefixes.
    pub fn new(suppressed: impl IntoIterator<Item = String>) -> Self {
        Self {
            suppressed: suppressed
                .into_iter()
                .filter(|prefix| !prefix.is_empty())
                .collect(),
        }
    }

    /// Whether a message is silenced by the suppression list.
    pub fn is_suppressed(&self, message: &str) -> bool {
        self.suppressed
            .iter()
            .any(|prefix| message.starts_with(prefix.as_str()))
    }

    /// Log a warning unless suppressed. Returns whether it was emitted.
    pub fn warn(&self, message: &str) -> bool {
        if self.is_suppressed(message) {
            trace!(suppressed = message, "warning suppressed");
            return false;
        }
        warn!("{message}");
        true
    }
}
