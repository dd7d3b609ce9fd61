//! UI state (pure).
//!
//! State containers, navigation values and fetch bookkeeping. Nothing in
//! this module performs I/O.

pub mod fetch;
pub mod form;
pub mod navigation;
pub mod picker;
pub mod store;

// Re-export for convenience
pub use fetch::{
    FetchGuard, FetchKind, FetchOutcome, FetchPayload, FetchRequest, FetchTicket, ScreenId,
};
pub use form::{HomeField, HomeForm};
pub use navigation::{Navigate, Route};
pub use picker::{PickerField, PickerPopup};
pub use store::{RedrawFlag, Store, SubscriptionId};
