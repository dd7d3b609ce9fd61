//! Domain model types (pure).
//!
//! All types in this module are plain data with smart constructors.
//! Wire formats live in [`crate::api`]; these are the validated shapes the
//! controllers work with.

pub mod error;
pub mod key_action;
pub mod picker;
pub mod point;
pub mod region;

// Re-export for convenience
pub use error::{ApiError, AppError, ErrorKind, LinkError};
pub use key_action::KeyAction;
pub use picker::PickerOption;
pub use point::{CollectionPoint, InvalidPointId, Item, PointDetail, PointId, PointSummary};
pub use region::{FederativeUnit, Municipality, RegionSelection};
