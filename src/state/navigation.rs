//! Navigation destinations and commands.

use crate::model::PointId;
use std::fmt;

/// A screen destination together with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// State/city selection.
    Home,
    /// Collection points of a city.
    Points {
        /// State abbreviation, passed through opaquely.
        uf: String,
        /// City name, passed through opaquely.
        city: String,
    },
    /// One collection point.
    Detail {
        /// Point to fetch.
        point_id: PointId,
    },
}

impl Route {
    /// Destination name, as used in logs and the status bar.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Points { .. } => "Points",
            Route::Detail { .. } => "Detail",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "Home"),
            Route::Points { uf, city } => write!(f, "Points {{ uf: {uf}, city: {city} }}"),
            Route::Detail { point_id } => write!(f, "Detail {{ point_id: {point_id} }}"),
        }
    }
}

/// Navigation command returned by controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigate {
    /// Push a new screen.
    To(Route),
    /// Pop the current screen.
    Back,
}
