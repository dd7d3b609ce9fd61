//! Collection point records returned by the application backend.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Numeric identifier of a collection point.
///
/// Identifiers start at 1; zero is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(u32);

impl PointId {
    /// Smart constructor: rejects zero.
    pub fn new(raw: u32) -> Result<Self, InvalidPointId> {
        if raw == 0 {
            return Err(InvalidPointId::Zero);
        }
        Ok(Self(raw))
    }

    /// Raw numeric value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PointId {
    type Err = InvalidPointId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u32>()
            .map_err(|_| InvalidPointId::NotANumber(s.to_string()))?;
        Self::new(raw)
    }
}

/// Reasons a point identifier is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPointId {
    /// Identifier was zero.
    #[error("point id must be positive")]
    Zero,
    /// Identifier was not an unsigned integer.
    #[error("point id is not a number: {0:?}")]
    NotANumber(String),
}

/// Contact and location data of a single collection point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionPoint {
    /// URL of the point's photo.
    pub image_url: String,
    /// Display name. Never empty.
    pub name: String,
    /// Contact e-mail address.
    pub email: String,
    /// WhatsApp phone number in international format, digits only.
    pub whatsapp: String,
    /// City the point is located in.
    pub city: String,
    /// State abbreviation the point is located in.
    pub uf: String,
}

/// Waste category accepted by a collection point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Category title, e.g. `"Lâmpadas"`.
    pub title: String,
}

/// Full detail of a point as fetched for the Detail screen.
///
/// Immutable once fetched; the screen keeps it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointDetail {
    /// The point record.
    pub point: CollectionPoint,
    /// Accepted item categories, in backend order.
    pub items: Vec<Item>,
}

impl PointDetail {
    /// Item titles joined with `", "`. Empty when the point lists no items.
    pub fn items_summary(&self) -> String {
        self.items
            .iter()
            .map(|item| item.title.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Address line, `"{city}, {uf}"`.
    pub fn address(&self) -> String {
        format!("{}, {}", self.point.city, self.point.uf)
    }
}

/// Row of the Points list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointSummary {
    /// Identifier used to open the Detail screen.
    pub id: PointId,
    /// Display name.
    pub name: String,
    /// URL of the point's photo.
    pub image_url: String,
    /// City the point is located in.
    pub city: String,
    /// State abbreviation the point is located in.
    pub uf: String,
}
