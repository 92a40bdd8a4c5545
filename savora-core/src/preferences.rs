//! User preferences submitted with a recommendation request.

use std::collections::HashSet;

use geo::Coord;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors returned by [`UserPreferences::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreferencesError {
    /// The minimum rating fell outside the `1.0..=5.0` range.
    #[error("minimum rating {min_rating} is outside the valid range 1.0..=5.0")]
    MinRatingOutOfRange {
        /// The rejected minimum rating.
        min_rating: f32,
    },
    /// The maximum price level fell outside the `0..=4` range.
    #[error("maximum price level {max_price_level} is outside the valid range 0..=4")]
    MaxPriceLevelOutOfRange {
        /// The rejected maximum price level.
        max_price_level: u8,
    },
}

/// What the user asked for: rating floor, price ceiling, location, cuisines.
///
/// The same range invariants apply as for [`crate::Place`]; construction
/// rejects out-of-range values.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use geo::Coord;
/// use savora_core::UserPreferences;
///
/// # fn main() -> Result<(), savora_core::PreferencesError> {
/// let preferences = UserPreferences::new(
///     4.0,
///     2,
///     Coord { x: -0.1, y: 51.5 },
///     HashSet::from(["ramen".to_owned()]),
///     true,
/// )?;
/// assert!(preferences.open_now);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PreferencesRepr"))]
pub struct UserPreferences {
    /// Lowest acceptable rating, in `1.0..=5.0`.
    pub min_rating: f32,
    /// Highest acceptable price band, in `0..=4`.
    pub max_price_level: u8,
    /// The user's location (`x` = longitude, `y` = latitude).
    pub location: Coord<f64>,
    /// Cuisines the user asked for; may be empty.
    pub cuisines: HashSet<String>,
    /// Restrict results to places currently open.
    pub open_now: bool,
}

/// Raw wire shape of [`UserPreferences`]; validated via `TryFrom`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PreferencesRepr {
    min_rating: f32,
    max_price_level: u8,
    location: Coord<f64>,
    #[serde(default)]
    cuisines: HashSet<String>,
    #[serde(default)]
    open_now: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<PreferencesRepr> for UserPreferences {
    type Error = PreferencesError;

    fn try_from(repr: PreferencesRepr) -> Result<Self, PreferencesError> {
        Self::new(
            repr.min_rating,
            repr.max_price_level,
            repr.location,
            repr.cuisines,
            repr.open_now,
        )
    }
}

impl UserPreferences {
    /// Validate and construct a set of preferences.
    ///
    /// # Errors
    /// Returns [`PreferencesError`] when the rating floor or price ceiling
    /// is out of range.
    pub fn new(
        min_rating: f32,
        max_price_level: u8,
        location: Coord<f64>,
        cuisines: HashSet<String>,
        open_now: bool,
    ) -> Result<Self, PreferencesError> {
        if !(1.0..=5.0).contains(&min_rating) {
            return Err(PreferencesError::MinRatingOutOfRange { min_rating });
        }
        if max_price_level > 4 {
            return Err(PreferencesError::MaxPriceLevelOutOfRange { max_price_level });
        }
        Ok(Self {
            min_rating,
            max_price_level,
            location,
            cuisines,
            open_now,
        })
    }
}
