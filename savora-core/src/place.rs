//! Candidate food places fetched from the external places API.
//!
//! A [`Place`] is an immutable snapshot of one search result. Construction
//! validates the rating and price-level ranges so downstream scoring never
//! sees out-of-range values.

use geo::Coord;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable external identifier for a place.
///
/// Identifiers come from the places API and are the keys of score and
/// duration maps.
///
/// # Examples
/// ```
/// use savora_core::PlaceId;
///
/// let id = PlaceId::new("ChIJN1t_tDeuEmsR");
/// assert_eq!(id.as_str(), "ChIJN1t_tDeuEmsR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlaceId(String);

impl PlaceId {
    /// Wrap a raw identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlaceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Operating status reported by the places API.
///
/// Statuses the API does not recognise map to [`BusinessStatus::Unknown`].
///
/// # Examples
/// ```
/// use savora_core::BusinessStatus;
///
/// assert_eq!(BusinessStatus::Operational.as_str(), "OPERATIONAL");
/// assert_eq!(
///     "CLOSED_TEMPORARILY".parse::<BusinessStatus>(),
///     Ok(BusinessStatus::ClosedTemporarily),
/// );
/// assert_eq!("???".parse::<BusinessStatus>(), Ok(BusinessStatus::Unknown));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum BusinessStatus {
    /// The place is open for business.
    Operational,
    /// The place is closed but expected to reopen.
    ClosedTemporarily,
    /// The place has shut down for good.
    ClosedPermanently,
    /// The API reported no status, or one this crate does not model.
    #[default]
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl BusinessStatus {
    /// Return the status in the places API's wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Operational => "OPERATIONAL",
            Self::ClosedTemporarily => "CLOSED_TEMPORARILY",
            Self::ClosedPermanently => "CLOSED_PERMANENTLY",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for BusinessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BusinessStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "OPERATIONAL" => Self::Operational,
            "CLOSED_TEMPORARILY" => Self::ClosedTemporarily,
            "CLOSED_PERMANENTLY" => Self::ClosedPermanently,
            _ => Self::Unknown,
        })
    }
}

/// Errors returned by [`Place::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaceError {
    /// The rating fell outside the `1.0..=5.0` range.
    #[error("rating {rating} is outside the valid range 1.0..=5.0")]
    RatingOutOfRange {
        /// The rejected rating.
        rating: f32,
    },
    /// The price level fell outside the `0..=4` range.
    #[error("price level {price_level} is outside the valid range 0..=4")]
    PriceLevelOutOfRange {
        /// The rejected price level.
        price_level: u8,
    },
}

/// A candidate food place.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The type
/// has value equality across all fields and is immutable once built; the
/// places-API adapter constructs one `Place` per fetched search result.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use savora_core::{BusinessStatus, Place, PlaceId};
///
/// # fn main() -> Result<(), savora_core::PlaceError> {
/// let place = Place::new(
///     PlaceId::new("abc123"),
///     "Trattoria Luna",
///     4.5,
///     2,
///     Coord { x: -0.1, y: 51.5 },
/// )?
/// .with_business_status(BusinessStatus::Operational)
/// .with_cuisines(["italian".to_owned()]);
///
/// assert_eq!(place.name, "Trattoria Luna");
/// assert_eq!(place.cuisines, vec!["italian".to_owned()]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PlaceRepr"))]
pub struct Place {
    /// Stable external identifier.
    pub id: PlaceId,
    /// Display name.
    pub name: String,
    /// Aggregate user rating in `1.0..=5.0`.
    pub rating: f32,
    /// Price band in `0..=4`.
    pub price_level: u8,
    /// Geospatial position (`x` = longitude, `y` = latitude).
    pub location: Coord<f64>,
    /// The place's own website, possibly empty.
    pub website_url: String,
    /// The provider's page for the place, possibly empty.
    pub maps_url: String,
    /// Contact phone number, possibly empty.
    pub phone: String,
    /// Operating status at fetch time.
    pub business_status: BusinessStatus,
    /// Cuisines served, in the API's order; may be empty.
    pub cuisines: Vec<String>,
}

/// Raw wire shape of a [`Place`]; validated via `TryFrom` on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PlaceRepr {
    id: PlaceId,
    name: String,
    rating: f32,
    price_level: u8,
    location: Coord<f64>,
    #[serde(default)]
    website_url: String,
    #[serde(default)]
    maps_url: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    business_status: BusinessStatus,
    #[serde(default)]
    cuisines: Vec<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<PlaceRepr> for Place {
    type Error = PlaceError;

    fn try_from(repr: PlaceRepr) -> Result<Self, PlaceError> {
        Ok(Self::new(
            repr.id,
            repr.name,
            repr.rating,
            repr.price_level,
            repr.location,
        )?
        .with_website_url(repr.website_url)
        .with_maps_url(repr.maps_url)
        .with_phone(repr.phone)
        .with_business_status(repr.business_status)
        .with_cuisines(repr.cuisines))
    }
}

impl Place {
    /// Validate and construct a `Place`.
    ///
    /// Optional fields start empty (or [`BusinessStatus::Unknown`]) and are
    /// populated with the `with_*` methods.
    ///
    /// # Errors
    /// Returns [`PlaceError`] when the rating or price level is out of
    /// range.
    pub fn new(
        id: PlaceId,
        name: impl Into<String>,
        rating: f32,
        price_level: u8,
        location: Coord<f64>,
    ) -> Result<Self, PlaceError> {
        if !(1.0..=5.0).contains(&rating) {
            return Err(PlaceError::RatingOutOfRange { rating });
        }
        if price_level > 4 {
            return Err(PlaceError::PriceLevelOutOfRange { price_level });
        }
        Ok(Self {
            id,
            name: name.into(),
            rating,
            price_level,
            location,
            website_url: String::new(),
            maps_url: String::new(),
            phone: String::new(),
            business_status: BusinessStatus::Unknown,
            cuisines: Vec::new(),
        })
    }

    /// Set the place's own website URL.
    #[must_use]
    pub fn with_website_url(mut self, url: impl Into<String>) -> Self {
        self.website_url = url.into();
        self
    }

    /// Set the provider's page URL for the place.
    #[must_use]
    pub fn with_maps_url(mut self, url: impl Into<String>) -> Self {
        self.maps_url = url.into();
        self
    }

    /// Set the contact phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Set the operating status.
    #[must_use]
    pub const fn with_business_status(mut self, status: BusinessStatus) -> Self {
        self.business_status = status;
        self
    }

    /// Set the cuisines served by the place.
    #[must_use]
    pub fn with_cuisines<I>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.cuisines = cuisines.into_iter().collect();
        self
    }

    /// Report whether the place publishes any web presence.
    ///
    /// True when either the website or the provider page URL is non-empty.
    #[must_use]
    pub fn has_web_presence(&self) -> bool {
        !self.website_url.is_empty() || !self.maps_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample(rating: f32, price_level: u8) -> Result<Place, PlaceError> {
        Place::new(
            PlaceId::new("p1"),
            "Noodle Bar",
            rating,
            price_level,
            Coord { x: 0.0, y: 0.0 },
        )
    }

    #[rstest]
    #[case(1.0)]
    #[case(5.0)]
    #[case(3.7)]
    fn accepts_in_range_ratings(#[case] rating: f32) {
        assert!(sample(rating, 0).is_ok());
    }

    #[rstest]
    #[case(0.9)]
    #[case(5.1)]
    #[case(f32::NAN)]
    fn rejects_out_of_range_ratings(#[case] rating: f32) {
        assert!(matches!(
            sample(rating, 0),
            Err(PlaceError::RatingOutOfRange { .. })
        ));
    }

    #[rstest]
    #[case(4, true)]
    #[case(5, false)]
    fn price_level_boundary(#[case] price_level: u8, #[case] ok: bool) {
        assert_eq!(sample(3.0, price_level).is_ok(), ok);
    }

    #[rstest]
    fn optional_fields_default_to_empty() {
        let place = sample(3.0, 1).expect("valid place");
        assert!(place.website_url.is_empty());
        assert!(place.phone.is_empty());
        assert_eq!(place.business_status, BusinessStatus::Unknown);
        assert!(place.cuisines.is_empty());
        assert!(!place.has_web_presence());
    }

    #[rstest]
    #[case("", "https://maps.example/p1", true)]
    #[case("https://noodle.example", "", true)]
    #[case("", "", false)]
    fn web_presence_checks_both_urls(
        #[case] website: &str,
        #[case] maps: &str,
        #[case] expected: bool,
    ) {
        let place = sample(3.0, 1)
            .expect("valid place")
            .with_website_url(website)
            .with_maps_url(maps);
        assert_eq!(place.has_web_presence(), expected);
    }

    #[rstest]
    fn status_parsing_defaults_to_unknown() {
        let status: BusinessStatus = "CLOSED_PERMANENTLY".parse().expect("infallible");
        assert_eq!(status, BusinessStatus::ClosedPermanently);
        let odd: BusinessStatus = "closed_permanently".parse().expect("infallible");
        assert_eq!(odd, BusinessStatus::Unknown);
    }

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(
            BusinessStatus::Operational.to_string(),
            BusinessStatus::Operational.as_str()
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(r#"{"id":"p1","name":"Noodle Bar","rating":9.5,"price_level":1,"location":{"x":0.0,"y":0.0}}"#, "rating 9.5")]
    #[case(r#"{"id":"p1","name":"Noodle Bar","rating":3.0,"price_level":7,"location":{"x":0.0,"y":0.0}}"#, "price level 7")]
    fn deserialisation_enforces_the_constructor_invariants(
        #[case] json: &str,
        #[case] expected: &str,
    ) {
        let err = serde_json::from_str::<Place>(json).expect_err("invalid place must be rejected");
        assert!(
            err.to_string().contains(expected),
            "unexpected message: {err}"
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialisation_accepts_a_minimal_place() {
        let json = r#"{"id":"p1","name":"Noodle Bar","rating":4.5,"price_level":1,"location":{"x":-0.1,"y":51.5}}"#;
        let place: Place = serde_json::from_str(json).expect("valid place must deserialise");
        assert_eq!(place.id, PlaceId::new("p1"));
        assert!(place.website_url.is_empty());
        assert_eq!(place.business_status, BusinessStatus::Unknown);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialisation_round_trips() {
        let place = sample(4.0, 2)
            .expect("valid place")
            .with_website_url("https://noodle.example")
            .with_business_status(BusinessStatus::Operational)
            .with_cuisines(["ramen".to_owned()]);
        let json = serde_json::to_string(&place).expect("serialise");
        let back: Place = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(back, place);
    }
}
