//! Search seam over the external places API.
//!
//! The real HTTP client lives outside this crate; the engine sees only the
//! [`PlaceSource`] trait. Unlike scoring, fetch failures here are surfaced
//! to the caller as typed errors rather than silently degraded.

use geo::Coord;
use thiserror::Error;

use crate::{Place, PlaceId};

/// Parameters for a places search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// Free-text keyword, e.g. a cuisine or dish.
    pub keyword: String,
    /// Centre of the search (`x` = longitude, `y` = latitude).
    pub location: Coord<f64>,
    /// Search radius in metres.
    pub radius_metres: u32,
    /// Highest acceptable price band, in `0..=4`.
    pub max_price_level: u8,
    /// Restrict results to places currently open.
    pub open_now: bool,
}

/// Errors from [`PlaceSource`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The request never completed (I/O failure, timeout, DNS, ...).
    #[error("places request failed: {message}")]
    Transport {
        /// Human-readable description from the underlying client.
        message: String,
    },
    /// The service answered with a non-OK status.
    #[error("places service returned status {status}")]
    Api {
        /// The service's status string.
        status: String,
    },
}

/// Query the external places API.
pub trait PlaceSource: Send + Sync {
    /// Return candidate places matching `query`.
    ///
    /// # Errors
    /// Returns [`SearchError`] on transport or API failure.
    fn search(&self, query: &SearchQuery) -> Result<Vec<Place>, SearchError>;

    /// Return the full details for a single place.
    ///
    /// # Errors
    /// Returns [`SearchError`] on transport or API failure, including an
    /// unknown id.
    fn details(&self, id: &PlaceId) -> Result<Place, SearchError>;
}
