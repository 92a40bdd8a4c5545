//! Score candidate places for a recommendation request.
//!
//! The [`Scorer`] trait assigns a relevance score to each [`Place`] in a
//! batch, given the requesting user's location. Scoring is the one step
//! where rating, travel time, and cuisine affinity meet; implementations
//! differ on whether a verified user (and hence cuisine history) is
//! available.

use std::collections::HashMap;

use geo::Coord;

use crate::{Place, PlaceId};

/// Relevance scores keyed by place identifier, one entry per input place.
pub type ScoreMap = HashMap<PlaceId, f32>;

/// Calculate relevance scores for a batch of places.
///
/// Higher scores indicate a better match. Implementations must be
/// thread-safe (`Send + Sync`) so scorers can serve concurrent requests.
///
/// The method is infallible: collaborator failures (for example a duration
/// lookup that cannot be completed) must degrade to a simpler, still-valid
/// scoring strategy instead of propagating. An empty `places` slice yields
/// an empty map, and no collaborator calls are required for it.
///
/// Implementations must:
/// - return exactly one entry per input place;
/// - produce finite (`f32::is_finite`) scores;
/// - normalise results to the range `0.0..=1.0`.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use savora_core::{Place, PlaceId, ScoreMap, Scorer};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn scores(&self, places: &[Place], _user_location: Coord<f64>) -> ScoreMap {
///         places.iter().map(|p| (p.id.clone(), 1.0)).collect()
///     }
/// }
///
/// # fn main() -> Result<(), savora_core::PlaceError> {
/// let place = Place::new(PlaceId::new("p1"), "Cafe", 4.0, 1, Coord { x: 0.0, y: 0.0 })?;
/// let scores = UnitScorer.scores(std::slice::from_ref(&place), Coord { x: 0.0, y: 0.0 });
/// assert_eq!(scores.get(&place.id), Some(&1.0));
/// # Ok(())
/// # }
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score per place for a user at `user_location`.
    fn scores(&self, places: &[Place], user_location: Coord<f64>) -> ScoreMap;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    #[must_use]
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}
