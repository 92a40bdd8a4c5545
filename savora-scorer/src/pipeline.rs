//! End-to-end recommendation flow: filter, rank, truncate.

use geo::Coord;
use savora_core::{Place, Scorer};

use crate::rank::{filter, random_order, rank_by_score};
use crate::FilterOptions;

/// Produce a ranked shortlist of at most `limit` places.
///
/// Applies the business filters, scores the survivors in one batch, and
/// keeps the top of the descending-score ordering.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use geo::Coord;
/// use savora_core::test_support::{sample_place, FixedDurationProvider};
/// use savora_scorer::{pipeline, FilterOptions, UnregisteredScorer};
///
/// let scorer = UnregisteredScorer::new(Arc::new(FixedDurationProvider::uniform(600)));
/// let places = vec![sample_place("a", 4.0), sample_place("b", 5.0)];
/// let shortlist = pipeline::recommend(
///     places,
///     Coord { x: 0.0, y: 0.0 },
///     &scorer,
///     &FilterOptions::new(1.0),
///     1,
/// );
/// assert_eq!(shortlist.len(), 1);
/// assert_eq!(shortlist[0].id.as_str(), "b");
/// ```
#[must_use]
pub fn recommend(
    places: Vec<Place>,
    user_location: Coord<f64>,
    scorer: &dyn Scorer,
    options: &FilterOptions,
    limit: usize,
) -> Vec<Place> {
    let mut ranked = rank_by_score(filter(places, options), user_location, scorer);
    ranked.truncate(limit);
    ranked
}

/// Produce a randomly ordered shortlist of at most `limit` places.
///
/// The baseline ordering: same filters as [`recommend`], then a uniform
/// shuffle instead of scoring.
#[must_use]
pub fn recommend_random(places: Vec<Place>, options: &FilterOptions, limit: usize) -> Vec<Place> {
    let mut shuffled = random_order(filter(places, options));
    shuffled.truncate(limit);
    shuffled
}
