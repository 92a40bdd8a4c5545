//! Pure filtering and ordering over candidate lists.
//!
//! These functions do no I/O and operate on lists the size of one API
//! results page. All of them preserve the caller-supplied input order
//! except where ordering is their entire purpose.

use std::cmp::Ordering;
use std::collections::HashSet;

use geo::Coord;
use rand::seq::SliceRandom;
use rand::Rng;
use savora_core::{BusinessStatus, Place, Scorer};

/// Business filters applied before ranking.
///
/// # Examples
/// ```
/// use savora_scorer::FilterOptions;
///
/// let options = FilterOptions::new(4.0)
///     .with_require_website(true)
///     .with_dedupe_branches(true);
/// assert_eq!(options.min_rating, 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    /// Lowest acceptable rating; compared raw, without rounding.
    pub min_rating: f32,
    /// Drop places with neither a website nor a provider page.
    pub require_website: bool,
    /// Keep only the first-seen place per exact name.
    pub dedupe_branches: bool,
}

impl FilterOptions {
    /// Create options with the given rating floor and no other filters.
    #[must_use]
    pub const fn new(min_rating: f32) -> Self {
        Self {
            min_rating,
            require_website: false,
            dedupe_branches: false,
        }
    }

    /// Toggle the web-presence filter, consuming `self` for chaining.
    #[must_use]
    pub const fn with_require_website(mut self, require_website: bool) -> Self {
        self.require_website = require_website;
        self
    }

    /// Toggle branch deduplication, consuming `self` for chaining.
    #[must_use]
    pub const fn with_dedupe_branches(mut self, dedupe_branches: bool) -> Self {
        self.dedupe_branches = dedupe_branches;
        self
    }
}

impl Default for FilterOptions {
    /// Accept every rating; no website or branch filtering.
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Apply the business filters, preserving input order.
///
/// Keeps operational places rated at or above the floor; optionally drops
/// places without any web presence and collapses same-name branches to
/// the first-seen representative.
///
/// # Examples
/// ```
/// use savora_core::test_support::sample_place;
/// use savora_scorer::{rank, FilterOptions};
///
/// let places = vec![sample_place("a", 5.0), sample_place("b", 4.0)];
/// let kept = rank::filter(places, &FilterOptions::new(5.0));
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].id.as_str(), "a");
/// ```
#[must_use]
pub fn filter(places: Vec<Place>, options: &FilterOptions) -> Vec<Place> {
    let mut seen_names: HashSet<String> = HashSet::new();
    places
        .into_iter()
        .filter(|place| place.business_status == BusinessStatus::Operational)
        .filter(|place| place.rating >= options.min_rating)
        .filter(|place| !options.require_website || place.has_web_presence())
        .filter(|place| !options.dedupe_branches || seen_names.insert(place.name.clone()))
        .collect()
}

/// Order places by descending score for a user at `user_location`.
///
/// Makes a single [`Scorer::scores`] call for the whole batch. Ties keep
/// their input order (the sort is stable), which makes results
/// deterministic for equal scores.
#[must_use]
pub fn rank_by_score(
    mut places: Vec<Place>,
    user_location: Coord<f64>,
    scorer: &dyn Scorer,
) -> Vec<Place> {
    let scores = scorer.scores(&places, user_location);
    places.sort_by(|a, b| {
        let score_a = scores.get(&a.id).copied().unwrap_or(0.0);
        let score_b = scores.get(&b.id).copied().unwrap_or(0.0);
        // Scores are sanitised and therefore finite.
        score_b.partial_cmp(&score_a).unwrap_or(Ordering::Equal)
    });
    places
}

/// Return the places in a uniformly random order.
///
/// Used as the baseline ordering; not reproducible across calls.
#[must_use]
pub fn random_order(places: Vec<Place>) -> Vec<Place> {
    random_order_with(places, &mut rand::thread_rng())
}

/// Shuffle with a caller-supplied generator, for deterministic tests.
#[must_use]
pub fn random_order_with<R: Rng + ?Sized>(mut places: Vec<Place>, rng: &mut R) -> Vec<Place> {
    places.shuffle(rng);
    places
}
