//! Personalised scoring for verified users with cuisine history.

use std::sync::Arc;

use geo::Coord;
use savora_core::{
    CuisineHistory, DurationProvider, Place, PreferenceStore, ScoreMap, Scorer, UserId,
};

use crate::unregistered::{duration_component, rating_component};
use crate::{UnregisteredScorer, MAX_DURATION};

const RATING_WEIGHT: f32 = 0.5;
const DURATION_WEIGHT: f32 = 0.3;
const AFFINITY_WEIGHT: f32 = 0.2;

// Weights when the duration lookup fails: the duration term is dropped and
// the remainder goes to the rating.
const FALLBACK_RATING_WEIGHT: f32 = 0.7;
const FALLBACK_AFFINITY_WEIGHT: f32 = 0.3;

/// Scorer bound to a verified user.
///
/// Blends the normalised rating (weight 0.5), driving-duration
/// desirability (weight 0.3), and the user's cuisine affinity
/// (weight 0.2). A user without any recorded cuisine history carries no
/// affinity signal, so scoring delegates entirely to
/// [`UnregisteredScorer`]; a failed duration lookup drops the duration
/// term and reweights to rating 0.7 / affinity 0.3. Neither condition
/// surfaces an error.
#[derive(Clone)]
pub struct RegisteredScorer {
    user: UserId,
    durations: Arc<dyn DurationProvider>,
    preferences: Arc<dyn PreferenceStore>,
}

impl RegisteredScorer {
    /// Create a scorer bound to `user`.
    #[must_use]
    pub fn new(
        user: UserId,
        durations: Arc<dyn DurationProvider>,
        preferences: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self {
            user,
            durations,
            preferences,
        }
    }

    /// The user this scorer is bound to.
    #[must_use]
    pub const fn user(&self) -> &UserId {
        &self.user
    }

    /// Relative preference strength for the place's best-matching cuisine.
    ///
    /// Callers guarantee `history.total() > 0`.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "affinity is a ratio of small per-user counts"
    )]
    fn affinity(history: &CuisineHistory, place: &Place) -> f32 {
        let best = history.best_count(&place.cuisines) as f32;
        let total = history.total() as f32;
        best / total
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "scoring is a weighted sum of normalised components"
    )]
    fn blend(place: &Place, duration: std::time::Duration, history: &CuisineHistory) -> f32 {
        RATING_WEIGHT * rating_component(place)
            + DURATION_WEIGHT * duration_component(duration)
            + AFFINITY_WEIGHT * Self::affinity(history, place)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "scoring is a weighted sum of normalised components"
    )]
    fn blend_without_duration(place: &Place, history: &CuisineHistory) -> f32 {
        FALLBACK_RATING_WEIGHT * rating_component(place)
            + FALLBACK_AFFINITY_WEIGHT * Self::affinity(history, place)
    }
}

impl Scorer for RegisteredScorer {
    fn scores(&self, places: &[Place], user_location: Coord<f64>) -> ScoreMap {
        if places.is_empty() {
            return ScoreMap::new();
        }
        // One history read per batch; the same history applies to every place.
        let history = match self.preferences.preferred_cuisines(&self.user) {
            Ok(history) => history,
            Err(err) => {
                log::warn!(
                    "cuisine history read failed for {user}, scoring without affinity: {err}",
                    user = self.user
                );
                CuisineHistory::default()
            }
        };
        if history.total() == 0 {
            // No affinity signal at all; score as an anonymous request.
            return UnregisteredScorer::new(Arc::clone(&self.durations))
                .scores(places, user_location);
        }
        match self.durations.durations(places, user_location, MAX_DURATION) {
            Ok(durations) => places
                .iter()
                .map(|place| {
                    let duration = durations.get(&place.id).copied().unwrap_or(MAX_DURATION);
                    (
                        place.id.clone(),
                        Self::sanitise(Self::blend(place, duration, &history)),
                    )
                })
                .collect(),
            Err(err) => {
                log::warn!("duration lookup failed, dropping the duration term: {err}");
                places
                    .iter()
                    .map(|place| {
                        (
                            place.id.clone(),
                            Self::sanitise(Self::blend_without_duration(place, &history)),
                        )
                    })
                    .collect()
            }
        }
    }
}
