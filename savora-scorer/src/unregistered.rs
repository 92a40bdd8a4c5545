//! Rating-and-distance scoring for anonymous requests.

use std::sync::Arc;
use std::time::Duration;

use geo::Coord;
use savora_core::{DurationProvider, Place, ScoreMap, Scorer};

use crate::MAX_DURATION;

const RATING_WEIGHT: f32 = 0.7;
const DURATION_WEIGHT: f32 = 0.3;
const RATING_CEILING: f32 = 5.0;

/// Normalised rating in `0.0..=1.0`.
#[expect(
    clippy::float_arithmetic,
    reason = "rating normalisation divides by the rating ceiling"
)]
pub(crate) fn rating_component(place: &Place) -> f32 {
    place.rating / RATING_CEILING
}

/// Desirability of a driving duration, linear from 1 at zero to 0 at the
/// [`MAX_DURATION`] cap; never negative.
#[expect(
    clippy::float_arithmetic,
    reason = "duration desirability interpolates within the cap"
)]
pub(crate) fn duration_component(duration: Duration) -> f32 {
    (1.0 - duration.as_secs_f32() / MAX_DURATION.as_secs_f32()).max(0.0)
}

/// Scorer for requests without a verified user.
///
/// Blends the normalised rating (weight 0.7) with driving-duration
/// desirability (weight 0.3). When the duration lookup fails at the
/// transport level the scorer degrades to rating-only scores instead of
/// propagating the failure.
#[derive(Clone)]
pub struct UnregisteredScorer {
    durations: Arc<dyn DurationProvider>,
}

impl UnregisteredScorer {
    /// Create a scorer over the given duration provider.
    #[must_use]
    pub fn new(durations: Arc<dyn DurationProvider>) -> Self {
        Self { durations }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "scoring is a weighted sum of normalised components"
    )]
    fn blend(place: &Place, duration: Duration) -> f32 {
        RATING_WEIGHT * rating_component(place) + DURATION_WEIGHT * duration_component(duration)
    }
}

impl Scorer for UnregisteredScorer {
    fn scores(&self, places: &[Place], user_location: Coord<f64>) -> ScoreMap {
        if places.is_empty() {
            return ScoreMap::new();
        }
        match self.durations.durations(places, user_location, MAX_DURATION) {
            Ok(durations) => places
                .iter()
                .map(|place| {
                    let duration = durations.get(&place.id).copied().unwrap_or(MAX_DURATION);
                    (place.id.clone(), Self::sanitise(Self::blend(place, duration)))
                })
                .collect(),
            Err(err) => {
                log::warn!("duration lookup failed, scoring by rating only: {err}");
                places
                    .iter()
                    .map(|place| (place.id.clone(), Self::sanitise(rating_component(place))))
                    .collect()
            }
        }
    }
}
