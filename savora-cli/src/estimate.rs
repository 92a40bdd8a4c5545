//! Offline travel-time estimation from great-circle distance.

use std::time::Duration;

use geo::Coord;
use savora_core::{DurationError, DurationMap, DurationProvider, Place};

/// Kilometres per degree of latitude; longitude shrinks with latitude.
const KM_PER_DEGREE: f64 = 111.0;

/// [`DurationProvider`] that estimates driving time from straight-line
/// distance at a fixed average speed.
///
/// A stand-in for a live distance-matrix service: deterministic, needs no
/// network, and close enough for ranking. Places whose coordinates are
/// not finite, or so remote the estimate cannot be represented as a
/// [`Duration`], receive the caller-supplied fallback.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use geo::Coord;
/// use savora_cli::GreatCircleDurations;
/// use savora_core::test_support::sample_place;
/// use savora_core::DurationProvider;
///
/// let provider = GreatCircleDurations::with_speed(111.0);
/// let place = sample_place("here", 4.0);
/// let durations = provider
///     .durations(&[place], Coord { x: 0.0, y: 0.0 }, Duration::from_secs(600))
///     .unwrap();
/// assert_eq!(durations.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GreatCircleDurations {
    average_speed_kmh: f64,
}

impl GreatCircleDurations {
    /// Create an estimator with the given average speed in km/h.
    #[must_use]
    pub const fn with_speed(average_speed_kmh: f64) -> Self {
        Self { average_speed_kmh }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "distance and speed maths are inherently floating point"
    )]
    fn estimate(&self, from: Coord<f64>, to: Coord<f64>) -> Option<Duration> {
        // Equirectangular approximation: adequate at shortlist scale.
        let dx = (from.x - to.x) * to.y.to_radians().cos();
        let dy = from.y - to.y;
        let distance_km = dx.hypot(dy) * KM_PER_DEGREE;
        let seconds = distance_km / self.average_speed_kmh * 3600.0;
        // Rejects negative, non-finite, and overflowing estimates alike.
        Duration::try_from_secs_f64(seconds).ok()
    }
}

impl Default for GreatCircleDurations {
    /// Average urban driving speed of 30 km/h.
    fn default() -> Self {
        Self::with_speed(30.0)
    }
}

impl DurationProvider for GreatCircleDurations {
    fn durations(
        &self,
        places: &[Place],
        destination: Coord<f64>,
        fallback: Duration,
    ) -> Result<DurationMap, DurationError> {
        if !self.average_speed_kmh.is_finite() || self.average_speed_kmh <= 0.0 {
            return Err(DurationError::InvalidRequest {
                message: format!("average speed must be positive, got {}", self.average_speed_kmh),
            });
        }
        Ok(places
            .iter()
            .map(|place| {
                let duration = self
                    .estimate(place.location, destination)
                    .unwrap_or(fallback);
                (place.id.clone(), duration)
            })
            .collect())
    }
}
