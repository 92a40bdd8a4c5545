//! Duration-provider trait and per-place duration map.

use std::collections::HashMap;
use std::time::Duration;

use geo::Coord;

use crate::{Place, PlaceId};

use super::error::DurationError;

/// Estimated driving durations keyed by place identifier.
pub type DurationMap = HashMap<PlaceId, Duration>;

/// Fetch estimated driving durations from each place to a destination.
///
/// Implementers must return one entry per input place. A place whose route
/// lookup reports a non-OK status maps to `fallback` rather than failing
/// the whole call; `Err` is reserved for transport- or API-level failures.
/// An empty `places` slice yields `Ok` with an empty map.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use geo::Coord;
/// use savora_core::{DurationError, DurationMap, DurationProvider, Place, PlaceId};
///
/// struct ConstantProvider;
///
/// impl DurationProvider for ConstantProvider {
///     fn durations(
///         &self,
///         places: &[Place],
///         _destination: Coord<f64>,
///         _fallback: Duration,
///     ) -> Result<DurationMap, DurationError> {
///         Ok(places
///             .iter()
///             .map(|p| (p.id.clone(), Duration::from_secs(600)))
///             .collect())
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let place = Place::new(PlaceId::new("p1"), "Cafe", 4.0, 1, Coord { x: 0.0, y: 0.0 })?;
/// let durations = ConstantProvider.durations(
///     std::slice::from_ref(&place),
///     Coord { x: 0.0, y: 0.0 },
///     Duration::from_secs(2400),
/// )?;
/// assert_eq!(durations.get(&place.id), Some(&Duration::from_secs(600)));
/// # Ok(())
/// # }
/// ```
pub trait DurationProvider: Send + Sync {
    /// Return a duration per place for driving to `destination`.
    fn durations(
        &self,
        places: &[Place],
        destination: Coord<f64>,
        fallback: Duration,
    ) -> Result<DurationMap, DurationError>;
}
