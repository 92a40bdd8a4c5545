//! Scoring and ranking for Savora place recommendations.
//!
//! The crate provides the two [`Scorer`](savora_core::Scorer)
//! implementations, [`UnregisteredScorer`] for anonymous requests and
//! [`RegisteredScorer`] for verified users with cuisine history, along
//! with the [`ScorerFactory`] that picks between them, the pure
//! filter/sort functions in [`rank`], and the end-to-end
//! [`pipeline::recommend`] flow.
//!
//! Scoring never fails: collaborator outages degrade to a simpler,
//! still-valid ranking (rating only, or rating plus cuisine affinity) and
//! are logged at `warn` level.

#![forbid(unsafe_code)]

use std::time::Duration;

mod factory;
pub mod pipeline;
pub mod rank;
mod registered;
mod unregistered;

pub use factory::ScorerFactory;
pub use rank::FilterOptions;
pub use registered::RegisteredScorer;
pub use unregistered::UnregisteredScorer;

/// Driving durations at or beyond this cap contribute nothing to a score.
///
/// 40 minutes; the same value doubles as the fallback duration for places
/// the distance service cannot route.
pub const MAX_DURATION: Duration = Duration::from_secs(2400);
