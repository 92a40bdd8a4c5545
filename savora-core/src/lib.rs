//! Core domain types for the Savora recommendation engine.
//!
//! The crate defines the immutable value types exchanged between the
//! recommendation pipeline and its collaborators (candidate [`Place`]s,
//! [`UserPreferences`], and per-user [`CuisineHistory`]) together with the
//! trait seams behind which the external services live:
//!
//! - [`DurationProvider`] estimates driving durations from candidate places
//!   to the user's location.
//! - [`PreferenceStore`] persists registrations, feedback, and historical
//!   cuisine choices.
//! - [`UserVerifier`] resolves an opaque identity token to a [`UserId`].
//! - [`PlaceSource`] searches the external places API.
//! - [`Scorer`] assigns relevance scores used to rank candidates.
//!
//! All value types validate their invariants at construction and are safe to
//! share across threads; no shared mutable state exists between requests.

#![forbid(unsafe_code)]

mod account;
mod history;
mod place;
mod preferences;
pub mod scorer;
mod source;
mod store;
mod travel;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use account::{UserId, UserVerifier};
pub use history::CuisineHistory;
pub use place::{BusinessStatus, Place, PlaceError, PlaceId};
pub use preferences::{PreferencesError, UserPreferences};
pub use scorer::{ScoreMap, Scorer};
pub use source::{PlaceSource, SearchError, SearchQuery};
pub use store::{Feedback, FeedbackError, PreferenceError, PreferenceStore};
pub use travel::{DurationError, DurationMap, DurationProvider};
