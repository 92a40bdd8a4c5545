//! Facade crate for the Savora recommendation engine.
//!
//! This crate re-exports the core domain types alongside the scorer
//! variants and the filter/rank pipeline.

#![forbid(unsafe_code)]

pub use savora_core::{
    BusinessStatus, CuisineHistory, DurationError, DurationMap, DurationProvider, Feedback,
    FeedbackError, Place, PlaceError, PlaceId, PlaceSource, PreferenceError, PreferenceStore,
    PreferencesError, ScoreMap, Scorer, SearchError, SearchQuery, UserId, UserPreferences,
    UserVerifier,
};

pub use savora_scorer::{
    pipeline, rank, FilterOptions, RegisteredScorer, ScorerFactory, UnregisteredScorer,
    MAX_DURATION,
};
