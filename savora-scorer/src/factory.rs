//! Select a scorer variant from an identity token.

use std::sync::Arc;

use savora_core::{DurationProvider, PreferenceStore, Scorer, UserVerifier};

use crate::{RegisteredScorer, UnregisteredScorer};

/// Build the right [`Scorer`] for a request.
///
/// The factory owns shared handles to the collaborators and is constructed
/// once at process start: plain dependency injection, no global state. A
/// token that verifies to a user id yields a [`RegisteredScorer`] bound to
/// that id; a missing, invalid, or unverifiable token falls back to an
/// [`UnregisteredScorer`]. Selection never fails.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use savora_core::test_support::{FixedDurationProvider, MemoryPreferenceStore, StaticVerifier};
/// use savora_core::UserId;
/// use savora_scorer::ScorerFactory;
///
/// let factory = ScorerFactory::new(
///     Arc::new(StaticVerifier::rejecting().with_token("tok", UserId::new("u1"))),
///     Arc::new(FixedDurationProvider::uniform(600)),
///     Arc::new(MemoryPreferenceStore::new()),
/// );
/// let _scorer = factory.for_token(Some("tok"));
/// ```
pub struct ScorerFactory {
    verifier: Arc<dyn UserVerifier>,
    durations: Arc<dyn DurationProvider>,
    preferences: Arc<dyn PreferenceStore>,
}

impl ScorerFactory {
    /// Create a factory over the given collaborators.
    #[must_use]
    pub fn new(
        verifier: Arc<dyn UserVerifier>,
        durations: Arc<dyn DurationProvider>,
        preferences: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self {
            verifier,
            durations,
            preferences,
        }
    }

    /// Return a scorer for the request's identity token, if any.
    #[must_use]
    pub fn for_token(&self, id_token: Option<&str>) -> Box<dyn Scorer> {
        match id_token.and_then(|token| self.verifier.verify(token)) {
            Some(user) => Box::new(RegisteredScorer::new(
                user,
                Arc::clone(&self.durations),
                Arc::clone(&self.preferences),
            )),
            None => Box::new(UnregisteredScorer::new(Arc::clone(&self.durations))),
        }
    }
}
