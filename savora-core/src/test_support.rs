//! Test-only collaborator doubles used by unit and behaviour tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use geo::Coord;

use crate::{
    CuisineHistory, DurationError, DurationMap, DurationProvider, Feedback, Place, PlaceId,
    PlaceSource, PreferenceError, PreferenceStore, SearchError, SearchQuery, UserId, UserVerifier,
};

/// Build an operational place with the given id and rating.
///
/// # Examples
/// ```
/// use savora_core::test_support::sample_place;
///
/// let place = sample_place("p1", 4.5);
/// assert_eq!(place.id.as_str(), "p1");
/// ```
#[expect(
    clippy::expect_used,
    reason = "test fixtures fail fast on invalid ratings"
)]
#[must_use]
pub fn sample_place(id: &str, rating: f32) -> Place {
    Place::new(
        PlaceId::new(id),
        format!("Place {id}"),
        rating,
        1,
        Coord { x: 0.0, y: 0.0 },
    )
    .expect("sample place fields are valid")
    .with_business_status(crate::BusinessStatus::Operational)
}

/// Deterministic [`DurationProvider`] backed by a fixed duration table.
///
/// Places absent from the table receive the uniform duration when one is
/// configured, or the caller-supplied fallback otherwise. The provider
/// counts calls so tests can assert that collaborators were (not)
/// consulted.
#[derive(Debug, Default)]
pub struct FixedDurationProvider {
    per_place: HashMap<PlaceId, Duration>,
    uniform: Option<Duration>,
    calls: AtomicUsize,
}

impl FixedDurationProvider {
    /// Return the same duration for every place.
    #[must_use]
    pub fn uniform(seconds: u64) -> Self {
        Self {
            per_place: HashMap::new(),
            uniform: Some(Duration::from_secs(seconds)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Return per-place durations; unlisted places get the call's fallback.
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (PlaceId, u64)>,
    {
        Self {
            per_place: pairs
                .into_iter()
                .map(|(id, seconds)| (id, Duration::from_secs(seconds)))
                .collect(),
            uniform: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of [`DurationProvider::durations`] calls made so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DurationProvider for FixedDurationProvider {
    fn durations(
        &self,
        places: &[Place],
        _destination: Coord<f64>,
        fallback: Duration,
    ) -> Result<DurationMap, DurationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(places
            .iter()
            .map(|place| {
                let duration = self
                    .per_place
                    .get(&place.id)
                    .copied()
                    .or(self.uniform)
                    .unwrap_or(fallback);
                (place.id.clone(), duration)
            })
            .collect())
    }
}

/// [`DurationProvider`] that always fails at the transport level.
#[derive(Debug)]
pub struct FailingDurationProvider {
    error: DurationError,
}

impl FailingDurationProvider {
    /// Fail with a generic transport error.
    #[must_use]
    pub fn transport() -> Self {
        Self {
            error: DurationError::Transport {
                message: "connection reset".to_owned(),
            },
        }
    }

    /// Fail with a rate-limit error.
    #[must_use]
    pub const fn rate_limited() -> Self {
        Self {
            error: DurationError::RateLimited,
        }
    }
}

impl DurationProvider for FailingDurationProvider {
    fn durations(
        &self,
        _places: &[Place],
        _destination: Coord<f64>,
        _fallback: Duration,
    ) -> Result<DurationMap, DurationError> {
        Err(self.error.clone())
    }
}

#[derive(Debug, Default)]
struct StoreState {
    registered: HashSet<UserId>,
    history: HashMap<UserId, CuisineHistory>,
    feedback: Vec<Feedback>,
}

/// In-memory [`PreferenceStore`] used in tests.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    state: Mutex<StoreState>,
}

impl MemoryPreferenceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding one registered user with the given history.
    #[must_use]
    pub fn with_history<I>(user: UserId, counts: I) -> Self
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let mut state = StoreState::default();
        state.registered.insert(user.clone());
        state.history.insert(user, counts.into_iter().collect());
        Self {
            state: Mutex::new(state),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, StoreState>, PreferenceError> {
        self.state.lock().map_err(|_| PreferenceError::Backend {
            message: "preference store lock poisoned".to_owned(),
        })
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn is_registered(&self, user: &UserId) -> Result<bool, PreferenceError> {
        Ok(self.lock()?.registered.contains(user))
    }

    fn register_user(&self, user: &UserId) -> Result<(), PreferenceError> {
        self.lock()?.registered.insert(user.clone());
        Ok(())
    }

    fn record_feedback(&self, feedback: &Feedback) -> Result<(), PreferenceError> {
        let mut state = self.lock()?;
        if !state.registered.contains(&feedback.user) {
            return Err(PreferenceError::UnknownUser {
                user: feedback.user.clone(),
            });
        }
        state.feedback.push(feedback.clone());
        Ok(())
    }

    fn preferred_cuisines(&self, user: &UserId) -> Result<CuisineHistory, PreferenceError> {
        Ok(self.lock()?.history.get(user).cloned().unwrap_or_default())
    }

    fn past_recommendations(
        &self,
        user: &UserId,
        only_chosen: bool,
    ) -> Result<Vec<PlaceId>, PreferenceError> {
        let state = self.lock()?;
        let mut ids = Vec::new();
        for feedback in state.feedback.iter().filter(|f| &f.user == user) {
            if only_chosen {
                ids.extend(feedback.chosen.iter().cloned());
            } else {
                ids.extend(feedback.recommended.iter().cloned());
            }
        }
        Ok(ids)
    }
}

/// [`PreferenceStore`] whose every operation fails with a backend error.
#[derive(Debug, Default)]
pub struct FailingPreferenceStore;

impl FailingPreferenceStore {
    fn backend_error() -> PreferenceError {
        PreferenceError::Backend {
            message: "datastore unavailable".to_owned(),
        }
    }
}

impl PreferenceStore for FailingPreferenceStore {
    fn is_registered(&self, _user: &UserId) -> Result<bool, PreferenceError> {
        Err(Self::backend_error())
    }

    fn register_user(&self, _user: &UserId) -> Result<(), PreferenceError> {
        Err(Self::backend_error())
    }

    fn record_feedback(&self, _feedback: &Feedback) -> Result<(), PreferenceError> {
        Err(Self::backend_error())
    }

    fn preferred_cuisines(&self, _user: &UserId) -> Result<CuisineHistory, PreferenceError> {
        Err(Self::backend_error())
    }

    fn past_recommendations(
        &self,
        _user: &UserId,
        _only_chosen: bool,
    ) -> Result<Vec<PlaceId>, PreferenceError> {
        Err(Self::backend_error())
    }
}

/// [`UserVerifier`] backed by a fixed token table.
#[derive(Debug, Default)]
pub struct StaticVerifier {
    tokens: HashMap<String, UserId>,
}

impl StaticVerifier {
    /// Create a verifier that rejects every token.
    #[must_use]
    pub fn rejecting() -> Self {
        Self::default()
    }

    /// Accept `token` as belonging to `user`, consuming `self` for chaining.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>, user: UserId) -> Self {
        self.tokens.insert(token.into(), user);
        self
    }
}

impl UserVerifier for StaticVerifier {
    fn verify(&self, id_token: &str) -> Option<UserId> {
        self.tokens.get(id_token).cloned()
    }
}

/// In-memory [`PlaceSource`] serving a fixed candidate list.
#[derive(Debug, Default)]
pub struct MemoryPlaceSource {
    places: Vec<Place>,
}

impl MemoryPlaceSource {
    /// Create a source from a collection of places.
    #[must_use]
    pub fn with_places<I>(places: I) -> Self
    where
        I: IntoIterator<Item = Place>,
    {
        Self {
            places: places.into_iter().collect(),
        }
    }
}

impl PlaceSource for MemoryPlaceSource {
    fn search(&self, query: &SearchQuery) -> Result<Vec<Place>, SearchError> {
        Ok(self
            .places
            .iter()
            .filter(|p| p.price_level <= query.max_price_level)
            .filter(|p| {
                !query.open_now || p.business_status == crate::BusinessStatus::Operational
            })
            .cloned()
            .collect())
    }

    fn details(&self, id: &PlaceId) -> Result<Place, SearchError> {
        self.places
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| SearchError::Api {
                status: "NOT_FOUND".to_owned(),
            })
    }
}
