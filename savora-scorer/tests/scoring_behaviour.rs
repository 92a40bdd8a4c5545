#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for the two scorer variants.

use std::cell::{Cell, RefCell};
use std::sync::Arc;

use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use savora_core::test_support::{
    sample_place, FailingDurationProvider, FixedDurationProvider, MemoryPreferenceStore,
};
use savora_core::{DurationProvider, Place, PreferenceStore, Scorer, UserId};
use savora_scorer::{RegisteredScorer, UnregisteredScorer};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    place: RefCell<Option<Place>>,
    durations: RefCell<Option<Arc<dyn DurationProvider>>>,
    store: RefCell<Option<Arc<dyn PreferenceStore>>>,
    score: Cell<f32>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        place: RefCell::new(None),
        durations: RefCell::new(None),
        store: RefCell::new(None),
        score: Cell::new(0.0),
    }
}

fn user() -> UserId {
    UserId::new("user-1")
}

#[given("a place rated 3.0 that is 1800 seconds away")]
fn plain_place(context: &TestContext) {
    *context.place.borrow_mut() = Some(sample_place("p1", 3.0));
    *context.durations.borrow_mut() = Some(Arc::new(FixedDurationProvider::uniform(1800)));
}

#[given("a place rated 3.0 and an unreachable duration service")]
fn unreachable_durations(context: &TestContext) {
    *context.place.borrow_mut() = Some(sample_place("p1", 3.0));
    *context.durations.borrow_mut() = Some(Arc::new(FailingDurationProvider::transport()));
}

#[given("an italian place rated 4.0 that is 1200 seconds away")]
fn italian_place(context: &TestContext) {
    *context.place.borrow_mut() =
        Some(sample_place("p1", 4.0).with_cuisines(["italian".to_owned()]));
    *context.durations.borrow_mut() = Some(Arc::new(FixedDurationProvider::uniform(1200)));
}

#[given("a user who chose italian three times and sushi once")]
fn seeded_history(context: &TestContext) {
    *context.store.borrow_mut() = Some(Arc::new(MemoryPreferenceStore::with_history(
        user(),
        [("italian".to_owned(), 3), ("sushi".to_owned(), 1)],
    )));
}

#[given("a registered user with no cuisine history")]
fn empty_history(context: &TestContext) {
    *context.store.borrow_mut() = Some(Arc::new(MemoryPreferenceStore::new()));
}

fn durations(context: &TestContext) -> Arc<dyn DurationProvider> {
    context
        .durations
        .borrow()
        .as_ref()
        .cloned()
        .expect("duration provider must be initialised")
}

fn record_score(context: &TestContext, scorer: &dyn Scorer) {
    let place = context
        .place
        .borrow()
        .as_ref()
        .cloned()
        .expect("place must be initialised");
    let scores = scorer.scores(std::slice::from_ref(&place), Coord { x: 0.0, y: 0.0 });
    context
        .score
        .set(scores.get(&place.id).copied().expect("one score per place"));
}

#[when("I score it anonymously")]
fn score_anonymously(context: &TestContext) {
    let scorer = UnregisteredScorer::new(durations(context));
    record_score(context, &scorer);
}

#[when("I score it for the registered user")]
fn score_registered(context: &TestContext) {
    let store = context
        .store
        .borrow()
        .as_ref()
        .cloned()
        .expect("preference store must be initialised");
    let scorer = RegisteredScorer::new(user(), durations(context), store);
    record_score(context, &scorer);
}

#[then("the score is {expected:f32}")]
fn assert_score(expected: f32, context: &TestContext) {
    let score = context.score.get();
    assert!(
        (score - expected).abs() < 0.000_1_f32,
        "expected {expected}, got {score}"
    );
}

#[scenario(path = "tests/features/scoring.feature", index = 0)]
fn anonymous_blends_rating_and_duration(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/scoring.feature", index = 1)]
fn anonymous_falls_back_to_rating(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/scoring.feature", index = 2)]
fn registered_blends_affinity(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/scoring.feature", index = 3)]
fn registered_without_history_matches_anonymous(context: TestContext) {
    let _ = context;
}
