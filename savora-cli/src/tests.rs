//! Unit tests for argument parsing, place decoding, and shortlisting.

use super::*;
use geo::Coord;
use rstest::rstest;
use savora_core::test_support::sample_place;
use savora_core::DurationProvider;
use std::time::Duration;

fn recommend_args(places: &str) -> RecommendArgs {
    RecommendArgs {
        places: PathBuf::from(places),
        min_rating: 1.0,
        limit: 10,
        require_website: false,
        dedupe_branches: false,
        random: false,
        longitude: 0.0,
        latitude: 0.0,
        average_speed_kmh: 30.0,
    }
}

#[rstest]
fn recommend_parses_with_defaults() {
    let cli = Cli::try_parse_from(["savora", "recommend", "--places", "places.json"])
        .expect("defaults should parse");
    let Command::Recommend(args) = cli.command;
    assert_eq!(args.places, PathBuf::from("places.json"));
    assert!((args.min_rating - 1.0).abs() < f32::EPSILON);
    assert_eq!(args.limit, 10);
    assert!(!args.require_website);
    assert!(!args.random);
}

#[rstest]
fn recommend_parses_explicit_flags() {
    let cli = Cli::try_parse_from([
        "savora",
        "recommend",
        "--places",
        "places.json",
        "--min-rating",
        "4.5",
        "--limit",
        "3",
        "--require-website",
        "--dedupe-branches",
        "--longitude",
        "-0.12",
        "--latitude",
        "51.5",
    ])
    .expect("explicit flags should parse");
    let Command::Recommend(args) = cli.command;
    assert!((args.min_rating - 4.5).abs() < f32::EPSILON);
    assert_eq!(args.limit, 3);
    assert!(args.require_website);
    assert!(args.dedupe_branches);
    assert!((args.longitude - -0.12).abs() < f64::EPSILON);
    assert!((args.latitude - 51.5).abs() < f64::EPSILON);
}

#[rstest]
fn recommend_requires_a_places_path() {
    let err = Cli::try_parse_from(["savora", "recommend"])
        .expect_err("missing --places should fail");
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[rstest]
fn places_decode_from_a_minimal_json_array() {
    let text = r#"[
        {
            "id": "p1",
            "name": "Curry House",
            "rating": 4.5,
            "price_level": 2,
            "location": { "x": -0.12, "y": 51.5 }
        }
    ]"#;
    let places = parse_places(text).expect("minimal place should decode");
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].id.as_str(), "p1");
    assert!(places[0].website_url.is_empty());
    assert!(places[0].cuisines.is_empty());
}

#[rstest]
fn malformed_json_is_rejected() {
    assert!(parse_places("not json").is_err());
}

#[rstest]
fn out_of_range_ratings_are_rejected() {
    let text = r#"[
        {
            "id": "p1",
            "name": "Curry House",
            "rating": 9.5,
            "price_level": 2,
            "location": { "x": -0.12, "y": 51.5 }
        }
    ]"#;
    let err = parse_places(text).expect_err("invalid rating must not produce a place");
    assert!(
        err.to_string().contains("rating 9.5"),
        "unexpected message: {err}"
    );
}

#[rstest]
fn shortlist_prefers_closer_places_at_equal_rating() {
    let mut near = sample_place("near", 4.0);
    near.location = Coord { x: 0.0, y: 0.05 };
    let mut far = sample_place("far", 4.0);
    far.location = Coord { x: 0.0, y: 0.5 };

    let shortlist = build_shortlist(vec![far, near], &recommend_args("unused"));
    let ids: Vec<&str> = shortlist.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["near", "far"]);
}

#[rstest]
fn shortlist_applies_the_rating_floor_and_limit() {
    let places = vec![
        sample_place("low", 2.0),
        sample_place("best", 5.0),
        sample_place("good", 4.0),
    ];
    let mut args = recommend_args("unused");
    args.min_rating = 3.0;
    args.limit = 1;
    let shortlist = build_shortlist(places, &args);
    assert_eq!(shortlist.len(), 1);
    assert_eq!(shortlist[0].id.as_str(), "best");
}

#[rstest]
fn random_shortlist_still_respects_filters() {
    let places = vec![sample_place("keep", 4.0), sample_place("drop", 2.0)];
    let mut args = recommend_args("unused");
    args.min_rating = 3.0;
    args.random = true;
    let shortlist = build_shortlist(places, &args);
    assert_eq!(shortlist.len(), 1);
    assert_eq!(shortlist[0].id.as_str(), "keep");
}

#[rstest]
fn one_degree_of_latitude_at_matching_speed_takes_an_hour() {
    let provider = GreatCircleDurations::with_speed(111.0);
    let mut place = sample_place("p", 4.0);
    place.location = Coord { x: 0.0, y: 1.0 };
    let durations = provider
        .durations(&[place], Coord { x: 0.0, y: 0.0 }, Duration::ZERO)
        .expect("estimation should succeed");
    let duration = durations
        .values()
        .next()
        .copied()
        .expect("one duration per place");
    assert!((duration.as_secs_f64() - 3600.0).abs() < 1.0);
}

#[rstest]
fn non_finite_coordinates_fall_back() {
    let provider = GreatCircleDurations::default();
    let mut place = sample_place("p", 4.0);
    place.location = Coord {
        x: f64::NAN,
        y: 0.0,
    };
    let fallback = Duration::from_secs(900);
    let durations = provider
        .durations(&[place], Coord { x: 0.0, y: 0.0 }, fallback)
        .expect("estimation should succeed");
    assert_eq!(durations.values().next().copied(), Some(fallback));
}

#[rstest]
fn overflowing_estimates_fall_back() {
    let provider = GreatCircleDurations::default();
    let mut place = sample_place("p", 4.0);
    // Finite but absurd input, e.g. a corrupt longitude in the JSON file.
    place.location = Coord { x: 1e300, y: 0.0 };
    let fallback = Duration::from_secs(900);
    let durations = provider
        .durations(&[place], Coord { x: 0.0, y: 0.0 }, fallback)
        .expect("estimation should succeed");
    assert_eq!(durations.values().next().copied(), Some(fallback));
}

#[rstest]
#[case(0.0)]
#[case(-5.0)]
#[case(f64::NAN)]
fn non_positive_speeds_are_rejected(#[case] speed: f64) {
    let provider = GreatCircleDurations::with_speed(speed);
    let err = provider
        .durations(&[], Coord { x: 0.0, y: 0.0 }, Duration::ZERO)
        .expect_err("invalid speed should error");
    assert!(matches!(err, savora_core::DurationError::InvalidRequest { .. }));
}

#[rstest]
fn missing_places_file_reports_the_path() {
    let err = load_places(&PathBuf::from("/definitely/not/here.json"))
        .expect_err("missing file should error");
    match err {
        CliError::ReadPlaces { path, .. } => {
            assert_eq!(path, PathBuf::from("/definitely/not/here.json"));
        }
        other => panic!("expected ReadPlaces, found {other:?}"),
    }
}
