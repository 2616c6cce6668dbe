use std::fs;
use std::path::PathBuf;

use ow_playtime::analysis::extract::{extract_all_modes_time, extract_mode_time};
use ow_playtime::api::models::parse_complete_stats;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_complete_stats_fixture() {
    let raw = read_fixture("complete_stats.json");
    let stats = parse_complete_stats(&raw).expect("fixture should parse");
    assert_eq!(stats.private, Some(false));
    assert_eq!(stats.modes().count(), 2);
}

#[test]
fn extracts_quick_play_times() {
    let raw = read_fixture("complete_stats.json");
    let stats = parse_complete_stats(&raw).expect("fixture should parse");
    let quick = stats.quick_play_stats.as_ref().expect("quick play block");

    let times = extract_mode_time(quick);
    assert_eq!(times.get("Ana"), Some(&1300));
    assert_eq!(times.get("Reinhardt"), Some(&725));
    assert_eq!(times.get("allHeroes"), Some(&5892));
    assert!(!times.contains_key("Tracer"));
    assert!(!times.contains_key("Echo"));
}

#[test]
fn sums_quick_play_and_competitive() {
    let raw = read_fixture("complete_stats.json");
    let stats = parse_complete_stats(&raw).expect("fixture should parse");

    let times = extract_all_modes_time(&stats);
    assert_eq!(times.get("Ana"), Some(&(1300 + 325)));
    assert_eq!(times.get("Zarya"), Some(&290));
    assert_eq!(times.get("allHeroes"), Some(&(5892 + 1800)));
    assert_eq!(times.get("lucio"), Some(&60));
    assert_eq!(times.len(), 5);
}

#[test]
fn private_profile_has_no_times() {
    let raw = read_fixture("private_profile.json");
    let stats = parse_complete_stats(&raw).expect("fixture should parse");
    assert_eq!(stats.private, Some(true));
    assert!(extract_all_modes_time(&stats).is_empty());
}

#[test]
fn wrong_shaped_payload_is_an_error() {
    assert!(parse_complete_stats(r#"{"quickPlayStats": "nope"}"#).is_err());
    assert!(parse_complete_stats("<html>rate limited</html>").is_err());
}
