// Runs the dashboard front end end-to-end against the CSV fixtures shipped
// with ipl-core.

use clap::Parser;
use ipl_dash::cli::Cli;
use std::fs;
use std::path::{Path, PathBuf};

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../ipl-core/tests/fixtures");
const DEFAULTS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../defaults");

/// Fresh base dir with `defaults/` copied in, so first-run setup is exercised.
fn base_dir(name: &str) -> PathBuf {
    let tmp = std::env::temp_dir().join(name);
    let _ = fs::remove_dir_all(&tmp);
    fs::create_dir_all(tmp.join("defaults")).unwrap();
    fs::copy(
        format!("{DEFAULTS}/dashboard.toml"),
        tmp.join("defaults/dashboard.toml"),
    )
    .unwrap();
    tmp
}

fn run(base: &Path, args: &[&str]) -> anyhow::Result<String> {
    let matches = format!("{FIXTURES}/matches.csv");
    let deliveries = format!("{FIXTURES}/deliveries.csv");
    let base = base.display().to_string();
    let mut argv = vec![
        "ipl-dash",
        "--base-dir",
        base.as_str(),
        "--matches",
        matches.as_str(),
        "--deliveries",
        deliveries.as_str(),
    ];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    let mut out = Vec::new();
    ipl_dash::run(&cli, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn home_view_as_text() {
    let base = base_dir("ipl_dash_test_home");
    let text = run(&base, &["home"]).unwrap();
    assert!(text.contains("Total Matches  5"));
    assert!(text.contains("Total Seasons  3"));
    assert!(text.contains("No Result"));
    assert!(base.join("config/dashboard.toml").exists());
    let _ = fs::remove_dir_all(&base);
}

#[test]
fn home_view_as_json() {
    let base = base_dir("ipl_dash_test_home_json");
    let json = run(&base, &["--format", "json", "home"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["view"], "home");
    assert_eq!(value["total_matches"], 5);
    assert_eq!(value["toss_impact"]["toss_winner_won"], 1);
    assert_eq!(value["toss_impact"]["toss_winner_lost"], 3);
    assert_eq!(value["matches_per_season"][0]["label"], "2007/08");
    assert_eq!(value["matches_per_season"][0]["value"], 3);
    let _ = fs::remove_dir_all(&base);
}

#[test]
fn team_view_defaults_to_first_team() {
    let base = base_dir("ipl_dash_test_team_default");
    let json = run(&base, &["--format", "json", "team"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["team"], "Delhi Daredevils");
    assert_eq!(value["summary"]["matches"], 2);
    assert_eq!(value["summary"]["wins"], 1);
    assert_eq!(value["summary"]["win_rate"], 50.0);
    let _ = fs::remove_dir_all(&base);
}

#[test]
fn team_view_for_unknown_team_is_empty() {
    let base = base_dir("ipl_dash_test_team_unknown");
    let text = run(&base, &["team", "Gujarat Lions"]).unwrap();
    assert!(text.contains("Total Matches  0"));
    assert!(text.contains("Win Rate       0.0%"));
    assert!(text.contains("(no data)"));
    let _ = fs::remove_dir_all(&base);
}

#[test]
fn players_view_respects_top() {
    let base = base_dir("ipl_dash_test_players");
    let json = run(&base, &["--format", "json", "players", "--top", "5"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let scorers = value["top_run_scorers"].as_array().unwrap();
    assert_eq!(scorers.len(), 5);
    assert_eq!(scorers[0]["label"], "BB McCullum");
    assert_eq!(scorers[0]["value"], 6);
    assert_eq!(scorers[1]["label"], "AB de Villiers");
    assert_eq!(scorers[3]["label"], "SC Ganguly");
    assert_eq!(scorers[4]["label"], "T Kohli");
    assert_eq!(scorers[4]["value"], 0);
    let takers = value["top_wicket_takers"].as_array().unwrap();
    assert_eq!(takers.len(), 3);
    let _ = fs::remove_dir_all(&base);
}

#[test]
fn players_top_outside_range_is_rejected() {
    let base = base_dir("ipl_dash_test_players_range");
    let err = run(&base, &["players", "--top", "50"]).unwrap_err();
    assert!(format!("{err:#}").contains("limits.top_players"));
    let _ = fs::remove_dir_all(&base);
}

#[test]
fn distinct_with_unknown_field_fails() {
    let base = base_dir("ipl_dash_test_distinct");
    assert_eq!(run(&base, &["distinct", "venue"]).unwrap(), "venue  4\n\n");
    let err = run(&base, &["distinct", "stadium"]).unwrap_err();
    assert!(format!("{err:#}").contains("invalid parameter `field`"));
    let _ = fs::remove_dir_all(&base);
}

#[test]
fn missing_data_reports_unavailable() {
    let base = base_dir("ipl_dash_test_missing_data");
    let base_arg = base.display().to_string();
    let cli = Cli::try_parse_from([
        "ipl-dash",
        "--base-dir",
        base_arg.as_str(),
        "--matches",
        "/nonexistent/matches.csv",
        "trends",
    ])
    .unwrap();
    let mut out = Vec::new();
    let err = ipl_dash::run(&cli, &mut out).unwrap_err();
    assert!(format!("{err:#}").starts_with("data unavailable"));
    assert!(out.is_empty());
    let _ = fs::remove_dir_all(&base);
}
