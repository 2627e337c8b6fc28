use clap::{CommandFactory, FromArgMatches, Parser};
use seatforge::config::{AnnealParams, Config, SolverParams};
use seatforge::error::SeatingError;
use seatforge::profile::RankingProfile;
use std::fs;

#[derive(Parser, Debug)]
struct Harness {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> (Harness, clap::ArgMatches) {
    let matches = Harness::command().get_matches_from(args);
    let harness = Harness::from_arg_matches(&matches).unwrap();
    (harness, matches)
}

#[test]
fn test_defaults_are_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.anneal.convergence_patience, 15);
    assert_eq!(config.anneal.max_rounds, 10_000);
    assert_eq!(config.solver.trials_per_phase, 10);
    assert_eq!(config.solver.brute_force_threshold, 12);
    assert!(config.solver.repair);
    assert!(config.solver.min_phase);
}

#[test]
fn test_cli_defaults_match_struct_defaults() {
    let (harness, _) = parse(&["test"]);
    assert_eq!(harness.config.anneal, AnnealParams::default());
    assert_eq!(harness.config.solver, SolverParams::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{ "anneal": { "cooling_rate": 0.9 }, "solver": { "min_phase": false } }"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.anneal.cooling_rate, 0.9);
    assert_eq!(config.anneal.max_rounds, 10_000);
    assert!(!config.solver.min_phase);
    assert!(config.solver.repair);
}

#[test]
fn test_explicit_flags_override_file() {
    let mut file_config = Config {
        anneal: AnnealParams {
            cooling_rate: 0.5,
            max_rounds: 77,
            ..Default::default()
        },
        solver: SolverParams {
            trials_per_phase: 3,
            ..Default::default()
        },
    };

    let (cli, matches) = parse(&["test", "--cooling-rate", "0.9", "--repair", "false"]);
    file_config.merge_from_cli(&cli.config, &matches);

    assert_eq!(file_config.anneal.cooling_rate, 0.9);
    assert_eq!(file_config.anneal.max_rounds, 77);
    assert_eq!(file_config.solver.trials_per_phase, 3);
    assert!(!file_config.solver.repair);
}

#[test]
fn test_validation_errors() {
    let mut config = Config::default();
    config.anneal.cooling_rate = 0.0;
    assert!(matches!(config.validate(), Err(SeatingError::Config(_))));

    let mut config = Config::default();
    config.anneal.min_temperature = -1.0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.anneal.convergence_patience = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.solver.trials_per_phase = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_malformed_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SeatingError::Json(_))
    ));
    assert!(matches!(
        Config::load_from_file(dir.path().join("missing.json")),
        Err(SeatingError::Io(_))
    ));
}

#[test]
fn test_rankings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rankings.json");

    fs::write(&path, r#"{ "rankings": [[1, 2, 3], [0, 2, 3], [3, 0, 1], [2, 0, 1]] }"#).unwrap();
    let rankings = RankingProfile::load_from_file(&path).unwrap();
    assert_eq!(rankings.len(), 4);

    fs::write(&path, r#"{ "rankings": [[1, 2, 3], [0, 2, 3], [3, 0, 1], [2, 2, 1]] }"#).unwrap();
    assert!(matches!(
        RankingProfile::load_from_file(&path),
        Err(SeatingError::Validation(_))
    ));
}
