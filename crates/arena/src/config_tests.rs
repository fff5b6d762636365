use super::*;

#[test]
fn test_empty_file_gives_defaults() {
    let config = ArenaConfig::from_toml_str("").unwrap();
    assert_eq!(config, ArenaConfig::default());
}

#[test]
fn test_partial_file_overrides() {
    let config = ArenaConfig::from_toml_str(
        r#"
        games = 4
        max_turns = 80
        first_engine = "random"
        second_engine = "greedy"
        results_path = "out/results.json"
        "#,
    )
    .unwrap();

    assert_eq!(config.games, 4);
    assert_eq!(config.max_turns, 80);
    assert_eq!(config.first_engine, EngineKind::Random);
    assert_eq!(config.second_engine, EngineKind::Greedy);
    assert_eq!(config.results_path, Some(PathBuf::from("out/results.json")));
    // untouched fields keep their defaults
    assert!(config.alternate_sides);
    assert!(!config.parallel_search);
}

#[test]
fn test_unknown_engine_is_rejected() {
    assert!(ArenaConfig::from_toml_str(r#"first_engine = "stockfish""#).is_err());
    assert!(ArenaConfig::from_toml_str("games = -1").is_err());
}

#[test]
fn test_engine_seeds_differ() {
    let config = ArenaConfig {
        seed: 17,
        ..Default::default()
    };
    assert_ne!(config.engine_seed(0), config.engine_seed(1));
    assert_eq!(config.engine_seed(0), 17);
}

#[test]
fn test_build_engines_names() {
    let (one, two) = ArenaConfig::default().build_engines();
    assert_eq!(one.name(), "Greedy v1.0");
    assert_eq!(two.name(), "Random v1.0");
}

#[test]
fn test_opponent_is_the_second_engine() {
    let config = ArenaConfig::from_toml_str(
        r#"
        first_engine = "greedy"
        second_engine = "random"
        "#,
    )
    .unwrap();
    assert_eq!(config.build_opponent().name(), "Random v1.0");

    let swapped = ArenaConfig {
        first_engine: EngineKind::Random,
        second_engine: EngineKind::Greedy,
        ..Default::default()
    };
    assert_eq!(swapped.build_opponent().name(), "Greedy v1.0");
}
