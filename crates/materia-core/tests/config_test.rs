//! Tests for layered configuration.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use materia_core::config::{CliOverrides, MateriaConfig};
use materia_core::errors::ConfigError;

/// Serializes tests that touch process environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ENV_VARS: [&str; 5] = [
    "MATERIA_MATCHES_DIR",
    "MATERIA_MARKET_SHARES_FILE",
    "MATERIA_MAX_LOCATION_ATTEMPTS",
    "MATERIA_FALLBACK_TO_MASS",
    "MATERIA_DROP_UNMATCHED_MARKETS",
];

fn clear_env(home: &Path) {
    for var in ENV_VARS {
        std::env::remove_var(var);
    }
    // Keep a developer's own ~/.materia out of the picture.
    std::env::set_var("HOME", home);
}

#[test]
fn test_defaults() {
    let config = MateriaConfig::default();
    let root = Path::new("/data");
    assert_eq!(config.aggregation.effective_max_location_attempts(), 4);
    assert!(config.aggregation.effective_fallback_to_mass());
    assert!(!config.aggregation.effective_drop_unmatched_markets());
    assert_eq!(
        config.lookup.effective_matches_dir(root),
        PathBuf::from("/data/matches")
    );
    assert_eq!(
        config.lookup.effective_market_shares_file(root),
        PathBuf::from("/data/market_shares.json")
    );
    assert!(config.lookup.effective_indicator_synonyms_file(root).is_none());
    assert_eq!(
        config.output.effective_excluded_folders(),
        vec!["processes", "processes_old", "flows"]
    );
    assert_eq!(config.output.effective_log_file_name(), "materia_epd.log.json");
}

#[test]
fn test_from_toml_partial() {
    let config = MateriaConfig::from_toml(
        r#"
        [aggregation]
        max_location_attempts = 2
        drop_unmatched_markets = true

        [lookup]
        matches_dir = "/srv/matches"
        "#,
    )
    .unwrap();
    assert_eq!(config.aggregation.effective_max_location_attempts(), 2);
    assert!(config.aggregation.effective_drop_unmatched_markets());
    assert!(config.aggregation.effective_fallback_to_mass());
    assert_eq!(
        config.lookup.effective_matches_dir(Path::new("/ignored")),
        PathBuf::from("/srv/matches")
    );
}

#[test]
fn test_from_toml_rejects_garbage() {
    let err = MateriaConfig::from_toml("[aggregation\nmax = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validation_rejects_zero_attempts() {
    let config = MateriaConfig::from_toml("[aggregation]\nmax_location_attempts = 0").unwrap();
    let err = MateriaConfig::validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "aggregation.max_location_attempts"));
}

#[test]
fn test_validation_rejects_empty_folder_name() {
    let config = MateriaConfig::from_toml("[output]\nexcluded_folders = [\"flows\", \" \"]").unwrap();
    assert!(MateriaConfig::validate(&config).is_err());
}

#[test]
fn test_layering_project_env_cli() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempfile::tempdir().unwrap();
    clear_env(home.path());

    let root = tempfile::tempdir().unwrap();
    std::fs::write(
        root.path().join("materia.toml"),
        "[aggregation]\nmax_location_attempts = 3\nfallback_to_mass = false\n",
    )
    .unwrap();

    // Project layer.
    let config = MateriaConfig::load(root.path(), None).unwrap();
    assert_eq!(config.aggregation.effective_max_location_attempts(), 3);
    assert!(!config.aggregation.effective_fallback_to_mass());

    // Env beats project.
    std::env::set_var("MATERIA_MAX_LOCATION_ATTEMPTS", "5");
    let config = MateriaConfig::load(root.path(), None).unwrap();
    assert_eq!(config.aggregation.effective_max_location_attempts(), 5);

    // CLI beats env.
    let cli = CliOverrides {
        max_location_attempts: Some(7),
        ..Default::default()
    };
    let config = MateriaConfig::load(root.path(), Some(&cli)).unwrap();
    assert_eq!(config.aggregation.effective_max_location_attempts(), 7);
    assert!(!config.aggregation.effective_fallback_to_mass());

    clear_env(home.path());
}

#[test]
fn test_user_config_is_lowest_layer() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempfile::tempdir().unwrap();
    clear_env(home.path());
    std::fs::create_dir_all(home.path().join(".materia")).unwrap();
    std::fs::write(
        home.path().join(".materia").join("config.toml"),
        "[aggregation]\ndrop_unmatched_markets = true\nmax_location_attempts = 9\n",
    )
    .unwrap();

    let root = tempfile::tempdir().unwrap();
    std::fs::write(
        root.path().join("materia.toml"),
        "[aggregation]\nmax_location_attempts = 2\n",
    )
    .unwrap();

    let config = MateriaConfig::load(root.path(), None).unwrap();
    assert!(config.aggregation.effective_drop_unmatched_markets());
    assert_eq!(config.aggregation.effective_max_location_attempts(), 2);
}

#[test]
fn test_invalid_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempfile::tempdir().unwrap();
    clear_env(home.path());
    std::env::set_var("MATERIA_FALLBACK_TO_MASS", "perhaps");

    let root = tempfile::tempdir().unwrap();
    let config = MateriaConfig::load(root.path(), None).unwrap();
    assert!(config.aggregation.effective_fallback_to_mass());

    clear_env(home.path());
}

#[test]
fn test_load_file_missing() {
    let err = MateriaConfig::load_file(Path::new("/nonexistent/materia.toml"), None).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn test_toml_round_trip_keeps_overrides() {
    let config = MateriaConfig::from_toml(
        "[output]\nexcluded_folders = [\"processes\"]\nlog_file_name = \"run.json\"\n",
    )
    .unwrap();
    let again = MateriaConfig::from_toml(&config.to_toml().unwrap()).unwrap();
    assert_eq!(again.output.effective_excluded_folders(), vec!["processes"]);
    assert_eq!(again.output.effective_log_file_name(), "run.json");
}
