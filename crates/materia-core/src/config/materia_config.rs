//! Top-level Materia configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AggregationConfig, LookupConfig, OutputConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Everything a run can be tuned with.
///
/// Layers, later ones winning:
/// compiled defaults, `~/.materia/config.toml`, `<root>/materia.toml`,
/// `MATERIA_*` environment variables, command-line overrides.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MateriaConfig {
    pub lookup: LookupConfig,
    pub aggregation: AggregationConfig,
    pub output: OutputConfig,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub matches_dir: Option<PathBuf>,
    pub market_shares_file: Option<PathBuf>,
    pub max_location_attempts: Option<u32>,
}

impl MateriaConfig {
    /// Resolve every layer for a run rooted at `root`.
    ///
    /// An unreadable user file is ignored; one that does not parse is an
    /// error, as is any problem with the project file.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(user_file) = user_config_path().filter(|p| p.is_file()) {
            if let Err(e @ ConfigError::ParseError { .. }) = config.merge_file(&user_file) {
                return Err(e);
            }
        }

        let project_file = root.join(constants::PROJECT_CONFIG_FILE);
        if project_file.is_file() {
            config.merge_file(&project_file)?;
        }

        config.finish(cli_overrides)
    }

    /// Like [`MateriaConfig::load`] but with one explicit file in place of
    /// the user and project layers.
    pub fn load_file(path: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let mut config = Self::default();
        config.merge_file(path)?;
        config.finish(cli_overrides)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        parse(toml_str, "<string>")
    }

    pub fn validate(config: &MateriaConfig) -> Result<(), ConfigError> {
        if config.aggregation.max_location_attempts == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "aggregation.max_location_attempts".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(blank) = config
            .output
            .excluded_folders
            .iter()
            .position(|f| f.trim().is_empty())
        {
            return Err(ConfigError::ValidationFailed {
                field: format!("output.excluded_folders[{blank}]"),
                message: "folder names must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Environment and command-line layers, then validation.
    fn finish(mut self, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        self.apply_env();
        if let Some(cli) = cli_overrides {
            self.apply_cli(cli);
        }
        Self::validate(&self)?;
        Ok(self)
    }

    /// Overlay a TOML file. Keys this version does not know are ignored.
    fn merge_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let layer = parse(&content, &path.display().to_string())?;
        self.overlay(layer);
        Ok(())
    }

    /// Take every value `layer` sets.
    fn overlay(&mut self, layer: MateriaConfig) {
        let MateriaConfig {
            lookup,
            aggregation,
            output,
        } = layer;

        overlay(&mut self.lookup.matches_dir, lookup.matches_dir);
        overlay(&mut self.lookup.market_shares_file, lookup.market_shares_file);
        overlay(
            &mut self.lookup.indicator_synonyms_file,
            lookup.indicator_synonyms_file,
        );

        overlay(
            &mut self.aggregation.max_location_attempts,
            aggregation.max_location_attempts,
        );
        overlay(&mut self.aggregation.fallback_to_mass, aggregation.fallback_to_mass);
        overlay(
            &mut self.aggregation.drop_unmatched_markets,
            aggregation.drop_unmatched_markets,
        );

        if !output.excluded_folders.is_empty() {
            self.output.excluded_folders = output.excluded_folders;
        }
        overlay(&mut self.output.log_file_name, output.log_file_name);
    }

    /// `MATERIA_MATCHES_DIR`, `MATERIA_MARKET_SHARES_FILE`,
    /// `MATERIA_MAX_LOCATION_ATTEMPTS`, `MATERIA_FALLBACK_TO_MASS`,
    /// `MATERIA_DROP_UNMATCHED_MARKETS`. Unparsable values are skipped.
    fn apply_env(&mut self) {
        overlay(&mut self.lookup.matches_dir, env_var("MATERIA_MATCHES_DIR"));
        overlay(
            &mut self.lookup.market_shares_file,
            env_var("MATERIA_MARKET_SHARES_FILE"),
        );
        overlay(
            &mut self.aggregation.max_location_attempts,
            env_var("MATERIA_MAX_LOCATION_ATTEMPTS"),
        );
        overlay(
            &mut self.aggregation.fallback_to_mass,
            env_var("MATERIA_FALLBACK_TO_MASS"),
        );
        overlay(
            &mut self.aggregation.drop_unmatched_markets,
            env_var("MATERIA_DROP_UNMATCHED_MARKETS"),
        );
    }

    fn apply_cli(&mut self, cli: &CliOverrides) {
        overlay(&mut self.lookup.matches_dir, cli.matches_dir.clone());
        overlay(&mut self.lookup.market_shares_file, cli.market_shares_file.clone());
        overlay(
            &mut self.aggregation.max_location_attempts,
            cli.max_location_attempts,
        );
    }
}

fn overlay<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

fn env_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok()?.trim().parse().ok()
}

fn parse(content: &str, origin: &str) -> Result<MateriaConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError {
        path: origin.to_string(),
        message: e.to_string(),
    })
}

/// `~/.materia/config.toml`, with `USERPROFILE` standing in for `HOME`.
fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(|home| PathBuf::from(home).join(".materia").join("config.toml"))
}
