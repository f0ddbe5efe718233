//! Shared constants for the Materia engine.

/// Materia version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of location-escalation attempts per market.
pub const DEFAULT_MAX_LOCATION_ATTEMPTS: u32 = 4;

/// Default: switch to a mass basis when no candidate conforms.
pub const DEFAULT_FALLBACK_TO_MASS: bool = true;

/// Default: a market without candidates fails its request.
pub const DEFAULT_DROP_UNMATCHED_MARKETS: bool = false;

/// Default match-criteria directory (relative to the config root).
pub const DEFAULT_MATCHES_DIR: &str = "matches";

/// Default market-share table (relative to the config root).
pub const DEFAULT_MARKET_SHARES_FILE: &str = "market_shares.json";

/// Default output directory when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "materia_output";

/// Template folders holding bulk data; never copied verbatim.
pub const DEFAULT_EXCLUDED_FOLDERS: [&str; 3] = ["processes", "processes_old", "flows"];

/// JSON log file written next to the output.
pub const DEFAULT_LOG_FILE_NAME: &str = "materia_epd.log.json";

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "materia.toml";

/// Sub-folder holding process documents in a dataset.
pub const PROCESSES_DIR: &str = "processes";

/// Sub-folder holding flow documents in a dataset.
pub const FLOWS_DIR: &str = "flows";

/// Location code for the whole world.
pub const GLOBAL_LOCATION: &str = "GLO";

/// Classification system carrying the industry (HS) code.
pub const HS_CLASSIFICATION_NAME: &str = "HS";

/// Class level holding the HS code used for market-share lookup.
pub const HS_CLASS_LEVEL: &str = "2";

/// Wildcard HS code in the market-share table.
pub const ANY_HS_CODE: &str = "*";
