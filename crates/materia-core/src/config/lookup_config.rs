//! External lookup configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;

/// Where the side tables consulted during extraction live.
/// Relative paths resolve against the config root.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LookupConfig {
    /// Directory of `<request uuid>.json` match-criteria files.
    pub matches_dir: Option<PathBuf>,
    /// Market-share table keyed by location and HS code.
    pub market_shares_file: Option<PathBuf>,
    /// Extra indicator synonyms merged over the built-in table.
    pub indicator_synonyms_file: Option<PathBuf>,
}

impl LookupConfig {
    pub fn effective_matches_dir(&self, root: &Path) -> PathBuf {
        resolve(
            root,
            self.matches_dir
                .as_deref()
                .unwrap_or(Path::new(constants::DEFAULT_MATCHES_DIR)),
        )
    }

    pub fn effective_market_shares_file(&self, root: &Path) -> PathBuf {
        resolve(
            root,
            self.market_shares_file
                .as_deref()
                .unwrap_or(Path::new(constants::DEFAULT_MARKET_SHARES_FILE)),
        )
    }

    pub fn effective_indicator_synonyms_file(&self, root: &Path) -> Option<PathBuf> {
        self.indicator_synonyms_file
            .as_deref()
            .map(|p| resolve(root, p))
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
