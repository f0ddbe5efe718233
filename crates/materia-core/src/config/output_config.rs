//! Output configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for output writing and template copying.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Template sub-folders that are never copied verbatim.
    #[serde(default)]
    pub excluded_folders: Vec<String>,
    /// JSON log file name. Default: `materia_epd.log.json`.
    pub log_file_name: Option<String>,
}

impl OutputConfig {
    pub fn effective_excluded_folders(&self) -> Vec<String> {
        if self.excluded_folders.is_empty() {
            constants::DEFAULT_EXCLUDED_FOLDERS
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.excluded_folders.clone()
        }
    }

    pub fn effective_log_file_name(&self) -> &str {
        self.log_file_name
            .as_deref()
            .unwrap_or(constants::DEFAULT_LOG_FILE_NAME)
    }
}
