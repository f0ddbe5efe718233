//! Market-share lookup keyed by location and HS code.

use std::collections::BTreeMap;
use std::path::Path;

use materia_core::constants::ANY_HS_CODE;
use materia_core::errors::DocumentError;

use crate::geo::normalize_location;

/// A geography and its production share.
#[derive(Debug, Clone, PartialEq)]
pub struct Market {
    pub code: String,
    pub share: f64,
}

impl Market {
    pub fn new(code: impl AsRef<str>, share: f64) -> Self {
        Self {
            code: normalize_location(code.as_ref()),
            share,
        }
    }
}

pub trait MarketShareSource {
    /// Markets for a request, largest share first. Never empty.
    fn markets_for(&self, location: &str, hs_code: Option<&str>) -> Vec<Market>;
}

/// `{"<location>": {"<hs code>" | "*": {"<market>": share}}}`
#[derive(Debug, Clone, Default)]
pub struct MarketShareTable {
    table: BTreeMap<String, BTreeMap<String, BTreeMap<String, f64>>>,
}

impl MarketShareTable {
    pub fn from_json(json: &str, path: &Path) -> Result<Self, DocumentError> {
        let raw: BTreeMap<String, BTreeMap<String, BTreeMap<String, f64>>> =
            serde_json::from_str(json).map_err(|e| DocumentError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let table = raw
            .into_iter()
            .map(|(location, by_hs)| {
                let by_hs = by_hs
                    .into_iter()
                    .map(|(hs, shares)| {
                        let shares = shares
                            .into_iter()
                            .map(|(market, share)| (normalize_location(&market), share))
                            .collect();
                        (hs.trim().to_string(), shares)
                    })
                    .collect();
                (normalize_location(&location), by_hs)
            })
            .collect();
        Ok(Self { table })
    }

    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let json = std::fs::read_to_string(path).map_err(|e| DocumentError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&json, path)
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl MarketShareSource for MarketShareTable {
    fn markets_for(&self, location: &str, hs_code: Option<&str>) -> Vec<Market> {
        let location = normalize_location(location);
        let shares = self.table.get(&location).and_then(|by_hs| {
            hs_code
                .and_then(|hs| by_hs.get(hs.trim()))
                .or_else(|| by_hs.get(ANY_HS_CODE))
        });

        let mut markets: Vec<Market> = match shares {
            Some(shares) if !shares.is_empty() => shares
                .iter()
                .map(|(code, &share)| Market {
                    code: code.clone(),
                    share,
                })
                .collect(),
            _ => vec![Market {
                code: location,
                share: 1.0,
            }],
        };
        markets.sort_by(|a, b| b.share.total_cmp(&a.share).then_with(|| a.code.cmp(&b.code)));
        markets
    }
}
