//! Life-cycle modules that generic EPDs report.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed canonical module set written back into generic EPDs.
///
/// A1-A3 production, A4 transport, C1-C4 end of life, D benefits beyond
/// the system boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LifeCycleModule {
    #[serde(rename = "A1-A3")]
    A1A3,
    #[serde(rename = "A4")]
    A4,
    #[serde(rename = "C1")]
    C1,
    #[serde(rename = "C2")]
    C2,
    #[serde(rename = "C3")]
    C3,
    #[serde(rename = "C4")]
    C4,
    #[serde(rename = "D")]
    D,
}

impl LifeCycleModule {
    pub const ALL: [LifeCycleModule; 7] = [
        Self::A1A3,
        Self::A4,
        Self::C1,
        Self::C2,
        Self::C3,
        Self::C4,
        Self::D,
    ];

    /// Module code as it appears in the `module` attribute.
    pub fn code(&self) -> &'static str {
        match self {
            Self::A1A3 => "A1-A3",
            Self::A4 => "A4",
            Self::C1 => "C1",
            Self::C2 => "C2",
            Self::C3 => "C3",
            Self::C4 => "C4",
            Self::D => "D",
        }
    }
}

impl fmt::Display for LifeCycleModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LifeCycleModule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| format!("not a canonical life-cycle module: {s}"))
    }
}
