//! Declared (functional) units.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Property;

/// The physical basis quantity a flow's amounts are expressed per.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclaredUnit {
    Mass,
    Volume,
    Area,
    Length,
    Items,
}

impl DeclaredUnit {
    pub const ALL: [DeclaredUnit; 5] = [
        Self::Mass,
        Self::Volume,
        Self::Area,
        Self::Length,
        Self::Items,
    ];

    /// The extensive property measuring this unit.
    pub fn property(&self) -> Property {
        match self {
            Self::Mass => Property::Mass,
            Self::Volume => Property::Volume,
            Self::Area => Property::Area,
            Self::Length => Property::Length,
            Self::Items => Property::Items,
        }
    }

    pub fn from_property(property: Property) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.property() == property)
    }

    pub fn name(&self) -> &'static str {
        self.property().name()
    }
}

impl fmt::Display for DeclaredUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeclaredUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let property: Property = s.parse()?;
        Self::from_property(property).ok_or_else(|| format!("not a declared unit: {s}"))
    }
}
