//! Canonical material properties.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A physical property a material can report.
///
/// Extensive properties scale with the amount of material, intensive ones
/// do not. Declaration order is the canonical order used when a rescale
/// has to pick an anchor among several extensive properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Mass,
    Volume,
    Area,
    Length,
    Items,
    GrossDensity,
    LayerThickness,
    Grammage,
    LinearDensity,
}

impl Property {
    pub const ALL: [Property; 9] = [
        Self::Mass,
        Self::Volume,
        Self::Area,
        Self::Length,
        Self::Items,
        Self::GrossDensity,
        Self::LayerThickness,
        Self::Grammage,
        Self::LinearDensity,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mass => "mass",
            Self::Volume => "volume",
            Self::Area => "area",
            Self::Length => "length",
            Self::Items => "items",
            Self::GrossDensity => "gross_density",
            Self::LayerThickness => "layer_thickness",
            Self::Grammage => "grammage",
            Self::LinearDensity => "linear_density",
        }
    }

    /// Canonical unit symbol values are stored in.
    pub fn canonical_unit(&self) -> &'static str {
        match self {
            Self::Mass => "kg",
            Self::Volume => "m3",
            Self::Area => "m2",
            Self::Length => "m",
            Self::Items => "pcs",
            Self::GrossDensity => "kg/m3",
            Self::LayerThickness => "m",
            Self::Grammage => "kg/m2",
            Self::LinearDensity => "kg/m",
        }
    }

    pub fn is_extensive(&self) -> bool {
        matches!(
            self,
            Self::Mass | Self::Volume | Self::Area | Self::Length | Self::Items
        )
    }

    pub fn is_intensive(&self) -> bool {
        !self.is_extensive()
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Property {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| format!("unknown material property: {s}"))
    }
}
