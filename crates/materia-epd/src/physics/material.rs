//! Material property bag and the `rescale` derivation.

use materia_core::errors::RescaleError;
use materia_core::types::{Property, PropertyMap};

#[derive(Debug, Clone, Copy)]
enum Op {
    Mul,
    Div,
}

/// `target = lhs <op> rhs`.
#[derive(Debug, Clone, Copy)]
struct Identity {
    target: Property,
    lhs: Property,
    op: Op,
    rhs: Property,
}

const fn id(target: Property, lhs: Property, op: Op, rhs: Property) -> Identity {
    Identity {
        target,
        lhs,
        op,
        rhs,
    }
}

use Property::{
    Area, Grammage, GrossDensity, LayerThickness, Length, LinearDensity, Mass, Volume,
};

/// Fixed physical identities, tried in order until nothing new is derived.
const IDENTITIES: &[Identity] = &[
    id(Mass, Volume, Op::Mul, GrossDensity),
    id(Mass, Area, Op::Mul, Grammage),
    id(Mass, Length, Op::Mul, LinearDensity),
    id(Volume, Mass, Op::Div, GrossDensity),
    id(Volume, Area, Op::Mul, LayerThickness),
    id(Area, Mass, Op::Div, Grammage),
    id(Area, Volume, Op::Div, LayerThickness),
    id(Length, Mass, Op::Div, LinearDensity),
    id(GrossDensity, Mass, Op::Div, Volume),
    id(GrossDensity, Grammage, Op::Div, LayerThickness),
    id(Grammage, GrossDensity, Op::Mul, LayerThickness),
    id(Grammage, Mass, Op::Div, Area),
    id(LayerThickness, Grammage, Op::Div, GrossDensity),
    id(LayerThickness, Volume, Op::Div, Area),
    id(LinearDensity, Mass, Op::Div, Length),
];

/// Requested property values plus the basis quantity of the declared unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetProperties {
    pub values: PropertyMap,
    pub basis: Option<Property>,
}

impl TargetProperties {
    pub fn new(values: PropertyMap, basis: Option<Property>) -> Self {
        Self { values, basis }
    }

    /// One kilogram.
    pub fn mass_basis() -> Self {
        Self {
            values: PropertyMap::from([(Property::Mass, 1.0)]),
            basis: Some(Property::Mass),
        }
    }

    /// Extensive property the rescale factor is computed on: the basis when
    /// requested, else the first extensive requested property.
    pub fn anchor(&self) -> Option<Property> {
        if let Some(basis) = self.basis {
            if self.values.contains_key(&basis) {
                return Some(basis);
            }
        }
        self.values.keys().copied().find(Property::is_extensive)
    }
}

/// A canonical property bag with a cumulative scaling factor.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    properties: PropertyMap,
    scaling_factor: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            properties: PropertyMap::new(),
            scaling_factor: 1.0,
        }
    }
}

impl Material {
    /// Build from known values; non-finite values are dropped.
    pub fn from_properties(properties: PropertyMap) -> Self {
        Self {
            properties: properties
                .into_iter()
                .filter(|(_, v)| v.is_finite())
                .collect(),
            scaling_factor: 1.0,
        }
    }

    pub fn get(&self, property: Property) -> Option<f64> {
        self.properties.get(&property).copied()
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    pub fn into_properties(self) -> PropertyMap {
        self.properties
    }

    pub fn scaling_factor(&self) -> f64 {
        self.scaling_factor
    }

    pub fn known(&self) -> Vec<Property> {
        self.properties.keys().copied().collect()
    }

    /// Every property derivable from the known ones, known values included.
    pub fn derivable(&self) -> PropertyMap {
        derive_closure(&self.properties)
    }

    /// Populate every requested property and scale extensive values so the
    /// anchor matches its requested value.
    ///
    /// On error the material is left untouched.
    pub fn rescale(&mut self, target: &TargetProperties) -> Result<(), RescaleError> {
        let derived = derive_closure(&self.properties);

        for property in target.values.keys() {
            if !derived.contains_key(property) {
                return Err(RescaleError::Underivable {
                    property: *property,
                    known: self.known(),
                });
            }
        }

        let factor = match target.anchor() {
            Some(anchor) => {
                let current = derived.get(&anchor).copied().unwrap_or(f64::NAN);
                if !(current.is_finite() && current > 0.0) {
                    return Err(RescaleError::InvalidBasis {
                        property: anchor,
                        value: current,
                    });
                }
                target.values[&anchor] / current
            }
            None => 1.0,
        };

        let mut properties = self.properties.clone();
        for property in target.values.keys() {
            properties.entry(*property).or_insert(derived[property]);
        }
        for (property, value) in properties.iter_mut() {
            if property.is_extensive() {
                *value *= factor;
            }
        }

        self.properties = properties;
        self.scaling_factor *= factor;
        Ok(())
    }
}

fn derive_closure(known: &PropertyMap) -> PropertyMap {
    let mut values = known.clone();
    loop {
        let mut changed = false;
        for identity in IDENTITIES {
            if values.contains_key(&identity.target) {
                continue;
            }
            let (Some(&lhs), Some(&rhs)) = (values.get(&identity.lhs), values.get(&identity.rhs))
            else {
                continue;
            };
            let value = match identity.op {
                Op::Mul => lhs * rhs,
                Op::Div if rhs == 0.0 => continue,
                Op::Div => lhs / rhs,
            };
            if value.is_finite() {
                values.insert(identity.target, value);
                changed = true;
            }
        }
        if !changed {
            return values;
        }
    }
}
