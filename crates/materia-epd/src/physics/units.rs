//! Unit and quantity tables for ILCD flow documents.

use materia_core::types::Property;

/// How a documented value converts to the canonical unit:
/// `canonical = documented * factor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConversion {
    pub property: Property,
    pub factor: f64,
}

const fn conv(property: Property, factor: f64) -> UnitConversion {
    UnitConversion { property, factor }
}

/// MatML unit symbols.
const MATML_UNITS: &[(&str, UnitConversion)] = &[
    ("kg/m^3", conv(Property::GrossDensity, 1.0)),
    ("kg/m3", conv(Property::GrossDensity, 1.0)),
    ("kg/m³", conv(Property::GrossDensity, 1.0)),
    ("g/cm3", conv(Property::GrossDensity, 1000.0)),
    ("g/cm^3", conv(Property::GrossDensity, 1000.0)),
    ("g/cm³", conv(Property::GrossDensity, 1000.0)),
    ("t/m3", conv(Property::GrossDensity, 1000.0)),
    ("m", conv(Property::LayerThickness, 1.0)),
    ("cm", conv(Property::LayerThickness, 0.01)),
    ("mm", conv(Property::LayerThickness, 0.001)),
    ("kg/m^2", conv(Property::Grammage, 1.0)),
    ("kg/m2", conv(Property::Grammage, 1.0)),
    ("kg/m²", conv(Property::Grammage, 1.0)),
    ("g/m^2", conv(Property::Grammage, 0.001)),
    ("g/m2", conv(Property::Grammage, 0.001)),
    ("g/m²", conv(Property::Grammage, 0.001)),
    ("kg/m", conv(Property::LinearDensity, 1.0)),
    ("g/m", conv(Property::LinearDensity, 0.001)),
];

/// MatML property names, compared lowercase.
const MATML_NAMES: &[(&str, Property)] = &[
    ("gross density", Property::GrossDensity),
    ("density", Property::GrossDensity),
    ("bulk density", Property::GrossDensity),
    ("layer thickness", Property::LayerThickness),
    ("thickness", Property::LayerThickness),
    ("grammage", Property::Grammage),
    ("area density", Property::Grammage),
    ("areal density", Property::Grammage),
    ("linear density", Property::LinearDensity),
];

/// Reference flow-property data sets of the ILCD elementary data.
const FLOW_PROPERTY_UUIDS: &[(&str, Property)] = &[
    ("93a60a56-a3c8-11da-a746-0800200b9a66", Property::Mass),
    ("93a60a56-a3c8-22da-a746-0800200c9a66", Property::Volume),
    ("93a60a56-a3c8-19da-a746-0800200c9a66", Property::Area),
    ("838aaa23-0117-11db-92e3-0800200c9a66", Property::Length),
    ("01846770-4cfe-4a25-8ad9-919d8d378345", Property::Items),
];

const FLOW_PROPERTY_NAMES: &[(&str, Property)] = &[
    ("mass", Property::Mass),
    ("volume", Property::Volume),
    ("area", Property::Area),
    ("length", Property::Length),
    ("number of items", Property::Items),
    ("number of pieces", Property::Items),
    ("items", Property::Items),
    ("pieces", Property::Items),
];

pub fn matml_unit(symbol: &str) -> Option<UnitConversion> {
    let symbol = symbol.trim();
    MATML_UNITS
        .iter()
        .find(|(s, _)| s.eq_ignore_ascii_case(symbol))
        .map(|(_, c)| *c)
}

pub fn matml_property(name: &str) -> Option<Property> {
    let name = normalize(name);
    MATML_NAMES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, p)| *p)
        .or_else(|| name.parse().ok())
}

/// Resolve a MatML property from its documented name and unit symbol.
///
/// A recognized name wins; the unit then only contributes its factor and
/// must describe the same property. A missing unit means canonical.
pub fn resolve_matml(name: Option<&str>, unit: Option<&str>) -> Option<UnitConversion> {
    let by_name = name.and_then(matml_property);
    match (by_name, unit) {
        (Some(property), None) => Some(conv(property, 1.0)),
        (Some(property), Some(symbol)) => matml_unit(symbol)
            .filter(|c| c.property == property)
            .or_else(|| (symbol.trim() == property.canonical_unit()).then(|| conv(property, 1.0))),
        (None, Some(symbol)) => matml_unit(symbol),
        (None, None) => None,
    }
}

/// Quantity measured by a flow property, by data-set UUID or description.
pub fn flow_property_quantity(uuid: Option<&str>, description: Option<&str>) -> Option<Property> {
    let by_uuid = uuid.and_then(|u| {
        let u = u.trim();
        FLOW_PROPERTY_UUIDS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(u))
            .map(|(_, p)| *p)
    });
    by_uuid.or_else(|| {
        let description = normalize(description?);
        FLOW_PROPERTY_NAMES
            .iter()
            .find(|(n, _)| *n == description)
            .map(|(_, p)| *p)
    })
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
