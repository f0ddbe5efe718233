//! ILCD flow documents: reference flow properties and MatML material data.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use materia_core::errors::DocumentError;
use materia_core::types::{DeclaredUnit, Property, PropertyMap};

use super::format_value;
use super::lcia::preferred_description;
use super::locators as loc;
use super::patch::XmlPatch;
use super::xml::{ElementId, XmlDocument};
use crate::physics::units::{flow_property_quantity, resolve_matml};
use crate::physics::Material;

/// A `flowProperty` entry of the flow document.
#[derive(Debug, Clone)]
struct FlowPropertyEntry {
    internal_id: String,
    quantity: Option<Property>,
    mean_value: Option<f64>,
    mean_value_element: Option<ElementId>,
}

/// A MatML `PropertyData` entry carrying an intensive property.
#[derive(Debug, Clone)]
struct MatmlEntry {
    property: Property,
    factor: f64,
    data_element: ElementId,
}

#[derive(Debug, Clone)]
pub struct IlcdFlow {
    pub uuid: String,
    pub path: PathBuf,
    /// Property → unit symbol as documented.
    pub units: BTreeMap<Property, String>,
    /// Property → value in canonical units, per one unit of the reference
    /// flow property (extensive) or as documented (intensive).
    pub values: PropertyMap,
    pub reference_property: Option<Property>,
    /// Amount of this flow referenced by the owning process.
    pub scaling_factor: f64,
    flow_properties: Vec<FlowPropertyEntry>,
    matml: Vec<MatmlEntry>,
    reference_element: Option<ElementId>,
    document: XmlDocument,
}

impl IlcdFlow {
    pub fn from_path(path: &Path, scaling_factor: f64) -> Result<Self, DocumentError> {
        let source = std::fs::read_to_string(path).map_err(|e| DocumentError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(source, path, scaling_factor)
    }

    pub fn parse(
        source: String,
        path: impl Into<PathBuf>,
        scaling_factor: f64,
    ) -> Result<Self, DocumentError> {
        let path = path.into();
        let document = XmlDocument::parse(source).map_err(|e| DocumentError::Malformed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let root = document.root();

        let uuid = document
            .find_descendant(root, loc::UUID)
            .map(|id| document.text(id).to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| DocumentError::MissingField {
                path: path.clone(),
                field: loc::UUID.to_string(),
            })?;

        let flow_properties = read_flow_properties(&document);
        let matml = read_matml(&document, &uuid);

        let reference_element = document.find_path(root, loc::REFERENCE_FLOW_PROPERTY);
        let reference_property = reference_element.and_then(|id| {
            let internal_id = document.text(id);
            flow_properties
                .iter()
                .find(|e| e.internal_id == internal_id)
                .and_then(|e| e.quantity)
        });

        let mut units = BTreeMap::new();
        let mut values = PropertyMap::new();
        for entry in &flow_properties {
            let Some(quantity) = entry.quantity else {
                continue;
            };
            units.insert(quantity, quantity.canonical_unit().to_string());
            let value = match entry.mean_value {
                Some(v) => Some(v),
                None if Some(quantity) == reference_property => Some(1.0),
                None => None,
            };
            if let Some(value) = value {
                values.entry(quantity).or_insert(value);
            }
        }
        for entry in &matml {
            let Ok(value) = document.text(entry.data_element).parse::<f64>() else {
                continue;
            };
            values.entry(entry.property).or_insert(value * entry.factor);
            let symbol = document
                .element(entry.data_element)
                .parent
                .and_then(|data| unit_symbol(&document, data))
                .unwrap_or_else(|| entry.property.canonical_unit().to_string());
            units.entry(entry.property).or_insert(symbol);
        }

        Ok(Self {
            uuid,
            path,
            units,
            values,
            reference_property,
            scaling_factor,
            flow_properties,
            matml,
            reference_element,
            document,
        })
    }

    pub fn declared_unit(&self) -> Option<DeclaredUnit> {
        self.reference_property.and_then(DeclaredUnit::from_property)
    }

    /// Material of the referenced amount: extensive values scaled by the
    /// exchange amount, intensive values as documented.
    pub fn material(&self) -> Material {
        let properties = self
            .values
            .iter()
            .map(|(&property, &value)| {
                if property.is_extensive() {
                    (property, value * self.scaling_factor)
                } else {
                    (property, value)
                }
            })
            .collect();
        Material::from_properties(properties)
    }

    /// Rewrite the flow with `properties` expressed per one unit of `basis`.
    ///
    /// Touches flow-property `meanValue`s of extensive properties present in
    /// the map, the reference flow property pointer when `basis` has an
    /// entry, and MatML data of intensive properties. Nothing else changes.
    pub fn synthesize(&self, properties: &PropertyMap, basis: Property) -> String {
        let per_basis = properties
            .get(&basis)
            .copied()
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(1.0);

        let mut patch = XmlPatch::new(&self.document);
        for entry in &self.flow_properties {
            let (Some(quantity), Some(element)) = (entry.quantity, entry.mean_value_element) else {
                continue;
            };
            if let Some(value) = properties.get(&quantity).filter(|_| quantity.is_extensive()) {
                patch.set_text(element, format_value(value / per_basis));
            }
        }

        if let Some(element) = self.reference_element {
            if let Some(entry) = self
                .flow_properties
                .iter()
                .find(|e| e.quantity == Some(basis))
            {
                patch.set_text(element, entry.internal_id.clone());
            }
        }

        for entry in &self.matml {
            if let Some(value) = properties.get(&entry.property) {
                patch.set_text(entry.data_element, format_value(value / entry.factor));
            }
        }

        tracing::debug!(flow_uuid = %self.uuid, edits = patch.len(), "Synthesized flow");
        patch.apply()
    }

    pub fn document(&self) -> &XmlDocument {
        &self.document
    }
}

fn read_flow_properties(document: &XmlDocument) -> Vec<FlowPropertyEntry> {
    document
        .find_all(document.root(), loc::FLOW_PROPERTY)
        .filter_map(|fp| {
            let internal_id = document.attribute(fp, loc::INTERNAL_ID_ATTR)?.trim().to_string();
            let reference = document.child(fp, loc::FLOW_PROPERTY_REFERENCE);
            let quantity = reference.and_then(|r| {
                flow_property_quantity(
                    document.attribute(r, loc::REF_OBJECT_ID_ATTR),
                    preferred_description(document, r),
                )
            });
            let mean_value_element = document.child(fp, loc::MEAN_VALUE);
            let mean_value = mean_value_element
                .and_then(|m| document.text(m).parse::<f64>().ok())
                .filter(|v| v.is_finite());
            Some(FlowPropertyEntry {
                internal_id,
                quantity,
                mean_value,
                mean_value_element,
            })
        })
        .collect()
}

fn read_matml(document: &XmlDocument, flow_uuid: &str) -> Vec<MatmlEntry> {
    let Some(matml) = document.find_descendant(document.root(), loc::MATML_DOC) else {
        return Vec::new();
    };

    let mut details: BTreeMap<&str, ElementId> = BTreeMap::new();
    for detail in document.find_all(matml, loc::PROPERTY_DETAILS) {
        if let Some(id) = document.attribute(detail, loc::ID_ATTR) {
            details.insert(id.trim(), detail);
        }
    }

    let mut entries = Vec::new();
    for data in document.find_all(matml, loc::PROPERTY_DATA) {
        let Some(data_element) = document.child(data, loc::DATA) else {
            continue;
        };
        let Some(&detail) = document
            .attribute(data, loc::PROPERTY_ATTR)
            .and_then(|p| details.get(p.trim()))
        else {
            continue;
        };
        let name = document.child(detail, loc::NAME).map(|n| document.text(n));
        let unit = document
            .child(detail, loc::UNITS)
            .and_then(|u| document.attribute(u, loc::NAME_ATTR));
        match resolve_matml(name, unit) {
            Some(conversion) if conversion.property.is_intensive() => entries.push(MatmlEntry {
                property: conversion.property,
                factor: conversion.factor,
                data_element,
            }),
            _ => tracing::debug!(
                flow_uuid,
                name = name.unwrap_or_default(),
                unit = unit.unwrap_or_default(),
                "Unrecognized MatML property"
            ),
        }
    }
    entries
}

/// Units symbol of the `PropertyDetails` a `PropertyData` element points to.
fn unit_symbol(document: &XmlDocument, data: ElementId) -> Option<String> {
    let property_id = document.attribute(data, loc::PROPERTY_ATTR)?.trim();
    let matml = document.find_descendant(document.root(), loc::MATML_DOC)?;
    let detail = document
        .find_all(matml, loc::PROPERTY_DETAILS)
        .find(|&d| document.attribute(d, loc::ID_ATTR).map(str::trim) == Some(property_id))?;
    let units = document.child(detail, loc::UNITS)?;
    document
        .attribute(units, loc::NAME_ATTR)
        .map(|s| s.trim().to_string())
}
