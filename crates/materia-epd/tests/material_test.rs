//! Tests for material derivation and rescaling.

mod common;

use common::approx;
use materia_core::errors::RescaleError;
use materia_core::types::{Property, PropertyMap};
use materia_epd::physics::{Material, TargetProperties};

fn material(values: &[(Property, f64)]) -> Material {
    Material::from_properties(values.iter().copied().collect())
}

fn target(values: &[(Property, f64)], basis: Option<Property>) -> TargetProperties {
    TargetProperties::new(values.iter().copied().collect::<PropertyMap>(), basis)
}

#[test]
fn test_volume_from_mass_and_density() {
    let mut m = material(&[(Property::Mass, 2400.0), (Property::GrossDensity, 2400.0)]);
    // No extensive anchor other than volume: volume itself anchors at 1.
    let t = target(&[(Property::Volume, 1.0)], Some(Property::Volume));
    m.rescale(&t).unwrap();
    assert!(approx(m.get(Property::Volume).unwrap(), 1.0));
    assert!(approx(m.get(Property::Mass).unwrap(), 2400.0));
    assert!(approx(m.scaling_factor(), 1.0));
}

#[test]
fn test_derivation_without_anchor_keeps_values() {
    let mut m = material(&[(Property::Mass, 500.0), (Property::GrossDensity, 2000.0)]);
    let t = target(&[(Property::GrossDensity, 2000.0)], None);
    m.rescale(&t).unwrap();
    assert_eq!(m.get(Property::Mass), Some(500.0));
    assert_eq!(m.scaling_factor(), 1.0);
    let derived = m.derivable();
    assert!(approx(derived[&Property::Volume], 500.0 / 2000.0));
}

#[test]
fn test_rescale_to_mass_basis() {
    let mut m = material(&[(Property::Volume, 2.0), (Property::GrossDensity, 1200.0)]);
    m.rescale(&TargetProperties::mass_basis()).unwrap();
    assert!(approx(m.get(Property::Mass).unwrap(), 1.0));
    assert!(approx(m.get(Property::Volume).unwrap(), 2.0 / 2400.0));
    assert_eq!(m.get(Property::GrossDensity), Some(1200.0));
    assert!(approx(m.scaling_factor(), 1.0 / 2400.0));
}

#[test]
fn test_area_family_via_thickness() {
    let mut m = material(&[
        (Property::Mass, 100.0),
        (Property::GrossDensity, 1000.0),
        (Property::LayerThickness, 0.02),
    ]);
    let t = target(&[(Property::Area, 1.0)], Some(Property::Area));
    m.rescale(&t).unwrap();
    // area = volume / thickness = 0.1 / 0.02 = 5 m2, rescaled to 1 m2.
    assert!(approx(m.get(Property::Area).unwrap(), 1.0));
    assert!(approx(m.get(Property::Mass).unwrap(), 20.0));
    assert!(approx(m.scaling_factor(), 0.2));
}

#[test]
fn test_underivable_leaves_material_unchanged() {
    let mut m = material(&[(Property::Mass, 10.0)]);
    let before = m.clone();
    let t = target(&[(Property::Area, 1.0)], Some(Property::Area));
    let err = m.rescale(&t).unwrap_err();
    assert_eq!(
        err,
        RescaleError::Underivable {
            property: Property::Area,
            known: vec![Property::Mass],
        }
    );
    assert_eq!(m, before);
}

#[test]
fn test_mass_volume_requires_density() {
    let mut m = material(&[(Property::Mass, 10.0), (Property::Area, 2.0)]);
    let t = target(&[(Property::Volume, 1.0)], Some(Property::Volume));
    assert!(matches!(
        m.rescale(&t),
        Err(RescaleError::Underivable { property: Property::Volume, .. })
    ));
}

#[test]
fn test_zero_anchor_is_invalid_basis() {
    let mut m = material(&[(Property::Mass, 0.0)]);
    let err = m.rescale(&TargetProperties::mass_basis()).unwrap_err();
    assert!(matches!(err, RescaleError::InvalidBasis { property: Property::Mass, .. }));
    assert_eq!(m.get(Property::Mass), Some(0.0));
}

#[test]
fn test_rescale_is_idempotent() {
    let mut m = material(&[(Property::Mass, 3.0), (Property::GrossDensity, 1500.0)]);
    let t = target(&[(Property::Volume, 1.0)], Some(Property::Volume));
    m.rescale(&t).unwrap();
    let once = m.clone();
    m.rescale(&t).unwrap();
    for (property, value) in once.properties() {
        assert!(approx(m.get(*property).unwrap(), *value));
    }
    assert!(approx(m.scaling_factor(), once.scaling_factor()));
}

#[test]
fn test_basis_not_requested_uses_first_extensive() {
    let mut m = material(&[(Property::Mass, 4.0), (Property::Volume, 2.0)]);
    let t = target(&[(Property::Volume, 1.0), (Property::Mass, 2.0)], Some(Property::Area));
    m.rescale(&t).unwrap();
    // Mass precedes volume in canonical order.
    assert!(approx(m.get(Property::Mass).unwrap(), 2.0));
    assert!(approx(m.get(Property::Volume).unwrap(), 1.0));
}

#[test]
fn test_non_finite_inputs_are_dropped() {
    let m = material(&[(Property::Mass, f64::NAN), (Property::Volume, 1.0)]);
    assert_eq!(m.known(), vec![Property::Volume]);
}
