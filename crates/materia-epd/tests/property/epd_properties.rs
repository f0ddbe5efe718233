use std::collections::{BTreeMap, BTreeSet};

use materia_core::types::{ImpactMap, LifeCycleModule, ModuleValues, Property, PropertyMap};
use materia_epd::filters::{Filter, IdentityFilter};
use materia_epd::geo::escalate;
use materia_epd::ilcd::IlcdProcess;
use materia_epd::lookup::Market;
use materia_epd::metrics::{average_properties, weighted_average};
use materia_epd::physics::{Material, TargetProperties};
use materia_epd::pipeline::Candidate;
use proptest::prelude::*;

const CODES: &[&str] = &["DE", "FR", "US", "CN", "BR", "AU", "RER", "RNA", "GLO", "XYZ"];

fn arb_locations() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(prop::sample::select(CODES), 1..4)
        .prop_map(|codes| codes.into_iter().map(str::to_string).collect())
}

fn process(uuid: &str) -> IlcdProcess {
    IlcdProcess::parse(format!("<p><UUID>{uuid}</UUID></p>"), "p.xml").unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

// ── Identity filter is set membership ────────────────────────────────────

proptest! {
    #[test]
    fn identity_filter_is_membership(
        allowed in prop::collection::vec("[a-e]", 0..5),
        id in "[a-e]",
    ) {
        let epd = process(&id);
        let mut candidate = Candidate::new(&epd);
        let filter = Filter::from(IdentityFilter::new(allowed.iter().cloned()));
        prop_assert_eq!(filter.matches(&mut candidate), allowed.contains(&id));
    }
}

// ── Escalation only broadens, until it saturates ─────────────────────────

proptest! {
    #[test]
    fn escalation_broadens_or_saturates(locations in arb_locations()) {
        let once = escalate(&locations);
        prop_assert!(once.is_superset(&locations));

        let twice = escalate(&once);
        prop_assert!(twice.is_superset(&once));
        prop_assert!(twice.contains("GLO"));
        prop_assert_eq!(escalate(&twice), twice.clone());
    }
}

// ── Property averages cover reporters only ───────────────────────────────

proptest! {
    #[test]
    fn property_average_is_mean_of_reporters(
        densities in prop::collection::vec(prop::option::of(100.0f64..5000.0), 1..8),
    ) {
        let materials: Vec<PropertyMap> = densities
            .iter()
            .map(|d| {
                let mut map = PropertyMap::from([(Property::Mass, 1.0)]);
                if let Some(d) = d {
                    map.insert(Property::GrossDensity, *d);
                }
                map
            })
            .collect();
        let averaged = average_properties(materials.iter());

        let reporters: Vec<f64> = densities.iter().flatten().copied().collect();
        match averaged.get(&Property::GrossDensity) {
            Some(&mean) => {
                let expected = reporters.iter().sum::<f64>() / reporters.len() as f64;
                prop_assert!(close(mean, expected));
            }
            None => prop_assert!(reporters.is_empty()),
        }
        prop_assert!(close(averaged[&Property::Mass], 1.0));
    }
}

// ── Rescaling hits the target and keeps intensives ───────────────────────

proptest! {
    #[test]
    fn rescale_matches_target(
        mass in 0.01f64..1000.0,
        density in 100.0f64..5000.0,
        wanted in 0.01f64..100.0,
    ) {
        let mut material = Material::from_properties(PropertyMap::from([
            (Property::Mass, mass),
            (Property::GrossDensity, density),
        ]));
        let target = TargetProperties::new(
            PropertyMap::from([(Property::Volume, wanted)]),
            Some(Property::Volume),
        );
        material.rescale(&target).unwrap();

        prop_assert!(close(material.get(Property::Volume).unwrap(), wanted));
        prop_assert!(close(material.get(Property::GrossDensity).unwrap(), density));
        prop_assert!(close(material.get(Property::Mass).unwrap(), wanted * density));
        prop_assert!(close(material.scaling_factor(), wanted * density / mass));
    }
}

// ── Market weighting stays within the per-market range ───────────────────

proptest! {
    #[test]
    fn weighted_average_is_bounded(
        entries in prop::collection::vec((0.01f64..1.0, -100.0f64..100.0), 1..5),
    ) {
        let mut markets = Vec::new();
        let mut impacts = BTreeMap::new();
        for (i, (share, value)) in entries.iter().enumerate() {
            let code = CODES[i];
            markets.push(Market::new(code, *share));
            impacts.insert(
                code.to_string(),
                ImpactMap::from([(
                    "GWP-total".to_string(),
                    ModuleValues::from([(LifeCycleModule::A1A3, *value)]),
                )]),
            );
        }
        let combined = weighted_average(&markets, &impacts)["GWP-total"][&LifeCycleModule::A1A3];

        let lo = entries.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
        let hi = entries.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(combined >= lo - 1e-9 && combined <= hi + 1e-9);
    }
}
