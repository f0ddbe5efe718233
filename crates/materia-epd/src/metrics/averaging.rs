//! Property, impact and market-share weighted averages.
//!
//! Every mean is taken over the entries that actually report a value: a
//! candidate without a property (or a module of an indicator) is left out
//! of that cell rather than counted as zero.

use std::collections::BTreeMap;

use statrs::statistics::Statistics;

use materia_core::types::{ImpactMap, LifeCycleModule, Property, PropertyMap};

use crate::ilcd::LciaResult;
use crate::lookup::Market;

/// Arithmetic mean per property over the materials reporting it.
pub fn average_properties<'m, I>(materials: I) -> PropertyMap
where
    I: IntoIterator<Item = &'m PropertyMap>,
{
    let mut samples: BTreeMap<Property, Vec<f64>> = BTreeMap::new();
    for properties in materials {
        for (&property, &value) in properties {
            samples.entry(property).or_default().push(value);
        }
    }
    samples
        .into_iter()
        .map(|(property, values)| (property, values.iter().mean()))
        .collect()
}

/// Mean per (indicator, module) over the result lists reporting that cell.
pub fn average_impacts<'r, I>(result_lists: I) -> ImpactMap
where
    I: IntoIterator<Item = &'r [LciaResult]>,
{
    let mut samples: BTreeMap<&'r str, BTreeMap<LifeCycleModule, Vec<f64>>> = BTreeMap::new();
    for results in result_lists {
        for result in results {
            let cells = samples.entry(result.indicator.as_str()).or_default();
            for (&module, &value) in &result.values {
                cells.entry(module).or_default().push(value);
            }
        }
    }
    samples
        .into_iter()
        .map(|(indicator, cells)| {
            let values = cells
                .into_iter()
                .map(|(module, values)| (module, values.iter().mean()))
                .collect();
            (indicator.to_string(), values)
        })
        .collect()
}

/// Combine per-market impacts weighted by market share.
///
/// Per cell the weights are renormalized over the markets that have an
/// impact map and report that cell. Markets with a non-positive share or
/// without impacts do not contribute.
pub fn weighted_average(markets: &[Market], market_impacts: &BTreeMap<String, ImpactMap>) -> ImpactMap {
    let mut sums: BTreeMap<&str, BTreeMap<LifeCycleModule, (f64, f64)>> = BTreeMap::new();
    for market in markets.iter().filter(|m| m.share > 0.0 && m.share.is_finite()) {
        let Some(impacts) = market_impacts.get(&market.code) else {
            continue;
        };
        for (indicator, values) in impacts {
            let cells = sums.entry(indicator.as_str()).or_default();
            for (&module, &value) in values {
                let (weighted, weight) = cells.entry(module).or_insert((0.0, 0.0));
                *weighted += market.share * value;
                *weight += market.share;
            }
        }
    }
    sums.into_iter()
        .map(|(indicator, cells)| {
            let values = cells
                .into_iter()
                .map(|(module, (weighted, weight))| (module, weighted / weight))
                .collect();
            (indicator.to_string(), values)
        })
        .collect()
}
