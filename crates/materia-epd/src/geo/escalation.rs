//! Stepwise broadening of a location set.

use std::collections::BTreeSet;

use materia_core::constants::GLOBAL_LOCATION;
use materia_core::errors::NoMatchingEpdError;

use super::locations::{all_codes, members, normalize_location, region_of};
use crate::filters::LocationFilter;
use crate::pipeline::Candidate;

/// One step up the hierarchy.
///
/// A country brings in its region and every member of that region; a
/// region, `GLO` or an unknown code brings in `GLO` and every known code.
/// The result always contains the input.
pub fn escalate(locations: &BTreeSet<String>) -> BTreeSet<String> {
    let mut broader = locations.clone();
    for code in locations {
        match region_of(code) {
            Some(region) => {
                broader.insert(region.to_string());
                broader.extend(members(region).iter().map(|m| m.to_string()));
            }
            None => {
                broader.insert(GLOBAL_LOCATION.to_string());
                broader.extend(all_codes().map(str::to_string));
            }
        }
    }
    broader
}

/// Candidates located in `market`, escalating the location set until at
/// least one matches or `max_attempts` filters have been tried.
pub fn filter_by_location<'c, 'a>(
    candidates: &'c [Candidate<'a>],
    market: &str,
    max_attempts: u32,
) -> Result<Vec<&'c Candidate<'a>>, NoMatchingEpdError> {
    let mut locations = BTreeSet::from([normalize_location(market)]);
    let mut tried = Vec::new();

    for attempt in 1..=max_attempts {
        let filter = LocationFilter::new(locations.clone());
        let matched: Vec<&Candidate<'a>> = candidates
            .iter()
            .filter(|c| filter.contains(c.location()))
            .collect();
        tried.push(filter.to_string());
        if !matched.is_empty() {
            tracing::debug!(market, attempt, matched = matched.len(), "Location filter matched");
            return Ok(matched);
        }
        locations = escalate(&locations);
    }

    Err(NoMatchingEpdError {
        market: market.to_string(),
        attempts: max_attempts,
        filters: tried,
    })
}
