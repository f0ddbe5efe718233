//! Drives one request from extracted to market-weighted.

use std::collections::{BTreeMap, BTreeSet};

use materia_core::config::AggregationConfig;
use materia_core::errors::RequestError;
use materia_core::events::{
    EventDispatcher, FallbackActivatedEvent, IndicatorSkippedEvent, MarketFailedEvent,
};
use materia_core::types::{DeclaredUnit, ImpactMap, PropertyMap};

use super::candidate::Candidate;
use super::request::{GenericProcessRequest, RequestStage};
use super::source_set::SourceSet;
use crate::filters::{FilterChain, IdentityFilter, UnitConformityFilter};
use crate::geo::filter_by_location;
use crate::ilcd::IndicatorSynonyms;
use crate::metrics::{average_impacts, average_properties, weighted_average};
use crate::physics::{Material, TargetProperties};

/// What one successful aggregation produced.
#[derive(Debug, Clone, Default)]
pub struct AggregationOutcome {
    pub properties: PropertyMap,
    pub impacts: ImpactMap,
    /// Ids named by the match criteria.
    pub initial_epds: usize,
    /// Ids that passed candidate filtering.
    pub selected: Vec<String>,
    /// Market code → ids of the candidates its impacts were averaged over.
    pub market_pools: BTreeMap<String, Vec<String>>,
    pub dropped_markets: Vec<String>,
    pub fallback_used: bool,
}

pub struct AggregationPipeline<'s> {
    sources: &'s SourceSet,
    config: &'s AggregationConfig,
    synonyms: &'s IndicatorSynonyms,
    diagnostics: &'s EventDispatcher,
}

impl<'s> AggregationPipeline<'s> {
    pub fn new(
        sources: &'s SourceSet,
        config: &'s AggregationConfig,
        synonyms: &'s IndicatorSynonyms,
        diagnostics: &'s EventDispatcher,
    ) -> Self {
        Self {
            sources,
            config,
            synonyms,
            diagnostics,
        }
    }

    /// Aggregate an extracted request. On success the request holds the
    /// averaged properties and impacts and is `MarketWeighted`.
    pub fn aggregate(
        &self,
        request: &mut GenericProcessRequest,
    ) -> Result<AggregationOutcome, RequestError> {
        let result = self.run_stages(request);
        if result.is_err() {
            request.stage = RequestStage::Failed;
        }
        result
    }

    fn run_stages(
        &self,
        request: &mut GenericProcessRequest,
    ) -> Result<AggregationOutcome, RequestError> {
        let uuid = request.uuid().to_string();
        let ids = request
            .criteria
            .as_ref()
            .map(|c| c.uuids.clone())
            .unwrap_or_default();

        let mut candidates = self.gather(&uuid, &ids);
        let mut chain = FilterChain::new()
            .with(IdentityFilter::new(ids.iter().cloned()))
            .with(UnitConformityFilter::new(request.target.clone()));

        let mut passed = apply(&chain, &mut candidates);
        let mut fallback_used = false;

        if !passed.iter().any(|&p| p) && self.config.effective_fallback_to_mass() {
            let mass = TargetProperties::mass_basis();
            if request.target != mass {
                let from_unit = request
                    .declared_unit
                    .map(|u| u.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                self.diagnostics.emit_fallback_activated(&FallbackActivatedEvent {
                    uuid: uuid.clone(),
                    from_unit,
                    to_unit: DeclaredUnit::Mass.to_string(),
                    filters: chain.to_string(),
                });
                request.switch_to_mass_basis();
                request.stage = RequestStage::Fallback;
                chain.replace_unit_conformity(UnitConformityFilter::new(mass));
                passed = apply(&chain, &mut candidates);
                fallback_used = true;
            }
        }

        let mut selected: Vec<Candidate<'_>> = candidates
            .into_iter()
            .zip(passed)
            .filter_map(|(c, p)| p.then_some(c))
            .collect();
        if selected.is_empty() {
            return Err(RequestError::NoConformingCandidates {
                uuid,
                filters: chain.to_string(),
            });
        }
        request.stage = RequestStage::CandidateFiltered;

        for candidate in &mut selected {
            let scaling_factor = candidate
                .material
                .as_ref()
                .map(Material::scaling_factor)
                .unwrap_or(1.0);
            let extraction = candidate.epd.lcia_results(self.synonyms, scaling_factor);
            for reason in extraction.skipped {
                self.diagnostics.emit_indicator_skipped(&IndicatorSkippedEvent {
                    epd_uuid: candidate.uuid().to_string(),
                    reason,
                });
            }
            candidate.lcia = extraction.results;
        }

        let averaged = average_properties(
            selected
                .iter()
                .filter_map(|c| c.material.as_ref().map(Material::properties)),
        );
        let mut material = Material::from_properties(averaged);
        material.rescale(&request.target)?;
        let properties = material.into_properties();
        request.stage = RequestStage::Averaged;

        // Each market averages the LCIA results of its own location-filtered
        // pool; candidates outside the pool do not contribute.
        let max_attempts = self.config.effective_max_location_attempts();
        let drop_unmatched = self.config.effective_drop_unmatched_markets();
        let mut market_impacts: BTreeMap<String, ImpactMap> = BTreeMap::new();
        let mut market_pools = BTreeMap::new();
        let mut dropped_markets = Vec::new();

        for market in &request.markets {
            match filter_by_location(&selected, &market.code, max_attempts) {
                Ok(pool) => {
                    market_impacts.insert(
                        market.code.clone(),
                        average_impacts(pool.iter().map(|c| c.lcia.as_slice())),
                    );
                    market_pools.insert(
                        market.code.clone(),
                        pool.iter().map(|c| c.uuid().to_string()).collect(),
                    );
                }
                Err(e) => {
                    self.diagnostics.emit_market_failed(&MarketFailedEvent {
                        uuid: uuid.clone(),
                        market: e.market.clone(),
                        attempts: e.attempts,
                        filters: e.filters.clone(),
                        dropped: drop_unmatched,
                    });
                    if !drop_unmatched {
                        return Err(e.into());
                    }
                    dropped_markets.push(market.code.clone());
                }
            }
        }
        if market_impacts.is_empty() {
            return Err(RequestError::NoMarkets { uuid });
        }

        let impacts = weighted_average(&request.markets, &market_impacts);
        request.averaged_properties = Some(properties.clone());
        request.averaged_impacts = Some(impacts.clone());
        request.stage = RequestStage::MarketWeighted;

        Ok(AggregationOutcome {
            properties,
            impacts,
            initial_epds: ids.len(),
            selected: selected.iter().map(|c| c.uuid().to_string()).collect(),
            market_pools,
            dropped_markets,
            fallback_used,
        })
    }

    /// Candidates for the named ids, each id at most once.
    fn gather(&self, uuid: &str, ids: &[String]) -> Vec<Candidate<'s>> {
        let mut seen = BTreeSet::new();
        ids.iter()
            .filter(|id| seen.insert(id.as_str()))
            .filter_map(|id| {
                let found = self.sources.get(id);
                tracing::debug!(uuid, source_uuid = %id, exists = found.is_some(), "Files check");
                found.map(Candidate::new)
            })
            .collect()
    }
}

fn apply(chain: &FilterChain, candidates: &mut [Candidate<'_>]) -> Vec<bool> {
    candidates.iter_mut().map(|c| chain.matches(c)).collect()
}
