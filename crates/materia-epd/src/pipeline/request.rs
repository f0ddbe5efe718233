//! Generic-process requests.

use std::fmt;

use materia_core::errors::RequestError;
use materia_core::types::{DeclaredUnit, ImpactMap, Property, PropertyMap};

use crate::ilcd::{IlcdFlow, IlcdProcess};
use crate::lookup::{Market, MarketShareSource, MatchCriteria, MatchCriteriaSource};
use crate::physics::TargetProperties;

/// Progress of one request through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStage {
    Init,
    Extracted,
    CandidateFiltered,
    Fallback,
    Averaged,
    MarketWeighted,
    Done,
    Failed,
}

impl fmt::Display for RequestStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Extracted => "extracted",
            Self::CandidateFiltered => "candidate_filtered",
            Self::Fallback => "fallback",
            Self::Averaged => "averaged",
            Self::MarketWeighted => "market_weighted",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// One generic EPD to synthesize, populated step by step.
#[derive(Debug, Clone)]
pub struct GenericProcessRequest {
    pub process: IlcdProcess,
    pub flow: Option<IlcdFlow>,
    pub declared_unit: Option<DeclaredUnit>,
    pub hs_class: Option<String>,
    pub target: TargetProperties,
    pub criteria: Option<MatchCriteria>,
    pub markets: Vec<Market>,
    pub averaged_properties: Option<PropertyMap>,
    pub averaged_impacts: Option<ImpactMap>,
    pub stage: RequestStage,
}

impl GenericProcessRequest {
    pub fn new(process: IlcdProcess) -> Self {
        Self {
            process,
            flow: None,
            declared_unit: None,
            hs_class: None,
            target: TargetProperties::default(),
            criteria: None,
            markets: Vec::new(),
            averaged_properties: None,
            averaged_impacts: None,
            stage: RequestStage::Init,
        }
    }

    pub fn uuid(&self) -> &str {
        &self.process.uuid
    }

    /// Resolve the reference flow, declared unit, HS class, markets and
    /// match criteria, then build the target.
    pub fn extract(
        &mut self,
        criteria: &dyn MatchCriteriaSource,
        shares: &dyn MarketShareSource,
    ) -> Result<(), RequestError> {
        let flow = self.process.resolve_reference_flow()?;
        let declared_unit = flow
            .declared_unit()
            .ok_or_else(|| RequestError::MissingDeclaredUnit {
                uuid: self.process.uuid.clone(),
            })?;

        self.hs_class = self.process.hs_class();
        self.markets = shares.markets_for(&self.process.location, self.hs_class.as_deref());
        self.criteria = criteria.criteria_for(&self.process.uuid)?;
        self.target = build_target(&flow, declared_unit, self.criteria.as_ref());
        self.declared_unit = Some(declared_unit);
        self.flow = Some(flow);
        self.stage = RequestStage::Extracted;

        tracing::debug!(
            uuid = %self.process.uuid,
            declared_unit = %declared_unit,
            hs_class = self.hs_class.as_deref().unwrap_or_default(),
            markets = self.markets.len(),
            "Request extracted"
        );
        Ok(())
    }

    /// Switch to one kilogram as the functional unit.
    pub fn switch_to_mass_basis(&mut self) {
        self.declared_unit = Some(DeclaredUnit::Mass);
        self.target = TargetProperties::mass_basis();
    }

    pub fn basis(&self) -> Property {
        self.target
            .basis
            .or_else(|| self.declared_unit.map(|u| u.property()))
            .unwrap_or(Property::Mass)
    }
}

/// One unit of the declared quantity, the template flow's intensive
/// properties, then criteria overrides on top.
fn build_target(
    flow: &IlcdFlow,
    declared_unit: DeclaredUnit,
    criteria: Option<&MatchCriteria>,
) -> TargetProperties {
    let basis = declared_unit.property();
    let mut values: PropertyMap = flow
        .values
        .iter()
        .filter(|(p, _)| p.is_intensive())
        .map(|(&p, &v)| (p, v))
        .collect();
    values.insert(basis, 1.0);
    if let Some(criteria) = criteria {
        values.extend(criteria.properties.iter().map(|(&p, &v)| (p, v)));
    }
    TargetProperties::new(values, Some(basis))
}
