//! The `Filter` variants.

use std::collections::BTreeSet;
use std::fmt;

use crate::geo::normalize_location;
use crate::physics::TargetProperties;
use crate::pipeline::Candidate;

/// Keeps candidates whose id is in an allow-list.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityFilter {
    allowed: BTreeSet<String>,
}

impl IdentityFilter {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.allowed.contains(id)
    }
}

/// Keeps candidates whose reference flow can be expressed on a target.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitConformityFilter {
    target: TargetProperties,
}

impl UnitConformityFilter {
    pub fn new(target: TargetProperties) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &TargetProperties {
        &self.target
    }

    /// Resolves the candidate's reference flow (once) and rescales a fresh
    /// flow material onto the target. On success the material is stored on
    /// the candidate.
    fn evaluate(&self, candidate: &mut Candidate<'_>) -> bool {
        if candidate.flow.is_none() {
            match candidate.epd.resolve_reference_flow() {
                Ok(flow) => {
                    tracing::debug!(
                        epd_uuid = %candidate.uuid(),
                        flow_uuid = %flow.uuid,
                        "Reference flow resolved"
                    );
                    candidate.flow = Some(flow);
                }
                Err(e) => {
                    tracing::debug!(epd_uuid = %candidate.uuid(), error = %e, "Reference flow unresolved");
                    candidate.material = None;
                    return false;
                }
            }
        }
        let Some(flow) = candidate.flow.as_ref() else {
            return false;
        };

        let mut material = flow.material();
        match material.rescale(&self.target) {
            Ok(()) => {
                candidate.material = Some(material);
                true
            }
            Err(e) => {
                tracing::debug!(
                    epd_uuid = %candidate.uuid(),
                    flow_uuid = %flow.uuid,
                    error = %e,
                    "Flow cannot be rescaled"
                );
                candidate.material = None;
                false
            }
        }
    }
}

/// Keeps candidates located in a set of location codes.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationFilter {
    locations: BTreeSet<String>,
}

impl LocationFilter {
    pub fn new<I, S>(locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            locations: locations
                .into_iter()
                .map(|l| normalize_location(l.as_ref()))
                .collect(),
        }
    }

    pub fn contains(&self, location: &str) -> bool {
        self.locations.contains(location)
    }

    pub fn locations(&self) -> &BTreeSet<String> {
        &self.locations
    }
}

/// A predicate over one candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Identity(IdentityFilter),
    UnitConformity(UnitConformityFilter),
    Location(LocationFilter),
}

impl Filter {
    pub fn matches(&self, candidate: &mut Candidate<'_>) -> bool {
        match self {
            Self::Identity(f) => f.contains(candidate.uuid()),
            Self::UnitConformity(f) => f.evaluate(candidate),
            Self::Location(f) => f.contains(candidate.location()),
        }
    }
}

impl From<IdentityFilter> for Filter {
    fn from(f: IdentityFilter) -> Self {
        Self::Identity(f)
    }
}

impl From<UnitConformityFilter> for Filter {
    fn from(f: UnitConformityFilter) -> Self {
        Self::UnitConformity(f)
    }
}

impl From<LocationFilter> for Filter {
    fn from(f: LocationFilter) -> Self {
        Self::Location(f)
    }
}

impl fmt::Display for IdentityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "identity in [{}]", join(self.allowed.iter().map(String::as_str)))
    }
}

impl fmt::Display for UnitConformityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self
            .target
            .values
            .iter()
            .map(|(p, v)| format!("{p}={v}"))
            .collect::<Vec<_>>();
        write!(f, "unit conformity to {{{}}}", values.join(", "))?;
        if let Some(basis) = self.target.basis {
            write!(f, " per {basis}")?;
        }
        Ok(())
    }
}

impl fmt::Display for LocationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "location in [{}]", join(self.locations.iter().map(String::as_str)))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity(inner) => inner.fmt(f),
            Self::UnitConformity(inner) => inner.fmt(f),
            Self::Location(inner) => inner.fmt(f),
        }
    }
}

fn join<'s>(items: impl Iterator<Item = &'s str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}
