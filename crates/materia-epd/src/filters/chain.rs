//! Ordered filter composition.

use std::fmt;

use super::filter::{Filter, UnitConformityFilter};
use crate::pipeline::Candidate;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterChain {
    filters: Vec<Filter>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, filter: impl Into<Filter>) -> Self {
        self.push(filter);
        self
    }

    pub fn push(&mut self, filter: impl Into<Filter>) {
        self.filters.push(filter.into());
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// True when every filter matches; stops at the first that does not.
    pub fn matches(&self, candidate: &mut Candidate<'_>) -> bool {
        self.filters.iter().all(|f| f.matches(candidate))
    }

    /// Swap every unit-conformity filter for `replacement`, appending it when
    /// the chain had none.
    pub fn replace_unit_conformity(&mut self, replacement: UnitConformityFilter) {
        self.filters
            .retain(|f| !matches!(f, Filter::UnitConformity(_)));
        self.filters.push(Filter::UnitConformity(replacement));
    }
}

impl fmt::Display for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self
            .filters
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        f.write_str(&parts.join(" AND "))
    }
}
