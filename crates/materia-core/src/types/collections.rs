//! Ordered maps used across extraction, averaging and write-back.
//!
//! `BTreeMap` everywhere so iteration order (and therefore every derived
//! number and every written document) is deterministic.

use std::collections::BTreeMap;

use super::{LifeCycleModule, Property};

/// Property name → value in canonical units.
pub type PropertyMap = BTreeMap<Property, f64>;

/// Life-cycle module → contribution for one indicator.
pub type ModuleValues = BTreeMap<LifeCycleModule, f64>;

/// Canonical indicator name → per-module contributions.
pub type ImpactMap = BTreeMap<String, ModuleValues>;
