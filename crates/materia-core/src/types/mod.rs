//! Canonical domain types shared by every Materia crate.

pub mod collections;
pub mod module;
pub mod property;
pub mod unit;

pub use collections::{ImpactMap, ModuleValues, PropertyMap};
pub use module::LifeCycleModule;
pub use property::Property;
pub use unit::DeclaredUnit;
