//! Candidate predicates composed as an ordered short-circuiting AND.

pub mod chain;
pub mod filter;

pub use chain::FilterChain;
pub use filter::{Filter, IdentityFilter, LocationFilter, UnitConformityFilter};
