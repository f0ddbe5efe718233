//! External side tables consulted during request extraction.

pub mod market_shares;
pub mod match_criteria;

pub use market_shares::{Market, MarketShareSource, MarketShareTable};
pub use match_criteria::{JsonMatchDirectory, MatchCriteria, MatchCriteriaSource};
