//! Structured field names used across log records.
//!
//! The JSON log is queried by these keys, so they stay stable.

pub const UUID: &str = "uuid";
pub const EPD_UUID: &str = "epd_uuid";
pub const FLOW_UUID: &str = "flow_uuid";
pub const MARKET: &str = "market";
pub const ATTEMPTS: &str = "attempts";
pub const FILTERS: &str = "filters";
pub const ERROR_CODE: &str = "error_code";
pub const PATH: &str = "path";
