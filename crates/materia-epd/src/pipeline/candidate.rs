//! Per-request view of one source EPD.

use crate::ilcd::{IlcdFlow, IlcdProcess, LciaResult};
use crate::physics::Material;

/// A source EPD under evaluation for one request.
///
/// The process itself is shared read-only across requests; everything
/// derived while filtering (resolved flow, rescaled material, LCIA results)
/// lives here and is dropped with the request.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub epd: &'a IlcdProcess,
    pub flow: Option<IlcdFlow>,
    pub material: Option<Material>,
    pub lcia: Vec<LciaResult>,
}

impl<'a> Candidate<'a> {
    pub fn new(epd: &'a IlcdProcess) -> Self {
        Self {
            epd,
            flow: None,
            material: None,
            lcia: Vec::new(),
        }
    }

    pub fn uuid(&self) -> &str {
        &self.epd.uuid
    }

    pub fn location(&self) -> &str {
        &self.epd.location
    }
}
