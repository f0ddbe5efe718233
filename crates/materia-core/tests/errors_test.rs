//! Tests for the Materia error handling system.

use std::collections::HashSet;
use std::path::PathBuf;

use materia_core::errors::error_code;
use materia_core::errors::*;
use materia_core::types::Property;

#[test]
fn test_every_error_has_a_code() {
    let document = DocumentError::Malformed {
        path: PathBuf::from("a.xml"),
        message: "unexpected end".into(),
    };
    assert_eq!(document.error_code(), "DOCUMENT_ERROR");

    let reference = ReferenceError::MissingQuantitativeReference { uuid: "p1".into() };
    assert_eq!(reference.error_code(), "REFERENCE_ERROR");

    let rescale = RescaleError::Underivable {
        property: Property::Volume,
        known: vec![Property::Mass],
    };
    assert_eq!(rescale.error_code(), "RESCALE_ERROR");

    let market = NoMatchingEpdError {
        market: "DE".into(),
        attempts: 4,
        filters: vec![],
    };
    assert_eq!(market.error_code(), "NO_MATCHING_EPD");

    let config = ConfigError::FileNotFound { path: "/tmp".into() };
    assert_eq!(config.error_code(), "CONFIG_ERROR");

    let output = OutputError::Write {
        path: PathBuf::from("out.xml"),
        message: "denied".into(),
    };
    assert_eq!(output.error_code(), "OUTPUT_ERROR");
}

#[test]
fn test_request_error_codes_delegate() {
    let err: RequestError = RescaleError::InvalidBasis {
        property: Property::Mass,
        value: 0.0,
    }
    .into();
    assert_eq!(err.error_code(), error_code::RESCALE_ERROR);

    let err = RequestError::NoConformingCandidates {
        uuid: "g1".into(),
        filters: "identity".into(),
    };
    assert_eq!(err.error_code(), error_code::NO_CONFORMING_EPD);

    let err = RequestError::MissingDeclaredUnit { uuid: "g1".into() };
    assert_eq!(err.error_code(), error_code::MISSING_DECLARED_UNIT);

    let err = PipelineError::Request {
        uuid: "g1".into(),
        source: RequestError::NoMarkets { uuid: "g1".into() },
    };
    assert_eq!(err.error_code(), error_code::NO_MARKETS);
}

#[test]
fn test_error_codes_are_distinct() {
    let codes = [
        error_code::DOCUMENT_ERROR,
        error_code::REFERENCE_ERROR,
        error_code::RESCALE_ERROR,
        error_code::NO_MATCHING_EPD,
        error_code::NO_CONFORMING_EPD,
        error_code::MISSING_DECLARED_UNIT,
        error_code::NO_MARKETS,
        error_code::CONFIG_ERROR,
        error_code::OUTPUT_ERROR,
        error_code::PIPELINE_ERROR,
    ];
    let unique: HashSet<_> = codes.iter().collect();
    assert_eq!(unique.len(), codes.len());
}

#[test]
fn test_messages_carry_context() {
    let market = NoMatchingEpdError {
        market: "FR".into(),
        attempts: 2,
        filters: vec!["location in [FR]".into(), "location in [FR, RER]".into()],
    };
    let msg = market.to_string();
    assert!(msg.contains("FR"));
    assert!(msg.contains("2 attempts"));
    assert!(msg.contains("location in [FR] -> location in [FR, RER]"));

    let rescale = RescaleError::Underivable {
        property: Property::Volume,
        known: vec![Property::Mass, Property::Area],
    };
    assert_eq!(
        rescale.to_string(),
        "Cannot derive volume from known properties [mass, area]"
    );
}

#[test]
fn test_coded_string() {
    let err = ReferenceError::MissingExchange {
        uuid: "p1".into(),
        exchange_id: "0".into(),
    };
    assert_eq!(
        err.coded_string(),
        "[REFERENCE_ERROR] Process p1 has no exchange with internal id 0"
    );
}

#[test]
fn test_from_conversions() {
    let doc = DocumentError::MissingField {
        path: PathBuf::from("x.xml"),
        field: "UUID".into(),
    };
    assert_eq!(doc.path(), &PathBuf::from("x.xml"));
    let request: RequestError = doc.clone().into();
    assert!(matches!(request, RequestError::Extraction(_)));
    let pipeline: PipelineError = doc.into();
    assert!(matches!(pipeline, PipelineError::Document(_)));

    let config = ConfigError::ValidationFailed {
        field: "f".into(),
        message: "m".into(),
    };
    let pipeline: PipelineError = config.into();
    assert!(matches!(pipeline, PipelineError::Config(_)));
}

#[test]
fn test_pipeline_result_accumulates() {
    let mut result: PipelineResult<usize> = PipelineResult::new(3);
    assert!(result.is_clean());
    result.add_error(PipelineError::InputMissing { path: "/in".into() });
    assert!(!result.is_clean());
    assert_eq!(result.error_count(), 1);
    assert_eq!(result.data, 3);
}
