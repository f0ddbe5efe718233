//! Local-name paths of the fixed ILCD fields read and written.

pub const UUID: &str = "UUID";
pub const LOCATION: &str = "locationOfOperationSupplyOrProduction";
pub const LOCATION_ATTR: &str = "location";

pub const REFERENCE_FLOW: &[&str] = &["quantitativeReference", "referenceToReferenceFlow"];
pub const REFERENCE_FLOW_PROPERTY: &[&str] =
    &["quantitativeReference", "referenceToReferenceFlowProperty"];

pub const EXCHANGE: &str = "exchange";
pub const INTERNAL_ID_ATTR: &str = "dataSetInternalID";
pub const FLOW_REFERENCE: &str = "referenceToFlowDataSet";
pub const REF_OBJECT_ID_ATTR: &str = "refObjectId";
pub const URI_ATTR: &str = "uri";
pub const MEAN_AMOUNT: &str = "meanAmount";
pub const RESULTING_AMOUNT: &str = "resultingAmount";

pub const CLASSIFICATION: &str = "classification";
pub const CLASS: &str = "class";
pub const HS_CLASSIFICATION: &str = "hsClassification";
pub const NAME_ATTR: &str = "name";
pub const LEVEL_ATTR: &str = "level";
pub const CLASS_ID_ATTR: &str = "classId";

pub const LCIA_RESULT: &str = "LCIAResult";
pub const LCIA_METHOD: &str = "referenceToLCIAMethodDataSet";
pub const SHORT_DESCRIPTION: &str = "shortDescription";
pub const LANG_ATTR: &str = "lang";
/// Module-tagged amounts live anywhere below an `LCIAResult`.
pub const AMOUNT: &str = "amount";
pub const MODULE_ATTR: &str = "module";

pub const FLOW_PROPERTY: &str = "flowProperty";
pub const FLOW_PROPERTY_REFERENCE: &str = "referenceToFlowPropertyDataSet";
pub const MEAN_VALUE: &str = "meanValue";

pub const MATML_DOC: &str = "MatML_Doc";
pub const PROPERTY_DATA: &str = "PropertyData";
pub const PROPERTY_ATTR: &str = "property";
pub const DATA: &str = "Data";
pub const PROPERTY_DETAILS: &str = "PropertyDetails";
pub const ID_ATTR: &str = "id";
pub const NAME: &str = "Name";
pub const UNITS: &str = "Units";
