//! Shared ILCD fixtures for integration tests.

#![allow(dead_code)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use materia_core::types::Property;

pub const MASS_UUID: &str = "93a60a56-a3c8-11da-a746-0800200b9a66";
pub const VOLUME_UUID: &str = "93a60a56-a3c8-22da-a746-0800200c9a66";
pub const AREA_UUID: &str = "93a60a56-a3c8-19da-a746-0800200c9a66";

/// A flow document to write.
pub struct FlowSpec<'a> {
    pub uuid: &'a str,
    pub reference: Property,
    /// Extensive flow properties with their mean values.
    pub properties: Vec<(Property, f64)>,
    /// MatML entries: name, unit symbol, value.
    pub matml: Vec<(&'a str, &'a str, f64)>,
}

/// A process document to write.
pub struct ProcessSpec<'a> {
    pub uuid: &'a str,
    pub location: &'a str,
    pub flow_uuid: &'a str,
    pub amount: f64,
    /// Indicator label with module values.
    pub lcia: Vec<(&'a str, Vec<(&'a str, f64)>)>,
}

fn flow_property_uuid(property: Property) -> &'static str {
    match property {
        Property::Mass => MASS_UUID,
        Property::Volume => VOLUME_UUID,
        Property::Area => AREA_UUID,
        Property::Length => "838aaa23-0117-11db-92e3-0800200c9a66",
        _ => "01846770-4cfe-4a25-8ad9-919d8d378345",
    }
}

pub fn flow_xml(spec: &FlowSpec<'_>) -> String {
    let reference_id = spec
        .properties
        .iter()
        .position(|(p, _)| *p == spec.reference)
        .unwrap_or(0);

    let mut matml_data = String::new();
    let mut matml_details = String::new();
    for (i, (name, unit, value)) in spec.matml.iter().enumerate() {
        write!(
            matml_data,
            "\n            <mm:PropertyData property=\"pr{i}\"><mm:Data format=\"float\">{value}</mm:Data></mm:PropertyData>"
        )
        .unwrap();
        write!(
            matml_details,
            "\n          <mm:PropertyDetails id=\"pr{i}\"><mm:Name>{name}</mm:Name><mm:Units name=\"{unit}\"><mm:Unit><mm:Name>{unit}</mm:Name></mm:Unit></mm:Units></mm:PropertyDetails>"
        )
        .unwrap();
    }

    let mut properties = String::new();
    for (i, (property, value)) in spec.properties.iter().enumerate() {
        write!(
            properties,
            r#"
    <flowProperty dataSetInternalID="{i}">
      <referenceToFlowPropertyDataSet type="flow property data set" refObjectId="{uuid}">
        <common:shortDescription xml:lang="en">{property}</common:shortDescription>
      </referenceToFlowPropertyDataSet>
      <meanValue>{value}</meanValue>
    </flowProperty>"#,
            uuid = flow_property_uuid(*property),
        )
        .unwrap();
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<flowDataSet xmlns="http://lca.jrc.it/ILCD/Flow" xmlns:common="http://lca.jrc.it/ILCD/Common" xmlns:mm="http://www.matml.org/" version="1.1">
  <flowInformation>
    <dataSetInformation>
      <common:UUID>{uuid}</common:UUID>
      <common:other>
        <mm:MatML_Doc>
          <mm:Material>
            <mm:BulkDetails>
              <mm:Name>{uuid}</mm:Name>{matml_data}
            </mm:BulkDetails>
          </mm:Material>
          <mm:Metadata>{matml_details}
          </mm:Metadata>
        </mm:MatML_Doc>
      </common:other>
    </dataSetInformation>
    <quantitativeReference>
      <referenceToReferenceFlowProperty>{reference_id}</referenceToReferenceFlowProperty>
    </quantitativeReference>
  </flowInformation>
  <flowProperties>{properties}
  </flowProperties>
</flowDataSet>
"#,
        uuid = spec.uuid,
    )
}

pub fn process_xml(spec: &ProcessSpec<'_>) -> String {
    let mut lcia = String::new();
    for (label, values) in &spec.lcia {
        let mut amounts = String::new();
        for (module, value) in values {
            write!(
                amounts,
                "\n          <epd:amount module=\"{module}\">{value}</epd:amount>"
            )
            .unwrap();
        }
        write!(
            lcia,
            r#"
    <LCIAResult>
      <referenceToLCIAMethodDataSet type="LCIA method data set" refObjectId="m-{label}">
        <common:shortDescription xml:lang="de">Methode</common:shortDescription>
        <common:shortDescription xml:lang="en">{label}</common:shortDescription>
      </referenceToLCIAMethodDataSet>
      <meanAmount>0</meanAmount>
      <common:other>{amounts}
      </common:other>
    </LCIAResult>"#
        )
        .unwrap();
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<processDataSet xmlns="http://lca.jrc.it/ILCD/Process" xmlns:common="http://lca.jrc.it/ILCD/Common" xmlns:epd="http://www.iai.kit.edu/EPD/2013" version="1.1">
  <processInformation>
    <dataSetInformation>
      <common:UUID>{uuid}</common:UUID>
      <classificationInformation>
        <common:classification name="HS">
          <common:class level="0" classId="25">Mineral products</common:class>
          <common:class level="2" classId="2523">Portland cement</common:class>
        </common:classification>
      </classificationInformation>
    </dataSetInformation>
    <quantitativeReference type="Reference flow(s)">
      <referenceToReferenceFlow>0</referenceToReferenceFlow>
    </quantitativeReference>
    <geography>
      <locationOfOperationSupplyOrProduction location="{location}"/>
    </geography>
  </processInformation>
  <exchanges>
    <exchange dataSetInternalID="0">
      <referenceToFlowDataSet type="flow data set" refObjectId="{flow}" uri="../flows/{flow}.xml"/>
      <meanAmount>{amount}</meanAmount>
    </exchange>
  </exchanges>
  <LCIAResults>{lcia}
  </LCIAResults>
</processDataSet>
"#,
        uuid = spec.uuid,
        location = spec.location,
        flow = spec.flow_uuid,
        amount = spec.amount,
    )
}

/// Write a process (and optionally its flow) into `<dataset>/processes`
/// and `<dataset>/flows`. Returns the process path.
pub fn write_dataset_entry(dataset: &Path, process: &ProcessSpec<'_>, flow: Option<&FlowSpec<'_>>) -> PathBuf {
    let processes = dataset.join("processes");
    let flows = dataset.join("flows");
    std::fs::create_dir_all(&processes).unwrap();
    std::fs::create_dir_all(&flows).unwrap();
    let path = processes.join(format!("{}.xml", process.uuid));
    std::fs::write(&path, process_xml(process)).unwrap();
    if let Some(flow) = flow {
        std::fs::write(flows.join(format!("{}.xml", flow.uuid)), flow_xml(flow)).unwrap();
    }
    path
}

/// Mass-referenced flow: `mass` kg per unit, optional density.
pub fn mass_flow<'a>(uuid: &'a str, mass: f64, density: Option<f64>) -> FlowSpec<'a> {
    FlowSpec {
        uuid,
        reference: Property::Mass,
        properties: vec![(Property::Mass, mass)],
        matml: density
            .map(|d| vec![("gross density", "kg/m^3", d)])
            .unwrap_or_default(),
    }
}

/// Area-referenced flow with a mass per square metre.
pub fn area_flow<'a>(uuid: &'a str, mass_per_m2: f64) -> FlowSpec<'a> {
    FlowSpec {
        uuid,
        reference: Property::Area,
        properties: vec![(Property::Area, 1.0), (Property::Mass, mass_per_m2)],
        matml: vec![],
    }
}

pub fn gwp(a1a3: f64) -> (&'static str, Vec<(&'static str, f64)>) {
    ("Global Warming Potential - total (GWP-total)", vec![("A1-A3", a1a3)])
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}
