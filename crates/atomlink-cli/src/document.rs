use crate::cli::RecordClass;
use crate::error::{CliError, Result};
use atomlink::model::capabilities::ModelCapabilities;
use atomlink::model::metadata::ModelMetadata;
use atomlink::model::output::ModelOutput;
use atomlink::model::run::ModelRunOptions;
use atomlink::model::serialize::JsonRecord;
use atomlink::system::neighbors::NeighborListOptions;

/// A parsed metadata document of any supported record type.
#[derive(Debug)]
pub enum Document {
    NeighborListOptions(NeighborListOptions),
    Output(ModelOutput),
    Capabilities(ModelCapabilities),
    RunOptions(ModelRunOptions),
    Metadata(ModelMetadata),
}

impl Document {
    /// Parses a JSON document, reading the class tag from the document itself
    /// unless `forced` pins it to a specific record type.
    pub fn parse(json: &str, forced: Option<RecordClass>) -> Result<Self> {
        let class = match forced {
            Some(class) => class,
            None => detect_class(json)?,
        };

        let document = match class {
            RecordClass::NeighborListOptions => {
                Document::NeighborListOptions(NeighborListOptions::from_json(json)?)
            }
            RecordClass::Output => Document::Output(ModelOutput::from_json(json)?),
            RecordClass::Capabilities => Document::Capabilities(ModelCapabilities::from_json(json)?),
            RecordClass::RunOptions => Document::RunOptions(ModelRunOptions::from_json(json)?),
            RecordClass::Metadata => Document::Metadata(ModelMetadata::from_json(json)?),
        };

        Ok(document)
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Document::NeighborListOptions(_) => NeighborListOptions::CLASS,
            Document::Output(_) => ModelOutput::CLASS,
            Document::Capabilities(_) => ModelCapabilities::CLASS,
            Document::RunOptions(_) => ModelRunOptions::CLASS,
            Document::Metadata(_) => ModelMetadata::CLASS,
        }
    }
}

fn detect_class(json: &str) -> Result<RecordClass> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let class = value
        .get("class")
        .and_then(|class| class.as_str())
        .ok_or(CliError::MissingClass)?;

    match class {
        "NeighborListOptions" => Ok(RecordClass::NeighborListOptions),
        "ModelOutput" => Ok(RecordClass::Output),
        "ModelCapabilities" => Ok(RecordClass::Capabilities),
        "ModelRunOptions" => Ok(RecordClass::RunOptions),
        "ModelMetadata" => Ok(RecordClass::Metadata),
        other => Err(CliError::UnknownClass {
            found: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomlink::model::serialize::ParseError;

    fn output_json() -> String {
        let output = ModelOutput::new("energy", "eV", false, vec![]);
        output.to_json().unwrap()
    }

    #[test]
    fn class_is_detected_from_the_document() {
        let document = Document::parse(&output_json(), None).unwrap();

        assert!(matches!(document, Document::Output(_)));
        assert_eq!(document.class_name(), "ModelOutput");
    }

    #[test]
    fn forced_class_must_match_the_document() {
        let result = Document::parse(&output_json(), Some(RecordClass::Capabilities));

        assert!(matches!(
            result,
            Err(CliError::Parse(ParseError::UnexpectedClass { .. }))
        ));
    }

    #[test]
    fn document_without_class_tag_is_rejected() {
        let json = r#"{ "quantity": "energy", "unit": "eV", "per_atom": false, "forward_gradients": [] }"#;
        let result = Document::parse(json, None);

        assert!(matches!(result, Err(CliError::MissingClass)));
    }

    #[test]
    fn unknown_class_tag_is_rejected() {
        let json = r#"{ "class": "ModelTelemetry", "version": 1 }"#;
        let result = Document::parse(json, None);

        match result {
            Err(CliError::UnknownClass { found }) => assert_eq!(found, "ModelTelemetry"),
            other => panic!("Expected an unknown class error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = Document::parse("{ not json", None);

        assert!(matches!(result, Err(CliError::Json(_))));
    }
}
