use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Version of the document format written by this build. Documents declaring
/// any other version are rejected during decoding.
pub const FORMAT_VERSION: u64 = 1;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid JSON document: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("Expected the document root to be a JSON object")]
    NotAnObject,

    #[error("Missing or malformed '{field}' field in the document")]
    MissingEnvelope { field: &'static str },

    #[error("Expected a '{expected}' document, found '{found}'")]
    UnexpectedClass {
        expected: &'static str,
        found: String,
    },

    #[error("Unsupported document format version {found}")]
    UnsupportedVersion { found: u64 },
}

/// A metadata record that persists as a self-describing JSON document.
///
/// Documents carry the record's fields next to a `class` tag naming the
/// record type and a `version` tag naming the format version, so a reader
/// can tell what it is looking at before committing to a shape.
pub trait JsonRecord: Serialize + DeserializeOwned {
    /// Class tag written to and expected from the document envelope.
    const CLASS: &'static str;

    /// Serializes this record to a pretty-printed JSON document.
    fn to_json(&self) -> Result<String, ParseError> {
        encode(Self::CLASS, self)
    }

    /// Deserializes a record from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the document is malformed, declares a
    /// different class or an unsupported version, or is missing required
    /// fields. Nothing is ever silently defaulted.
    fn from_json(json: &str) -> Result<Self, ParseError> {
        decode(Self::CLASS, json)
    }
}

pub(crate) fn encode<T>(class: &'static str, record: &T) -> Result<String, ParseError>
where
    T: Serialize,
{
    let mut document = match serde_json::to_value(record)? {
        Value::Object(map) => map,
        _ => return Err(ParseError::NotAnObject),
    };
    document.insert("class".to_string(), Value::from(class));
    document.insert("version".to_string(), Value::from(FORMAT_VERSION));

    Ok(serde_json::to_string_pretty(&Value::Object(document))?)
}

pub(crate) fn decode<T>(class: &'static str, json: &str) -> Result<T, ParseError>
where
    T: DeserializeOwned,
{
    let Value::Object(mut document) = serde_json::from_str(json)? else {
        return Err(ParseError::NotAnObject);
    };

    let found = match document.remove("class") {
        Some(Value::String(found)) => found,
        _ => return Err(ParseError::MissingEnvelope { field: "class" }),
    };
    if found != class {
        return Err(ParseError::UnexpectedClass {
            expected: class,
            found,
        });
    }

    let version = match document.remove("version").as_ref().and_then(Value::as_u64) {
        Some(version) => version,
        None => return Err(ParseError::MissingEnvelope { field: "version" }),
    };
    if version != FORMAT_VERSION {
        return Err(ParseError::UnsupportedVersion { found: version });
    }

    Ok(serde_json::from_value(Value::Object(document))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::output::ModelOutput;

    fn sample_output() -> ModelOutput {
        ModelOutput::new("energy", "kcal/mol", true, vec!["positions".to_string()])
    }

    #[test]
    fn encode_injects_class_and_version() {
        let json = sample_output().to_json().unwrap();
        let document: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(document["class"], "ModelOutput");
        assert_eq!(document["version"], FORMAT_VERSION);
        assert_eq!(document["quantity"], "energy");
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let result = ModelOutput::from_json("{not json");
        assert!(matches!(result, Err(ParseError::Json { .. })));
    }

    #[test]
    fn decode_rejects_non_object_documents() {
        let result = ModelOutput::from_json("[1, 2, 3]");
        assert!(matches!(result, Err(ParseError::NotAnObject)));
    }

    #[test]
    fn decode_rejects_missing_class() {
        let json = r#"{"version": 1, "quantity": "", "unit": "", "per_atom": false, "forward_gradients": []}"#;

        let result = ModelOutput::from_json(json);
        assert!(matches!(
            result,
            Err(ParseError::MissingEnvelope { field: "class" })
        ));
    }

    #[test]
    fn decode_rejects_wrong_class() {
        let json = sample_output().to_json().unwrap();
        let json = json.replace("ModelOutput", "ModelCapabilities");

        let result = ModelOutput::from_json(&json);
        assert!(matches!(
            result,
            Err(ParseError::UnexpectedClass { expected: "ModelOutput", found }) if found == "ModelCapabilities"
        ));
    }

    #[test]
    fn decode_rejects_missing_version() {
        let json = r#"{"class": "ModelOutput", "quantity": "", "unit": "", "per_atom": false, "forward_gradients": []}"#;

        let result = ModelOutput::from_json(json);
        assert!(matches!(
            result,
            Err(ParseError::MissingEnvelope { field: "version" })
        ));
    }

    #[test]
    fn decode_rejects_unknown_versions() {
        let json = sample_output().to_json().unwrap();
        let json = json.replace("\"version\": 1", "\"version\": 2");

        let result = ModelOutput::from_json(&json);
        assert!(matches!(
            result,
            Err(ParseError::UnsupportedVersion { found: 2 })
        ));
    }

    #[test]
    fn decode_rejects_missing_record_fields() {
        let json = r#"{"class": "ModelOutput", "version": 1, "quantity": "energy"}"#;

        let result = ModelOutput::from_json(json);
        assert!(matches!(result, Err(ParseError::Json { .. })));
    }
}
