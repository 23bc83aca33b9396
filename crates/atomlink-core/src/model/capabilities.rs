use super::output::ModelOutput;
use super::serialize::JsonRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything a model is able to compute, as advertised to engines.
///
/// A capability manifest is typically written next to an exported model and
/// read by engines to decide whether and how the model can be used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelCapabilities {
    /// Unit of lengths the model expects positions and cell to be in.
    pub length_unit: String,
    /// Atomic species the model can handle, typically atomic numbers. Order
    /// and duplicates are the caller's concern; they are not normalized here.
    pub species: Vec<i32>,
    /// All the outputs the model can compute, keyed by output name.
    pub outputs: BTreeMap<String, ModelOutput>,
}

impl ModelCapabilities {
    /// Creates a capability manifest with the given settings.
    pub fn new(
        length_unit: &str,
        species: Vec<i32>,
        outputs: BTreeMap<String, ModelOutput>,
    ) -> Self {
        Self {
            length_unit: length_unit.to_string(),
            species,
            outputs,
        }
    }
}

impl JsonRecord for ModelCapabilities {
    const CLASS: &'static str = "ModelCapabilities";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::serialize::ParseError;

    fn sample_capabilities() -> ModelCapabilities {
        let mut outputs = BTreeMap::new();
        outputs.insert(
            "energy".to_string(),
            ModelOutput::new("energy", "kcal/mol", false, vec!["positions".to_string()]),
        );
        outputs.insert(
            "charges".to_string(),
            ModelOutput::new("charge", "e", true, vec![]),
        );
        ModelCapabilities::new("angstrom", vec![1, 6, 8], outputs)
    }

    #[test]
    fn json_round_trip_preserves_every_field() {
        let capabilities = sample_capabilities();

        let decoded = ModelCapabilities::from_json(&capabilities.to_json().unwrap()).unwrap();
        assert_eq!(decoded, capabilities);
    }

    #[test]
    fn species_order_and_duplicates_are_preserved() {
        let capabilities = ModelCapabilities::new("nm", vec![8, 1, 1], BTreeMap::new());

        let decoded = ModelCapabilities::from_json(&capabilities.to_json().unwrap()).unwrap();
        assert_eq!(decoded.species, vec![8, 1, 1]);
    }

    #[test]
    fn outputs_must_be_a_mapping() {
        let json = r#"{
            "class": "ModelCapabilities",
            "version": 1,
            "length_unit": "angstrom",
            "species": [1],
            "outputs": [1, 2]
        }"#;

        let result = ModelCapabilities::from_json(json);
        assert!(matches!(result, Err(ParseError::Json { .. })));
    }

    #[test]
    fn missing_species_is_rejected() {
        let json = r#"{
            "class": "ModelCapabilities",
            "version": 1,
            "length_unit": "angstrom",
            "outputs": {}
        }"#;

        assert!(ModelCapabilities::from_json(json).is_err());
    }
}
