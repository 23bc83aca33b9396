use super::serialize::JsonRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Human-oriented description of an exported model.
///
/// Nothing here is validated or interpreted; the record exists so that the
/// provenance of a model file travels with it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Name of the model.
    pub name: String,
    /// Short description of what the model does and how it was trained.
    pub description: String,
    /// People and groups who created the model.
    pub authors: Vec<String>,
    /// Citations grouped by category, conventionally `"implementation"`,
    /// `"architecture"`, and `"model"`.
    pub references: BTreeMap<String, Vec<String>>,
}

impl JsonRecord for ModelMetadata {
    const CLASS: &'static str = "ModelMetadata";
}

impl fmt::Display for ModelMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
        }
        if !self.authors.is_empty() {
            writeln!(f, "Authors:")?;
            for author in &self.authors {
                writeln!(f, "  - {}", author)?;
            }
        }
        if !self.references.is_empty() {
            writeln!(f, "References:")?;
            for (category, entries) in &self.references {
                writeln!(f, "  {}:", category)?;
                for entry in entries {
                    writeln!(f, "    - {}", entry)?;
                }
            }
        }
        Ok(())
    }
}
