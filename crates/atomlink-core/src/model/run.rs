use super::output::ModelOutput;
use super::serialize::JsonRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What an engine requests from a model for one run.
///
/// A request may ask for a subset of a capability manifest's outputs, or for
/// different per-atom and gradient settings within what the capability
/// allows. This type does not validate the request against a manifest; that
/// negotiation belongs to the calling layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelRunOptions {
    /// Unit of lengths the engine will supply positions and cell in.
    pub length_unit: String,
    /// Indices of the atoms to restrict the computation to. `None` means
    /// all atoms.
    #[serde(default)]
    pub selected_atoms: Option<Vec<i32>>,
    /// The outputs requested for this run, keyed by output name.
    pub outputs: BTreeMap<String, ModelOutput>,
}

impl ModelRunOptions {
    /// Creates a run request with the given settings.
    pub fn new(
        length_unit: &str,
        selected_atoms: Option<Vec<i32>>,
        outputs: BTreeMap<String, ModelOutput>,
    ) -> Self {
        Self {
            length_unit: length_unit.to_string(),
            selected_atoms,
            outputs,
        }
    }
}

impl JsonRecord for ModelRunOptions {
    const CLASS: &'static str = "ModelRunOptions";
}
