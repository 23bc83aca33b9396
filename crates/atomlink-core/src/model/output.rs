use super::serialize::JsonRecord;
use serde::{Deserialize, Serialize};

/// Description of one quantity a model can compute.
///
/// The same record is used on both sides of the capability negotiation: a
/// model advertises its outputs in a [`ModelCapabilities`] manifest, and an
/// engine picks the outputs and settings it wants for one run in a
/// [`ModelRunOptions`] request.
///
/// [`ModelCapabilities`]: crate::model::capabilities::ModelCapabilities
/// [`ModelRunOptions`]: crate::model::run::ModelRunOptions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelOutput {
    /// Physical quantity of the output (e.g. energy, dipole). An empty
    /// string means the output is not checked against known quantities.
    pub quantity: String,
    /// Unit of the output. An empty string means no unit conversion should
    /// be applied downstream.
    pub unit: String,
    /// Whether the output is computed per atom or for the whole structure.
    pub per_atom: bool,
    /// Names of the gradients to compute in forward mode.
    pub forward_gradients: Vec<String>,
}

impl ModelOutput {
    /// Creates an output description with the given settings.
    pub fn new(quantity: &str, unit: &str, per_atom: bool, forward_gradients: Vec<String>) -> Self {
        Self {
            quantity: quantity.to_string(),
            unit: unit.to_string(),
            per_atom,
            forward_gradients,
        }
    }
}

impl JsonRecord for ModelOutput {
    const CLASS: &'static str = "ModelOutput";
}
