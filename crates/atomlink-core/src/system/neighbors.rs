use crate::model::serialize::JsonRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Map key for stored neighbor lists. Half lists order before full lists,
/// then by ascending cutoff. Cutoffs are compared by bit pattern, which
/// matches numeric order for the finite, non-negative values engines request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct NeighborListKey {
    full_list: bool,
    cutoff_bits: u64,
}

/// Parameters of one neighbor list request made by a model.
///
/// The request is identified by its cutoff radius and by whether each pair
/// should be stored in both directions. The list of requestors is an audit
/// trail of which components asked for this list; it never participates in
/// equality, so independent requesters with matching parameters can share a
/// single computed list.
#[derive(Debug, Clone)]
pub struct NeighborListOptions {
    /// Spherical cutoff radius, in the model's length unit.
    model_cutoff: f64,
    /// Cutoff radius converted to the engine's length unit.
    engine_cutoff: f64,
    /// Whether pairs are stored both as `i -> j` and `j -> i`.
    full_list: bool,
    /// Audit trail of the components that requested this list.
    requestors: Vec<String>,
}

impl NeighborListOptions {
    /// Creates options for a neighbor list with the given cutoff.
    ///
    /// The engine cutoff starts out equal to the model cutoff, matching an
    /// engine that works in the model's own length unit.
    ///
    /// # Arguments
    ///
    /// * `model_cutoff` - Spherical cutoff radius, in the model's length unit.
    /// * `full_list` - Whether pairs should be stored in both directions.
    pub fn new(model_cutoff: f64, full_list: bool) -> Self {
        Self {
            model_cutoff,
            engine_cutoff: model_cutoff,
            full_list,
            requestors: Vec::new(),
        }
    }

    /// Returns the cutoff radius in the model's length unit.
    pub fn model_cutoff(&self) -> f64 {
        self.model_cutoff
    }

    /// Returns the cutoff radius in the engine's length unit.
    ///
    /// This is only meaningful after `set_engine_unit` was called with the
    /// conversion factor for the engine's unit.
    pub fn engine_cutoff(&self) -> f64 {
        self.engine_cutoff
    }

    /// Sets the conversion factor from the model's length unit to the
    /// engine's length unit.
    ///
    /// The engine cutoff is recomputed from the model cutoff on every call,
    /// never from the previous engine cutoff.
    pub fn set_engine_unit(&mut self, conversion: f64) {
        self.engine_cutoff = self.model_cutoff * conversion;
    }

    /// Returns whether pairs are stored both as `i -> j` and `j -> i`.
    pub fn full_list(&self) -> bool {
        self.full_list
    }

    /// Returns the components that requested this list, in request order.
    pub fn requestors(&self) -> &[String] {
        &self.requestors
    }

    /// Records that `requestor` asked for this neighbor list.
    ///
    /// The trail is an append-only log, not a set; repeated requestors are
    /// kept as-is.
    pub fn add_requestor(&mut self, requestor: &str) {
        self.requestors.push(requestor.to_string());
    }

    pub(crate) fn key(&self) -> NeighborListKey {
        NeighborListKey {
            full_list: self.full_list,
            cutoff_bits: self.model_cutoff.to_bits(),
        }
    }
}

/// Equality considers `model_cutoff` and `full_list` only; `requestors` and
/// `engine_cutoff` never participate.
impl PartialEq for NeighborListOptions {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for NeighborListOptions {}

impl fmt::Display for NeighborListOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cutoff {} ({} list)",
            self.model_cutoff,
            if self.full_list { "full" } else { "half" }
        )
    }
}

#[derive(Serialize, Deserialize)]
struct RawNeighborListOptions {
    model_cutoff: f64,
    full_list: bool,
}

impl Serialize for NeighborListOptions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        RawNeighborListOptions {
            model_cutoff: self.model_cutoff,
            full_list: self.full_list,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NeighborListOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawNeighborListOptions::deserialize(deserializer)?;
        Ok(NeighborListOptions::new(raw.model_cutoff, raw.full_list))
    }
}

impl JsonRecord for NeighborListOptions {
    const CLASS: &'static str = "NeighborListOptions";
}
