use super::convert;
use super::error::SystemError;
use super::neighbors::{NeighborListKey, NeighborListOptions};
use crate::data::block::TensorBlock;
use crate::data::error::DataError;
use nalgebra::{Matrix3, Point3};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::debug;

const RESERVED_DATA_NAMES: [&str; 2] = ["position", "cell"];

fn is_reserved_name(name: &str) -> bool {
    RESERVED_DATA_NAMES.contains(&name) || name.starts_with('_')
}

/// An atomistic system exchanged between a simulation engine and a model.
///
/// A system is constructed once from its positions and cell blocks, then
/// populated incrementally: the engine attaches the neighbor lists and custom
/// data a model asked for, and the model reads them back during its forward
/// pass. All stored blocks are shared handles; the system keeps its own and
/// hands out clones, so nothing is moved or copied on access.
#[derive(Debug, Clone)]
pub struct System {
    /// Positions and species of the atoms.
    positions: Arc<TensorBlock>,
    /// Cell vectors of the periodic simulation box.
    cell: Arc<TensorBlock>,
    /// Neighbor lists, keyed by the structural part of their options.
    neighbors: BTreeMap<NeighborListKey, NeighborListEntry>,
    /// Engine-specific data blocks, keyed by name.
    data: HashMap<String, Arc<TensorBlock>>,
}

/// One stored neighbor list, with the options it was registered under.
#[derive(Debug, Clone)]
struct NeighborListEntry {
    options: NeighborListOptions,
    block: Arc<TensorBlock>,
}

impl System {
    /// Creates a system from its positions and cell blocks.
    ///
    /// # Arguments
    ///
    /// * `positions` - Block with the positions and species of the atoms. By
    ///   contract it carries two sample dimensions `"atom"` and `"species"`,
    ///   one `"xyz"` component with entries 0/1/2, and a single `"position"`
    ///   property. The contract is documentation for engine and model code;
    ///   it is not enforced here.
    /// * `cell` - Block with the cell vectors as a row-major 3x3 matrix, all
    ///   zeros for a non-periodic system. By contract it carries a single
    ///   `"_"` sample, two components `"cell_abc"` and `"xyz"`, and a single
    ///   `"cell"` property.
    pub fn new(positions: Arc<TensorBlock>, cell: Arc<TensorBlock>) -> Self {
        Self {
            positions,
            cell,
            neighbors: BTreeMap::new(),
            data: HashMap::new(),
        }
    }

    /// Creates a system from plain engine-side arrays.
    ///
    /// The positions and cell blocks are assembled with the conventional
    /// layouts documented on [`System::new`].
    ///
    /// # Arguments
    ///
    /// * `species` - Atomic species of each atom, typically atomic numbers.
    /// * `positions` - Cartesian position of each atom.
    /// * `cell` - Cell vectors as matrix rows, all zeros for a non-periodic
    ///   system.
    ///
    /// # Errors
    ///
    /// Returns `DataError::MismatchedInput` if `species` and `positions`
    /// disagree in length.
    pub fn from_arrays(
        species: &[i32],
        positions: &[Point3<f64>],
        cell: Matrix3<f64>,
    ) -> Result<Self, DataError> {
        let positions = convert::positions_block(species, positions)?;
        let cell = convert::cell_block(cell)?;
        Ok(Self::new(Arc::new(positions), Arc::new(cell)))
    }

    /// Returns a handle to the positions block.
    pub fn positions(&self) -> Arc<TensorBlock> {
        Arc::clone(&self.positions)
    }

    /// Returns a handle to the cell block.
    pub fn cell(&self) -> Arc<TensorBlock> {
        Arc::clone(&self.cell)
    }

    /// Returns the number of atoms in the system.
    ///
    /// The count is the first-dimension extent of the positions block's
    /// primary array, derived on every call and never stored separately.
    pub fn size(&self) -> usize {
        self.positions.values().shape()[0]
    }

    /// Registers a neighbor list computed for the given options.
    ///
    /// # Arguments
    ///
    /// * `options` - The request parameters the list was computed for.
    /// * `block` - The computed neighbor list.
    ///
    /// # Errors
    ///
    /// Returns `SystemError::DuplicateNeighborList` if a list with equal
    /// options is already stored. The existing list is never overwritten;
    /// additional requesters are expected to read it back with
    /// [`System::get_neighbors_list`] instead.
    pub fn add_neighbors_list(
        &mut self,
        options: NeighborListOptions,
        block: Arc<TensorBlock>,
    ) -> Result<(), SystemError> {
        let key = options.key();
        if self.neighbors.contains_key(&key) {
            return Err(SystemError::DuplicateNeighborList { options });
        }

        debug!("Storing neighbor list for {}", options);
        self.neighbors
            .insert(key, NeighborListEntry { options, block });
        Ok(())
    }

    /// Retrieves the neighbor list stored for the given options.
    ///
    /// Lookup uses the structural equality of the options; the requestors of
    /// `options` and of the stored entry are irrelevant.
    ///
    /// # Return
    ///
    /// Returns a handle to the stored block.
    ///
    /// # Errors
    ///
    /// Returns `SystemError::NeighborListNotFound` if no stored list compares
    /// equal to `options`.
    pub fn get_neighbors_list(
        &self,
        options: &NeighborListOptions,
    ) -> Result<Arc<TensorBlock>, SystemError> {
        self.neighbors
            .get(&options.key())
            .map(|entry| Arc::clone(&entry.block))
            .ok_or_else(|| SystemError::NeighborListNotFound {
                options: options.clone(),
            })
    }

    /// Returns the options of every stored neighbor list.
    ///
    /// The options are ordered by list kind (half before full), then by
    /// ascending cutoff, and keep the requestors they were registered with.
    pub fn known_neighbors_lists(&self) -> Vec<NeighborListOptions> {
        self.neighbors
            .values()
            .map(|entry| entry.options.clone())
            .collect()
    }

    /// Stores a named block of engine-specific data.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the data, compared by exact string equality.
    /// * `block` - The data block.
    ///
    /// # Errors
    ///
    /// Returns `SystemError::ReservedName` if `name` is `"position"`,
    /// `"cell"`, or starts with an underscore, and
    /// `SystemError::DuplicateData` if the name is already in use. Existing
    /// data is never overwritten.
    pub fn add_data(&mut self, name: &str, block: Arc<TensorBlock>) -> Result<(), SystemError> {
        if is_reserved_name(name) {
            return Err(SystemError::ReservedName {
                name: name.to_string(),
            });
        }
        if self.data.contains_key(name) {
            return Err(SystemError::DuplicateData {
                name: name.to_string(),
            });
        }

        debug!("Storing custom data '{}'", name);
        self.data.insert(name.to_string(), block);
        Ok(())
    }

    /// Retrieves the custom data stored under `name`.
    ///
    /// # Return
    ///
    /// Returns a handle to the stored block.
    ///
    /// # Errors
    ///
    /// Returns `SystemError::DataNotFound` if nothing is stored under `name`.
    pub fn get_data(&self, name: &str) -> Result<Arc<TensorBlock>, SystemError> {
        self.data
            .get(name)
            .map(Arc::clone)
            .ok_or_else(|| SystemError::DataNotFound {
                name: name.to_string(),
            })
    }

    /// Returns the names of all stored custom data, sorted.
    pub fn known_data(&self) -> Vec<String> {
        let mut names: Vec<String> = self.data.keys().cloned().collect();
        names.sort_unstable();
        names
    }
}
