use crate::data::block::TensorBlock;
use crate::data::error::DataError;
use crate::data::labels::Labels;
use nalgebra::{Matrix3, Point3, Vector3};
use ndarray::ArrayD;
use tracing::trace;

/// One atom pair produced by an engine's neighbor search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborPair {
    /// Index of the first atom in the pair.
    pub first_atom: i32,
    /// Index of the second atom in the pair.
    pub second_atom: i32,
    /// Number of cell boundaries crossed to reach the second atom, along
    /// each cell vector.
    pub cell_shift: Vector3<i32>,
}

impl NeighborPair {
    pub fn new(first_atom: i32, second_atom: i32, cell_shift: Vector3<i32>) -> Self {
        Self {
            first_atom,
            second_atom,
            cell_shift,
        }
    }
}

/// Assembles a positions block in the conventional layout.
///
/// The block carries one sample per atom with dimensions `"atom"` and
/// `"species"`, an `"xyz"` component, and a single `"position"` property,
/// giving values of shape `[n_atoms, 3, 1]`.
///
/// # Errors
///
/// Returns `DataError::MismatchedInput` if `species` and `positions` disagree
/// in length.
pub fn positions_block(
    species: &[i32],
    positions: &[Point3<f64>],
) -> Result<TensorBlock, DataError> {
    if species.len() != positions.len() {
        return Err(DataError::MismatchedInput(format!(
            "{} species for {} positions",
            species.len(),
            positions.len()
        )));
    }

    let samples = Labels::new(
        &["atom", "species"],
        species
            .iter()
            .enumerate()
            .map(|(i, &species)| vec![i as i32, species])
            .collect(),
    )?;
    let components = vec![Labels::range("xyz", 3)?];
    let properties = Labels::new(&["position"], vec![vec![0]])?;

    let mut values = ArrayD::zeros(vec![positions.len(), 3, 1]);
    for (i, position) in positions.iter().enumerate() {
        for direction in 0..3 {
            values[[i, direction, 0]] = position[direction];
        }
    }

    trace!("Assembled positions block for {} atoms", positions.len());
    TensorBlock::new(values, samples, components, properties)
}

/// Assembles a cell block in the conventional layout.
///
/// The block carries a single `"_"` sample, components `"cell_abc"` and
/// `"xyz"`, and a single `"cell"` property, giving values of shape
/// `[1, 3, 3, 1]`. Rows of `cell` are the cell vectors; an all-zero matrix
/// describes a non-periodic system.
pub fn cell_block(cell: Matrix3<f64>) -> Result<TensorBlock, DataError> {
    let samples = Labels::single();
    let components = vec![Labels::range("cell_abc", 3)?, Labels::range("xyz", 3)?];
    let properties = Labels::new(&["cell"], vec![vec![0]])?;

    let mut values = ArrayD::zeros(vec![1, 3, 3, 1]);
    for vector in 0..3 {
        for direction in 0..3 {
            values[[0, vector, direction, 0]] = cell[(vector, direction)];
        }
    }

    trace!("Assembled cell block");
    TensorBlock::new(values, samples, components, properties)
}

/// Assembles a neighbor list block from engine-computed pairs.
///
/// The block carries one sample per pair with dimensions `"first_atom"`,
/// `"second_atom"`, `"cell_shift_a"`, `"cell_shift_b"` and `"cell_shift_c"`,
/// an `"xyz"` component, and a single `"distance"` property. Values of shape
/// `[n_pairs, 3, 1]` hold the vector from the first to the second atom,
/// accounting for the cell shift.
///
/// # Errors
///
/// Returns `DataError::MismatchedInput` if `pairs` and `vectors` disagree in
/// length, and `DataError::InvalidLabels` if the same pair appears twice.
pub fn neighbors_block(
    pairs: &[NeighborPair],
    vectors: &[Vector3<f64>],
) -> Result<TensorBlock, DataError> {
    if pairs.len() != vectors.len() {
        return Err(DataError::MismatchedInput(format!(
            "{} pairs for {} pair vectors",
            pairs.len(),
            vectors.len()
        )));
    }

    let samples = Labels::new(
        &[
            "first_atom",
            "second_atom",
            "cell_shift_a",
            "cell_shift_b",
            "cell_shift_c",
        ],
        pairs
            .iter()
            .map(|pair| {
                vec![
                    pair.first_atom,
                    pair.second_atom,
                    pair.cell_shift[0],
                    pair.cell_shift[1],
                    pair.cell_shift[2],
                ]
            })
            .collect(),
    )?;
    let components = vec![Labels::range("xyz", 3)?];
    let properties = Labels::new(&["distance"], vec![vec![0]])?;

    let mut values = ArrayD::zeros(vec![pairs.len(), 3, 1]);
    for (i, vector) in vectors.iter().enumerate() {
        for direction in 0..3 {
            values[[i, direction, 0]] = vector[direction];
        }
    }

    trace!("Assembled neighbor block for {} pairs", pairs.len());
    TensorBlock::new(values, samples, components, properties)
}
