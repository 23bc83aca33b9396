use super::error::DataError;
use super::labels::Labels;
use ndarray::ArrayD;
use std::collections::BTreeMap;

/// An opaque labeled multi-dimensional value.
///
/// A block owns a primary array of shape `[samples, components..., properties]`
/// together with the labels describing each axis, and zero or more named
/// gradient blocks. The surrounding crate stores blocks and hands them back;
/// it never computes with their values.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorBlock {
    /// Primary array, one row per sample.
    values: ArrayD<f64>,
    /// Labels for the first axis of `values`.
    samples: Labels,
    /// Labels for each interior axis of `values`, in order.
    components: Vec<Labels>,
    /// Labels for the last axis of `values`.
    properties: Labels,
    /// Gradients of the values with respect to named parameters.
    gradients: BTreeMap<String, TensorBlock>,
}

impl TensorBlock {
    /// Creates a block from an array and the labels of its axes.
    ///
    /// # Arguments
    ///
    /// * `values` - The primary array.
    /// * `samples` - Labels for the first axis.
    /// * `components` - Labels for each interior axis.
    /// * `properties` - Labels for the last axis.
    ///
    /// # Return
    ///
    /// Returns the block if every axis extent matches its labels.
    ///
    /// # Errors
    ///
    /// Returns `DataError::MismatchedDimensions` if the array rank is not
    /// `2 + components.len()`, or `DataError::MismatchedShape` if an axis
    /// extent disagrees with the corresponding label count.
    pub fn new(
        values: ArrayD<f64>,
        samples: Labels,
        components: Vec<Labels>,
        properties: Labels,
    ) -> Result<Self, DataError> {
        let shape = values.shape();
        let expected = components.len() + 2;
        if shape.len() != expected {
            return Err(DataError::MismatchedDimensions {
                expected,
                actual: shape.len(),
            });
        }

        if shape[0] != samples.count() {
            return Err(DataError::MismatchedShape {
                axis: "samples".to_string(),
                expected: samples.count(),
                actual: shape[0],
            });
        }

        for (i, component) in components.iter().enumerate() {
            if shape[i + 1] != component.count() {
                return Err(DataError::MismatchedShape {
                    axis: format!("component {}", i),
                    expected: component.count(),
                    actual: shape[i + 1],
                });
            }
        }

        if shape[expected - 1] != properties.count() {
            return Err(DataError::MismatchedShape {
                axis: "properties".to_string(),
                expected: properties.count(),
                actual: shape[expected - 1],
            });
        }

        Ok(Self {
            values,
            samples,
            components,
            properties,
            gradients: BTreeMap::new(),
        })
    }

    /// Returns the primary array.
    pub fn values(&self) -> &ArrayD<f64> {
        &self.values
    }

    /// Returns the labels of the sample axis.
    pub fn samples(&self) -> &Labels {
        &self.samples
    }

    /// Returns the labels of the component axes, in order.
    pub fn components(&self) -> &[Labels] {
        &self.components
    }

    /// Returns the labels of the property axis.
    pub fn properties(&self) -> &Labels {
        &self.properties
    }

    /// Attaches a gradient of this block's values with respect to `parameter`.
    ///
    /// # Arguments
    ///
    /// * `parameter` - Name of the parameter the gradient is taken against.
    /// * `gradient` - The gradient block.
    ///
    /// # Errors
    ///
    /// Returns `DataError::DuplicateGradient` if a gradient for `parameter`
    /// is already present.
    pub fn add_gradient(&mut self, parameter: &str, gradient: TensorBlock) -> Result<(), DataError> {
        if self.gradients.contains_key(parameter) {
            return Err(DataError::DuplicateGradient {
                parameter: parameter.to_string(),
            });
        }
        self.gradients.insert(parameter.to_string(), gradient);
        Ok(())
    }

    /// Retrieves the gradient with respect to `parameter`.
    ///
    /// # Return
    ///
    /// Returns `Some(&TensorBlock)` if the gradient exists, otherwise `None`.
    pub fn gradient(&self, parameter: &str) -> Option<&TensorBlock> {
        self.gradients.get(parameter)
    }

    /// Returns the parameters with attached gradients, in sorted order.
    pub fn gradients_list(&self) -> Vec<&str> {
        self.gradients.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_block() -> TensorBlock {
        let samples = Labels::range("atom", 2).unwrap();
        let components = vec![Labels::range("xyz", 3).unwrap()];
        let properties = Labels::new(&["position"], vec![vec![0]]).unwrap();
        let values = ArrayD::zeros(vec![2, 3, 1]);
        TensorBlock::new(values, samples, components, properties).unwrap()
    }

    #[test]
    fn new_accepts_matching_shape() {
        let block = sample_block();

        assert_eq!(block.values().shape(), &[2, 3, 1]);
        assert_eq!(block.samples().count(), 2);
        assert_eq!(block.components().len(), 1);
        assert_eq!(block.properties().names(), &["position"]);
    }

    #[test]
    fn new_accepts_blocks_without_components() {
        let samples = Labels::range("atom", 4).unwrap();
        let properties = Labels::range("energy", 1).unwrap();
        let values = ArrayD::zeros(vec![4, 1]);

        let block = TensorBlock::new(values, samples, vec![], properties).unwrap();
        assert_eq!(block.values().shape(), &[4, 1]);
    }

    #[test]
    fn new_rejects_wrong_rank() {
        let samples = Labels::range("atom", 2).unwrap();
        let properties = Labels::single();
        let values = ArrayD::zeros(vec![2, 3, 1]);

        let result = TensorBlock::new(values, samples, vec![], properties);
        assert!(matches!(
            result,
            Err(DataError::MismatchedDimensions {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn new_rejects_sample_count_mismatch() {
        let samples = Labels::range("atom", 3).unwrap();
        let properties = Labels::single();
        let values = ArrayD::zeros(vec![2, 1]);

        let result = TensorBlock::new(values, samples, vec![], properties);
        assert!(matches!(
            result,
            Err(DataError::MismatchedShape { axis, expected: 3, actual: 2 }) if axis == "samples"
        ));
    }

    #[test]
    fn new_rejects_component_extent_mismatch() {
        let samples = Labels::range("atom", 2).unwrap();
        let components = vec![Labels::range("xyz", 3).unwrap()];
        let properties = Labels::single();
        let values = ArrayD::zeros(vec![2, 2, 1]);

        let result = TensorBlock::new(values, samples, components, properties);
        assert!(matches!(
            result,
            Err(DataError::MismatchedShape { axis, .. }) if axis == "component 0"
        ));
    }

    #[test]
    fn new_rejects_property_count_mismatch() {
        let samples = Labels::range("atom", 2).unwrap();
        let properties = Labels::range("p", 2).unwrap();
        let values = ArrayD::zeros(vec![2, 1]);

        let result = TensorBlock::new(values, samples, vec![], properties);
        assert!(matches!(
            result,
            Err(DataError::MismatchedShape { axis, .. }) if axis == "properties"
        ));
    }

    #[test]
    fn gradients_are_stored_and_listed_in_order() {
        let mut block = sample_block();

        block.add_gradient("strain", sample_block()).unwrap();
        block.add_gradient("positions", sample_block()).unwrap();

        assert_eq!(block.gradients_list(), vec!["positions", "strain"]);
        assert!(block.gradient("strain").is_some());
        assert!(block.gradient("momenta").is_none());
    }

    #[test]
    fn duplicate_gradient_is_rejected() {
        let mut block = sample_block();
        block.add_gradient("positions", sample_block()).unwrap();

        let result = block.add_gradient("positions", sample_block());
        assert!(matches!(
            result,
            Err(DataError::DuplicateGradient { parameter }) if parameter == "positions"
        ));
    }
}
