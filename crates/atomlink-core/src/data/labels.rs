use super::error::DataError;
use std::collections::HashSet;

/// Named integer coordinates describing one axis of a tensor block.
///
/// Each entry is one row of integer values, one value per dimension name.
/// Entries identify individual samples, components, or properties along the
/// axis, so duplicate entries are rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Names of the dimensions, in order.
    names: Vec<String>,
    /// Entry rows, each exactly `names.len()` values long.
    entries: Vec<Vec<i32>>,
}

impl Labels {
    /// Creates labels from dimension names and entry rows.
    ///
    /// # Arguments
    ///
    /// * `names` - The dimension names, which must be non-empty and distinct.
    /// * `entries` - The entry rows, each with one value per dimension.
    ///
    /// # Return
    ///
    /// Returns the validated labels.
    ///
    /// # Errors
    ///
    /// Returns `DataError::InvalidLabels` if a name is empty or repeated, if
    /// an entry has the wrong number of values, or if two entries are equal.
    pub fn new(names: &[&str], entries: Vec<Vec<i32>>) -> Result<Self, DataError> {
        let mut seen_names = HashSet::new();
        for name in names {
            if name.is_empty() {
                return Err(DataError::InvalidLabels(
                    "dimension names can not be empty".to_string(),
                ));
            }
            if !seen_names.insert(*name) {
                return Err(DataError::InvalidLabels(format!(
                    "duplicate dimension name '{}'",
                    name
                )));
            }
        }

        for entry in &entries {
            if entry.len() != names.len() {
                return Err(DataError::InvalidLabels(format!(
                    "entry {:?} has {} values, expected {}",
                    entry,
                    entry.len(),
                    names.len()
                )));
            }
        }

        let mut seen_entries: HashSet<&[i32]> = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen_entries.insert(entry.as_slice()) {
                return Err(DataError::InvalidLabels(format!(
                    "duplicate entry {:?}",
                    entry
                )));
            }
        }

        Ok(Self {
            names: names.iter().map(|name| name.to_string()).collect(),
            entries,
        })
    }

    /// Creates labels with a single `"_"` dimension holding the single entry `0`.
    ///
    /// This is the conventional shape for axes that carry no real metadata,
    /// such as the sample axis of a cell block.
    pub fn single() -> Self {
        Self {
            names: vec!["_".to_string()],
            entries: vec![vec![0]],
        }
    }

    /// Creates labels with one dimension and entries `0..count`.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the single dimension.
    /// * `count` - The number of entries to generate.
    ///
    /// # Errors
    ///
    /// Returns `DataError::InvalidLabels` if `name` is empty.
    pub fn range(name: &str, count: usize) -> Result<Self, DataError> {
        let entries = (0..count).map(|i| vec![i as i32]).collect();
        Self::new(&[name], entries)
    }

    /// Returns the dimension names, in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the number of dimensions.
    pub fn size(&self) -> usize {
        self.names.len()
    }

    /// Returns the number of entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Retrieves one entry row by index.
    ///
    /// # Return
    ///
    /// Returns `Some(&[i32])` if the index is in range, otherwise `None`.
    pub fn entry(&self, index: usize) -> Option<&[i32]> {
        self.entries.get(index).map(|entry| entry.as_slice())
    }

    /// Finds the index of an entry row.
    ///
    /// # Return
    ///
    /// Returns `Some(index)` if the entry is present, otherwise `None`.
    pub fn position(&self, entry: &[i32]) -> Option<usize> {
        self.entries.iter().position(|row| row.as_slice() == entry)
    }

    /// Returns an iterator over the entry rows.
    pub fn iter(&self) -> impl Iterator<Item = &[i32]> {
        self.entries.iter().map(|entry| entry.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_well_formed_labels() {
        let labels = Labels::new(&["atom", "species"], vec![vec![0, 6], vec![1, 1]]).unwrap();

        assert_eq!(labels.names(), &["atom", "species"]);
        assert_eq!(labels.size(), 2);
        assert_eq!(labels.count(), 2);
        assert_eq!(labels.entry(0), Some([0, 6].as_slice()));
        assert_eq!(labels.entry(2), None);
    }

    #[test]
    fn new_rejects_empty_dimension_name() {
        let result = Labels::new(&["atom", ""], vec![]);
        assert!(matches!(result, Err(DataError::InvalidLabels(_))));
    }

    #[test]
    fn new_rejects_duplicate_dimension_names() {
        let result = Labels::new(&["atom", "atom"], vec![]);
        assert!(matches!(result, Err(DataError::InvalidLabels(_))));
    }

    #[test]
    fn new_rejects_entry_with_wrong_arity() {
        let result = Labels::new(&["atom", "species"], vec![vec![0, 6], vec![1]]);
        assert!(matches!(result, Err(DataError::InvalidLabels(_))));
    }

    #[test]
    fn new_rejects_duplicate_entries() {
        let result = Labels::new(&["atom"], vec![vec![0], vec![1], vec![0]]);
        assert!(matches!(result, Err(DataError::InvalidLabels(_))));
    }

    #[test]
    fn single_has_one_placeholder_entry() {
        let labels = Labels::single();

        assert_eq!(labels.names(), &["_"]);
        assert_eq!(labels.count(), 1);
        assert_eq!(labels.entry(0), Some([0].as_slice()));
    }

    #[test]
    fn range_generates_sequential_entries() {
        let labels = Labels::range("xyz", 3).unwrap();

        assert_eq!(labels.names(), &["xyz"]);
        assert_eq!(labels.count(), 3);
        assert_eq!(labels.entry(1), Some([1].as_slice()));
    }

    #[test]
    fn range_rejects_empty_name() {
        assert!(Labels::range("", 3).is_err());
    }

    #[test]
    fn position_finds_existing_entries_only() {
        let labels = Labels::new(&["first", "second"], vec![vec![0, 1], vec![1, 0]]).unwrap();

        assert_eq!(labels.position(&[1, 0]), Some(1));
        assert_eq!(labels.position(&[2, 2]), None);
    }

    #[test]
    fn iter_yields_entries_in_order() {
        let labels = Labels::range("atom", 4).unwrap();
        let collected: Vec<&[i32]> = labels.iter().collect();

        assert_eq!(collected.len(), 4);
        assert_eq!(collected[3], &[3]);
    }
}
