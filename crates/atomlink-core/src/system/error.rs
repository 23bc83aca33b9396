use super::neighbors::NeighborListOptions;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SystemError {
    #[error("A neighbor list for {options} is already present in this system")]
    DuplicateNeighborList { options: NeighborListOptions },

    #[error("No neighbor list for {options} in this system")]
    NeighborListNotFound { options: NeighborListOptions },

    #[error("Custom data '{name}' is already present in this system")]
    DuplicateData { name: String },

    #[error("No custom data '{name}' in this system")]
    DataNotFound { name: String },

    #[error("The name '{name}' is reserved, pick a name for this data that is not 'position', 'cell', or starting with '_'")]
    ReservedName { name: String },
}
