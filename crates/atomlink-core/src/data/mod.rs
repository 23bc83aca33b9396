//! # Data Module
//!
//! This module defines the labeled tensor value type stored throughout
//! AtomLink, providing the minimal block representation the rest of the
//! library needs to hold engine-produced data.
//!
//! ## Overview
//!
//! Simulation engines describe a system through dense arrays whose axes carry
//! names and integer coordinates: which atom a row belongs to, which spatial
//! direction a column represents, which property a value measures. The data
//! module captures exactly that structure and nothing more. Blocks are stored
//! and handed back by the rest of the library; no arithmetic is ever
//! performed on their values here.
//!
//! ## Key Components
//!
//! - [`labels`] - Named integer coordinates for one axis of a block
//! - [`block`] - The labeled array value, with optional named gradients
//! - [`error`] - Validation errors reported during construction

pub mod block;
pub mod error;
pub mod labels;
