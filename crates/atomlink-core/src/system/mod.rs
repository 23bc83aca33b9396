//! # System Module
//!
//! This module implements the mutable, engine-populated description of an
//! atomistic system that is handed to a model for evaluation.
//!
//! ## Overview
//!
//! A [`system::System`] owns the positions and cell of a simulation, plus two
//! stores an engine fills in before a model runs: neighbor lists, keyed by
//! the structural part of their request parameters, and named custom data
//! blocks for engine-specific extensions. Both stores reject duplicates
//! instead of overwriting, so one component can never silently clobber data
//! another component already derived results from.
//!
//! ## Key Components
//!
//! - [`neighbors`] - Neighbor list request parameters and their equality and
//!   ordering rules
//! - [`system`] - The system itself, with its neighbor list and custom data
//!   stores
//! - [`convert`] - Assemblers building conventionally laid-out blocks from
//!   plain engine-side arrays
//! - [`error`] - Store errors for duplicate, missing, and reserved entries

pub mod convert;
pub mod error;
pub mod neighbors;
pub mod system;
