//! # Model Module
//!
//! This module defines the metadata records exchanged between a simulation
//! engine and an atomistic model, together with their JSON document format.
//!
//! ## Overview
//!
//! Before an engine can drive a model it has to learn what the model can do,
//! and the model has to learn what is wanted from it. That handshake happens
//! through three records: [`output::ModelOutput`] describes one computable
//! quantity, [`capabilities::ModelCapabilities`] aggregates everything a
//! model advertises, and [`run::ModelRunOptions`] carries what an engine
//! requests for a single run. [`metadata::ModelMetadata`] rides along for
//! provenance. Each record persists as a self-describing JSON document via
//! the [`serialize::JsonRecord`] trait.
//!
//! ## Key Components
//!
//! - [`output`] - Description of one computable quantity
//! - [`capabilities`] - Model-side capability manifest
//! - [`run`] - Engine-side run request
//! - [`metadata`] - Provenance carried with an exported model
//! - [`serialize`] - The JSON document envelope and its errors

pub mod capabilities;
pub mod metadata;
pub mod output;
pub mod run;
pub mod serialize;
