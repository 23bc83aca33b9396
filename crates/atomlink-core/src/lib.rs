//! # AtomLink Core Library
//!
//! A typed data model for the interface between atomistic simulation engines
//! and machine learning models: what a system looks like, what a model can
//! compute, and what an engine requests for one run.
//!
//! ## Architectural Philosophy
//!
//! The library is designed as three layers with a clear separation of
//! concerns, so that each can evolve without disturbing the others.
//!
//! - **[`data`]: The Value Type.** The minimal labeled tensor block the rest
//!   of the library traffics in (`Labels`, `TensorBlock`). Blocks are stored
//!   and handed back, never computed with.
//!
//! - **[`system`]: The Exchange Object.** The mutable, engine-populated
//!   `System` with its duplicate-rejecting stores for neighbor lists (keyed
//!   structurally by `NeighborListOptions`) and named custom data, plus
//!   assemblers turning plain engine arrays into conventionally laid-out
//!   blocks.
//!
//! - **[`model`]: The Negotiation Records.** The capability manifests and run
//!   requests exchanged between engine and model (`ModelOutput`,
//!   `ModelCapabilities`, `ModelRunOptions`, `ModelMetadata`), persisted as
//!   self-describing JSON documents.

pub mod data;
pub mod model;
pub mod system;
