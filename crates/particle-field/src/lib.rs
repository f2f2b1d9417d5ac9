//! # particle-field
//!
//! Core simulation for a glyph-shaped particle field: particles anchored to
//! rest positions sampled from rasterized text, repelled by the pointer and
//! relaxing back when it moves away, with distance-faded links drawn between
//! near neighbours.
//!
//! This crate is renderer-agnostic: all drawing goes through the [`Surface`]
//! trait, so a full [`Simulation::tick`] can run against a recording surface
//! in tests without any window or GPU.

pub mod connect;
pub mod field;
pub mod particle;
pub mod simulation;
pub mod surface;

pub use connect::*;
pub use field::*;
pub use particle::*;
pub use simulation::*;
pub use surface::*;

#[cfg(test)]
pub(crate) mod recording;
