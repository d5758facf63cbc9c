//! The base `stowage` module containing all shared components of the packing engine

/// Entities to model 3D cuboid Bin Packing problems
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Static stability evaluation of candidate placements
pub mod stability;

/// Helper functions which do not belong to any specific module
pub mod util;
