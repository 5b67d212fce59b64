//! Discrete state engine for the 3x3x3 cube.
//!
//! The cube is modeled as 26 cubies on the integer lattice {-1, 0, 1}³
//! (excluding the center). Moves rotate a subset of cubies around one of the
//! three axes, either instantly or as an animation driven by frame deltas.
//! After every move, positions and orientations are snapped back onto the
//! lattice so that floating-point error never accumulates.

mod descriptor;
mod geometry;
pub mod interpolate;
mod lattice;
mod sign;
mod simulation;

#[cfg(test)]
mod tests;

pub use descriptor::{LayerSelection, MoveDescriptor};
pub use geometry::{Axis, Face};
pub use lattice::{CUBIE_COUNT, Cubie, CubieId, CubieSet, Lattice, Orientation};
pub use sign::Sign;
pub use simulation::{
    AnimationFrame, CubeSimulation, CubieTransform, TwistAnimation, TwistProgress, TwistRequest,
};
