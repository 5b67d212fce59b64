//! Resolution of move tokens into rotations of layers.

use std::f32::consts::FRAC_PI_2;

use cgmath::{Matrix3, Rad, Vector3};
use cubedrill_notation::TokenParts;

use crate::{Axis, Face};

/// Set of layers turned by a move, expressed as a predicate over cubie
/// positions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LayerSelection {
    /// Single outer layer on the given face.
    Outer(Face),
    /// Outer layer on the given face plus the middle layer next to it.
    Wide(Face),
    /// Middle layer perpendicular to the given axis.
    Middle(Axis),
    /// Whole cube.
    All,
    /// No cubies at all. Unrecognized tokens resolve to this.
    Nothing,
}
impl LayerSelection {
    /// Returns whether a cubie at `pos` is turned by the move.
    pub fn contains(self, pos: Vector3<f32>) -> bool {
        let along = |face: Face| face.sign().float() * pos[face.axis() as usize];
        match self {
            LayerSelection::Outer(face) => along(face) > 0.5,
            LayerSelection::Wide(face) => along(face) > -0.5,
            LayerSelection::Middle(axis) => pos[axis as usize].abs() < 0.5,
            LayerSelection::All => true,
            LayerSelection::Nothing => false,
        }
    }
}

/// Fully resolved move: which layers turn, around which axis, and how far.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MoveDescriptor {
    /// Axis of rotation.
    pub axis: Axis,
    /// Layers that turn.
    pub layers: LayerSelection,
    /// Signed number of quarter turns around the positive end of `axis`,
    /// using the right-hand rule. Always one of -2, -1, 1, or 2.
    pub quarter_turns: i8,
}
impl MoveDescriptor {
    /// Resolves a move token.
    ///
    /// Tokens that don't name a face, slice, or whole-cube rotation resolve
    /// to an empty layer selection rather than an error.
    pub fn resolve(token: &str) -> Self {
        let parts = TokenParts::of(token);

        // Clockwise as seen from outside a face is a negative rotation
        // around that face's outward normal. Slices and rotations follow
        // the face they turn with.
        let face_move = |face: Face, layers| (face.axis(), layers, -face.sign().int());
        let (axis, layers, base) = match parts.letter {
            Some('M') => face_move(Face::L, LayerSelection::Middle(Axis::X)),
            Some('E') => face_move(Face::D, LayerSelection::Middle(Axis::Y)),
            Some('S') => face_move(Face::F, LayerSelection::Middle(Axis::Z)),
            Some('X') => face_move(Face::R, LayerSelection::All),
            Some('Y') => face_move(Face::U, LayerSelection::All),
            Some('Z') => face_move(Face::F, LayerSelection::All),
            Some(c) => match Face::from_symbol(c) {
                Some(face) if parts.wide => face_move(face, LayerSelection::Wide(face)),
                Some(face) => face_move(face, LayerSelection::Outer(face)),
                None => (Axis::X, LayerSelection::Nothing, 1),
            },
            None => (Axis::X, LayerSelection::Nothing, 1),
        };

        let direction = if parts.prime { -1 } else { 1 };
        let multiplier = if parts.double { 2 } else { 1 };

        Self {
            axis,
            layers,
            quarter_turns: base * direction * multiplier,
        }
    }

    /// Returns whether the move turns nothing.
    pub fn is_no_op(&self) -> bool {
        self.layers == LayerSelection::Nothing
    }

    /// Returns whether a cubie at `pos` is turned by the move.
    pub fn contains(&self, pos: Vector3<f32>) -> bool {
        self.layers.contains(pos)
    }

    /// Returns the full angle of the move.
    pub fn angle(&self) -> Rad<f32> {
        Rad(FRAC_PI_2 * self.quarter_turns as f32)
    }

    /// Returns the rotation for a fraction of the move, where `1.0` is the
    /// whole move.
    pub fn rotation(&self, fraction: f32) -> Matrix3<f32> {
        if fraction >= 1.0 {
            self.axis.rotation_matrix(self.angle())
        } else {
            self.axis.rotation_matrix(self.angle() * fraction)
        }
    }
}
