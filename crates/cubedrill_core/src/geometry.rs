//! Axes and faces of the cube.
//!
//! Coordinate frame: +X is right, +Y is up, +Z is toward the viewer (front).

use cgmath::{Matrix3, Rad, Vector3};
use strum::{EnumIter, IntoEnumIterator};

use crate::Sign;

/// Axis of the cube.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Left to right.
    X = 0,
    /// Down to up.
    Y = 1,
    /// Back to front.
    Z = 2,
}
impl Axis {
    /// Returns the lower-case symbol for the axis, which is also the
    /// whole-cube rotation around it.
    pub fn symbol(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }

    /// Returns the unit vector along the positive end of the axis.
    pub fn unit_vec(self) -> Vector3<i8> {
        match self {
            Axis::X => Vector3::new(1, 0, 0),
            Axis::Y => Vector3::new(0, 1, 0),
            Axis::Z => Vector3::new(0, 0, 1),
        }
    }

    /// Returns the matrix for a right-handed rotation around the axis.
    pub fn rotation_matrix(self, angle: Rad<f32>) -> Matrix3<f32> {
        match self {
            Axis::X => Matrix3::from_angle_x(angle),
            Axis::Y => Matrix3::from_angle_y(angle),
            Axis::Z => Matrix3::from_angle_z(angle),
        }
    }
}

/// Face of the cube.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// Right (+X).
    R = 0,
    /// Left (-X).
    L = 1,
    /// Up (+Y).
    U = 2,
    /// Down (-Y).
    D = 3,
    /// Front (+Z).
    F = 4,
    /// Back (-Z).
    B = 5,
}
impl Face {
    /// Returns the face with the given upper-case symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Face::iter().find(|face| face.symbol() == symbol)
    }
    /// Returns the face whose outward normal is `normal`, or `None` if it is
    /// not a unit vector along an axis.
    pub fn from_normal(normal: Vector3<i8>) -> Option<Self> {
        Face::iter().find(|face| face.normal() == normal)
    }

    /// Returns the axis perpendicular to the face.
    pub fn axis(self) -> Axis {
        use Face::*;

        match self {
            R | L => Axis::X,
            U | D => Axis::Y,
            F | B => Axis::Z,
        }
    }
    /// Returns which end of its axis the face is on.
    pub fn sign(self) -> Sign {
        use Face::*;

        match self {
            R | U | F => Sign::Pos,
            L | D | B => Sign::Neg,
        }
    }
    /// Returns the face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        use Face::*;

        match self {
            R => L,
            L => R,
            U => D,
            D => U,
            F => B,
            B => F,
        }
    }

    /// Returns the upper-case symbol for the face.
    pub fn symbol(self) -> char {
        use Face::*;

        match self {
            R => 'R',
            L => 'L',
            U => 'U',
            D => 'D',
            F => 'F',
            B => 'B',
        }
    }

    /// Returns the outward unit normal of the face.
    pub fn normal(self) -> Vector3<i8> {
        self.axis().unit_vec() * self.sign().int()
    }

    /// Returns the directions that point right and up when looking at the
    /// face from outside the cube.
    ///
    /// Side faces are viewed upright. `U` is viewed with `F` at the bottom and
    /// `D` with `F` at the top, so the six faces line up in a cross-shaped
    /// net.
    pub fn view_basis(self) -> (Vector3<i8>, Vector3<i8>) {
        use Face::*;

        let up = Face::U.normal();
        let front = Face::F.normal();
        match self {
            R => (-front, up),
            L => (front, up),
            F => (R.normal(), up),
            B => (L.normal(), up),
            U => (R.normal(), -front),
            D => (R.normal(), front),
        }
    }
}
