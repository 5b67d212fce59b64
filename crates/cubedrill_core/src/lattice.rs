//! Discrete state of the 26 cubies.

use std::ops::Index;

use cgmath::{Matrix, Matrix3, SquareMatrix, Vector3};
use itertools::Itertools;

use crate::{Face, MoveDescriptor};

/// Number of cubies. The center of the cube is not modeled.
pub const CUBIE_COUNT: usize = 26;

/// Stable identity of a cubie, assigned from its solved position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubieId(pub u8);
impl CubieId {
    /// Iterates over all cubie IDs.
    pub fn iter() -> impl Iterator<Item = CubieId> {
        (0..CUBIE_COUNT as u8).map(CubieId)
    }
}

/// Rotation of a cubie relative to its solved orientation.
///
/// Stored as a 3x3 matrix whose entries are all exactly -1, 0, or 1, which
/// makes it one of the 24 rotations of the cube.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Orientation(Matrix3<f32>);
impl Default for Orientation {
    fn default() -> Self {
        Self::identity()
    }
}
impl Orientation {
    /// Returns the solved orientation.
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    /// Rounds every entry of `m` to the nearest of -1, 0, or 1.
    pub fn snapped(m: Matrix3<f32>) -> Self {
        let snap_col = |col: Vector3<f32>| col.map(snap_coord);
        Self(Matrix3::from_cols(snap_col(m.x), snap_col(m.y), snap_col(m.z)))
    }

    /// Returns the rotation matrix.
    pub fn matrix(self) -> Matrix3<f32> {
        self.0
    }

    /// Returns whether this is the solved orientation.
    pub fn is_identity(self) -> bool {
        self == Self::identity()
    }

    /// Rotates a lattice direction by the inverse of this orientation.
    pub fn apply_inverse(self, v: Vector3<i8>) -> Vector3<i8> {
        snap_vec(self.0.transpose() * to_f32(v))
    }

    /// Returns `true` if the matrix is a proper rotation of the lattice.
    fn is_valid(self) -> bool {
        let is_snapped = |col: Vector3<f32>| col == col.map(snap_coord);
        [self.0.x, self.0.y, self.0.z].into_iter().all(is_snapped)
            && self.0.determinant() == 1.0
    }
}

/// Set of cubies, stored as a bitmask.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CubieSet(u32);
impl FromIterator<CubieId> for CubieSet {
    fn from_iter<T: IntoIterator<Item = CubieId>>(iter: T) -> Self {
        let mut ret = Self::EMPTY;
        for id in iter {
            ret.insert(id);
        }
        ret
    }
}
impl CubieSet {
    /// Empty set.
    pub const EMPTY: Self = Self(0);
    /// Set containing every cubie.
    pub const ALL: Self = Self((1 << CUBIE_COUNT) - 1);

    /// Adds a cubie to the set.
    pub fn insert(&mut self, id: CubieId) {
        self.0 |= 1 << id.0;
    }
    /// Returns whether the set contains a cubie.
    pub fn contains(self, id: CubieId) -> bool {
        self.0 & (1 << id.0) != 0
    }
    /// Returns the number of cubies in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }
    /// Returns whether the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
    /// Iterates over the cubies in the set in ID order.
    pub fn iter(self) -> impl Iterator<Item = CubieId> {
        CubieId::iter().filter(move |&id| self.contains(id))
    }
}

/// State of a single cubie.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cubie {
    /// Identity of the cubie.
    pub id: CubieId,
    /// Position in the solved state.
    pub home: Vector3<i8>,
    /// Current position. Every coordinate is -1, 0, or 1.
    pub position: Vector3<i8>,
    /// Current orientation.
    pub orientation: Orientation,
}
impl Cubie {
    fn solved(id: CubieId, home: Vector3<i8>) -> Self {
        Self {
            id,
            home,
            position: home,
            orientation: Orientation::identity(),
        }
    }

    /// Returns whether the cubie is at its home position and orientation.
    pub fn is_solved(&self) -> bool {
        self.position == self.home && self.orientation.is_identity()
    }

    /// Returns the home face of the sticker facing `face`, or `None` if the
    /// cubie has no sticker facing that way.
    pub fn sticker_facing(&self, face: Face) -> Option<Face> {
        if self.position[face.axis() as usize] != face.sign().int() {
            return None;
        }
        Face::from_normal(self.orientation.apply_inverse(face.normal()))
    }

    fn rotate(&mut self, rotation: Matrix3<f32>) {
        self.position = snap_vec(rotation * to_f32(self.position));
        self.orientation = Orientation::snapped(rotation * self.orientation.matrix());
    }
}

/// Positions and orientations of all 26 cubies.
///
/// Every position is an exact lattice point and the cubies always occupy
/// the 26 non-center points of the lattice, one cubie each.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    cubies: Box<[Cubie]>,
}
impl Default for Lattice {
    fn default() -> Self {
        Self::solved()
    }
}
impl Index<CubieId> for Lattice {
    type Output = Cubie;

    fn index(&self, id: CubieId) -> &Self::Output {
        &self.cubies[id.0 as usize]
    }
}
impl Lattice {
    /// Returns a solved cube.
    pub fn solved() -> Self {
        let coords = -1..=1;
        let cubies = itertools::iproduct!(coords.clone(), coords.clone(), coords)
            .map(|(x, y, z)| Vector3::new(x, y, z))
            .filter(|&p| p != Vector3::new(0, 0, 0))
            .enumerate()
            .map(|(i, home)| Cubie::solved(CubieId(i as u8), home))
            .collect();
        Self { cubies }
    }

    /// Returns every cubie to its solved state.
    pub fn reset(&mut self) {
        *self = Self::solved();
    }

    /// Returns all cubies in ID order.
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    /// Returns the cubie currently at `position`.
    pub fn cubie_at(&self, position: Vector3<i8>) -> Option<&Cubie> {
        self.cubies.iter().find(|cubie| cubie.position == position)
    }

    /// Returns the cubies turned by a move.
    pub fn affected_by(&self, m: &MoveDescriptor) -> CubieSet {
        self.cubies
            .iter()
            .filter(|cubie| m.contains(to_f32(cubie.position)))
            .map(|cubie| cubie.id)
            .collect()
    }

    /// Applies a move instantly and returns the cubies it turned.
    pub fn twist(&mut self, m: &MoveDescriptor) -> CubieSet {
        let cubies = self.affected_by(m);
        self.rotate(cubies, m.rotation(1.0));
        cubies
    }

    /// Resolves and applies a move token instantly. Returns `false` if the
    /// token turns nothing.
    pub fn apply(&mut self, token: &str) -> bool {
        let m = MoveDescriptor::resolve(token);
        if m.is_no_op() {
            log::trace!("ignoring unrecognized move {token:?}");
            return false;
        }
        self.twist(&m);
        true
    }

    /// Applies a sequence of move tokens instantly.
    pub fn apply_all<S: AsRef<str>>(&mut self, tokens: impl IntoIterator<Item = S>) {
        for token in tokens {
            self.apply(token.as_ref());
        }
    }

    /// Rotates a set of cubies as one rigid body around the center of the
    /// cube, then snaps them back onto the lattice.
    pub(crate) fn rotate(&mut self, cubies: CubieSet, rotation: Matrix3<f32>) {
        for id in cubies.iter() {
            self.cubies[id.0 as usize].rotate(rotation);
        }
    }

    /// Returns whether every cubie is at its home position and orientation.
    pub fn is_solved(&self) -> bool {
        self.cubies.iter().all(Cubie::is_solved)
    }

    /// Returns whether the cubies occupy every non-center lattice point
    /// exactly once, each with a valid orientation.
    pub fn is_valid(&self) -> bool {
        let on_lattice = |p: Vector3<i8>| {
            [p.x, p.y, p.z].iter().all(|c| (-1..=1).contains(c)) && p != Vector3::new(0, 0, 0)
        };
        self.cubies.len() == CUBIE_COUNT
            && self.cubies.iter().all(|c| on_lattice(c.position))
            && self.cubies.iter().map(|c| (c.position.x, c.position.y, c.position.z)).all_unique()
            && self.cubies.iter().all(|c| c.orientation.is_valid())
    }

    /// Returns the home face of each of the 9 stickers on `face`, as seen
    /// from outside the cube. Rows go from top to bottom and columns from
    /// left to right; see [`Face::view_basis()`] for which way is up.
    pub fn face_colors(&self, face: Face) -> [[Face; 3]; 3] {
        let (right, up) = face.view_basis();
        std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                let pos = face.normal() + right * (col as i8 - 1) + up * (1 - row as i8);
                self.cubie_at(pos)
                    .and_then(|cubie| cubie.sticker_facing(face))
                    .unwrap_or(face)
            })
        })
    }
}

pub(crate) fn to_f32(v: Vector3<i8>) -> Vector3<f32> {
    v.map(f32::from)
}

fn snap_coord(c: f32) -> f32 {
    c.round().clamp(-1.0, 1.0)
}

fn snap_vec(v: Vector3<f32>) -> Vector3<i8> {
    v.map(|c| snap_coord(c) as i8)
}
