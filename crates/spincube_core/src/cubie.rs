//! Cubie records: identity, orientation, tiles, and group membership.

use smallvec::SmallVec;

use crate::axis::{Axis, Sign};
use crate::face::{Color, Face};
use crate::lattice::LatticeCoord;
use crate::twist::TwistDirection;

/// Identifier of one of the 27 cubies; an index into the registry arena.
///
/// Ids are assigned at construction and never recomputed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubieId(pub u8);

/// Identifier of one animated turn, used to tag transient group membership.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TurnId(pub u32);

/// Which group currently owns a cubie.
///
/// Membership is exclusive and total: a cubie is either in the static
/// full-cube group or in exactly one transient rotation group.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Grouping {
    /// In the permanent full-cube group.
    #[default]
    Static,
    /// In the transient rotation group of the given turn.
    InRotation(TurnId),
}

/// A colored sticker glued to one face of a cubie.
///
/// Both fields are fixed at construction: `home` is the face direction in
/// the cubie's local frame, and `color` never changes. Only the tile's
/// *world*-facing direction changes, via the cubie's orientation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Face direction in the cubie's local frame.
    pub home: Face,
    /// Color identifier assigned at construction.
    pub color: Color,
}

/// The world faces that a cubie's local X+, Y+, and Z+ directions point at.
///
/// This is a discrete encoding of the cubie's rotation: 90° turns permute
/// signed axes, so a face triple represents the rotation exactly, with no
/// accumulating error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Orientation([Face; 3]);
impl Default for Orientation {
    fn default() -> Self {
        use Face::*;
        Self([R, U, F])
    }
}
impl Orientation {
    /// Returns the world face the local positive `axis` direction points at.
    pub fn get(self, axis: Axis) -> Face {
        self.0[axis.idx()]
    }

    /// Returns this orientation rotated a quarter turn by the rotation that
    /// takes the positive `from` axis to the positive `to` axis (in world
    /// space: `from+ → to+`, `to+ → from-`, third axis fixed).
    #[must_use]
    pub fn rotated(self, from: Axis, to: Axis) -> Self {
        Self(self.0.map(|face| {
            if face.axis() == from {
                Face::from_axis_sign(to, face.sign())
            } else if face.axis() == to {
                Face::from_axis_sign(from, -face.sign())
            } else {
                face
            }
        }))
    }

    /// Returns this orientation after a quarter turn of the whole cubie
    /// about `axis` in `direction` (as seen from the axis' positive end).
    #[must_use]
    pub fn twisted(self, axis: Axis, direction: TwistDirection) -> Self {
        let [a, b] = axis.perpendiculars();
        match direction {
            TwistDirection::Cw => self.rotated(a, b),
            TwistDirection::Ccw => self.rotated(b, a),
        }
    }

    /// Returns the world face a tile with the given local `home` direction
    /// currently points at.
    pub fn world_face(self, home: Face) -> Face {
        let along = self.get(home.axis());
        match home.sign() {
            Sign::Pos => along,
            Sign::Neg => along.opposite(),
        }
    }
}

/// One of the 27 small cubes composing the puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cubie {
    /// Lattice cell this cubie was constructed in (stable; never changes).
    pub home: LatticeCoord,
    /// Lattice cell this cubie currently occupies.
    pub pos: LatticeCoord,
    /// Current rotation of the cubie's local frame.
    pub orientation: Orientation,
    /// Colored tiles on this cubie (empty for the hidden center cubie).
    pub tiles: SmallVec<[Tile; 6]>,
    /// Group that currently owns this cubie.
    pub grouping: Grouping,
}
impl Cubie {
    /// Returns the world face the given tile currently points at.
    pub fn tile_world_face(&self, tile: Tile) -> Face {
        self.orientation.world_face(tile.home)
    }
}
