//! The 27-cubie registry and its discrete operations.

use cgmath::Vector3;
use smallvec::SmallVec;

use crate::axis::Axis;
use crate::cubie::{Cubie, CubieId, Grouping, Orientation, Tile};
use crate::face::Face;
use crate::lattice::{LatticeCoord, Layer};
use crate::twist::{Twist, TwistDirection};

/// Number of cubies in the puzzle. Constant for its whole lifetime: cubies
/// are constructed once and never created or destroyed afterwards.
pub const CUBIE_COUNT: usize = 27;

/// Number of cubies in any single layer.
pub const LAYER_SIZE: usize = 9;

/// The full cube: a flat arena of 27 cubies.
///
/// Equality compares positions and orientations, which is exactly "same
/// puzzle state" since tile data never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    cubies: Vec<Cubie>,
}
impl Default for Cube {
    fn default() -> Self {
        Self::new_solved()
    }
}
impl Cube {
    /// Constructs the solved cube from the static initial layout: one cubie
    /// per lattice cell, with a tile of the face's solved color on every
    /// outward side. The cell at the center of the cube gets no tiles.
    pub fn new_solved() -> Self {
        let mut cubies = Vec::with_capacity(CUBIE_COUNT);
        for z in -1..=1_i8 {
            for y in -1..=1_i8 {
                for x in -1..=1_i8 {
                    let home = LatticeCoord::new(x, y, z);
                    let mut tiles = SmallVec::new();
                    let mut push_tile_if = |condition: bool, face: Face| {
                        if condition {
                            tiles.push(Tile {
                                home: face,
                                color: face.solved_color(),
                            });
                        }
                    };
                    push_tile_if(x == 1, Face::R);
                    push_tile_if(x == -1, Face::L);
                    push_tile_if(y == 1, Face::U);
                    push_tile_if(y == -1, Face::D);
                    push_tile_if(z == 1, Face::F);
                    push_tile_if(z == -1, Face::B);

                    cubies.push(Cubie {
                        home,
                        pos: home,
                        orientation: Orientation::default(),
                        tiles,
                        grouping: Grouping::default(),
                    });
                }
            }
        }
        Self { cubies }
    }

    /// Returns an iterator over all cubie ids.
    pub fn ids(&self) -> impl Iterator<Item = CubieId> {
        (0..CUBIE_COUNT as u8).map(CubieId)
    }
    /// Returns the cubie with the given id.
    pub fn cubie(&self, id: CubieId) -> &Cubie {
        &self.cubies[id.0 as usize]
    }
    /// Returns an iterator over all cubies with their ids.
    pub fn cubies(&self) -> impl Iterator<Item = (CubieId, &Cubie)> {
        self.cubies
            .iter()
            .enumerate()
            .map(|(i, cubie)| (CubieId(i as u8), cubie))
    }

    /// Returns the world-space position of a cubie's center, derived from
    /// its logical coordinate.
    pub fn world_position(&self, id: CubieId) -> Vector3<f32> {
        self.cubie(id).pos.world()
    }

    /// Returns the cubies currently in the given layer.
    ///
    /// Membership is re-derived from each cubie's *current* position on
    /// every call: after arbitrary turns, which layer a cubie belongs to
    /// can only be determined from where it is now. Because positions are
    /// logical lattice coordinates, the test is an exact integer match.
    ///
    /// # Panics
    ///
    /// Panics if the layer does not contain exactly 9 cubies, which would
    /// mean the turn bookkeeping has corrupted the lattice.
    pub fn select_layer(&self, axis: Axis, layer: Layer) -> Vec<CubieId> {
        let members: Vec<CubieId> = self
            .cubies()
            .filter(|(_id, cubie)| cubie.pos.get(axis) == layer.coord())
            .map(|(id, _cubie)| id)
            .collect();
        assert_eq!(
            members.len(),
            LAYER_SIZE,
            "layer {layer:?} on axis {} has {} cubies",
            axis.name(),
            members.len(),
        );
        members
    }

    /// Returns the cubie occupying the given lattice cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is not occupied by exactly one cubie.
    pub fn cubie_at(&self, pos: LatticeCoord) -> CubieId {
        let mut found = self
            .cubies()
            .filter(|(_id, cubie)| cubie.pos == pos)
            .map(|(id, _cubie)| id);
        let id = found.next();
        let extra = found.next();
        match (id, extra) {
            (Some(id), None) => id,
            _ => panic!("lattice cell {pos:?} is not uniquely occupied"),
        }
    }

    /// Applies one quarter turn to the discrete state: every cubie in the
    /// twist's layer gets its position and orientation rotated, in one
    /// transaction. Tile colors are untouched; a turn is a color-preserving
    /// permutation.
    pub fn twist(&mut self, twist: Twist) {
        log::trace!("applying twist {twist}");
        let [a, b] = twist.axis.perpendiculars();
        let (from, to) = match twist.direction {
            TwistDirection::Cw => (a, b),
            TwistDirection::Ccw => (b, a),
        };
        for id in self.select_layer(twist.axis, twist.layer) {
            let cubie = &mut self.cubies[id.0 as usize];
            cubie.pos = cubie.pos.rotated(from, to);
            cubie.orientation = cubie.orientation.rotated(from, to);
        }
    }

    /// Returns the grouping tag of a cubie.
    pub fn grouping(&self, id: CubieId) -> Grouping {
        self.cubie(id).grouping
    }
    /// Sets the grouping tag of a cubie.
    pub fn set_grouping(&mut self, id: CubieId, grouping: Grouping) {
        self.cubies[id.0 as usize].grouping = grouping;
    }
    /// Returns whether every cubie is in the static full-cube group.
    pub fn all_static(&self) -> bool {
        self.cubies
            .iter()
            .all(|cubie| cubie.grouping == Grouping::Static)
    }

    /// Returns whether every face shows a single color.
    pub fn is_solved(&self) -> bool {
        self.cubies.iter().all(|cubie| {
            cubie
                .tiles
                .iter()
                .all(|&tile| cubie.tile_world_face(tile).solved_color() == tile.color)
        })
    }
}
