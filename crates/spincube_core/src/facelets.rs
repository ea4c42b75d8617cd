//! Facelet-string encoding of the visible cube state.
//!
//! The encoding follows the Kociemba facelet convention used by the common
//! external 3×3×3 solvers: faces in the order **U, R, F, D, L, B**, each
//! face read row-major from its top-left corner. "Top-left" is defined by
//! holding the cube with U up and F towards you: U is read with B at the
//! top, D with F at the top, the four side faces upright, and B with its
//! R-adjacent column first.

use itertools::Itertools;

use crate::cube::Cube;
use crate::face::Face;
use crate::lattice::LatticeCoord;

/// Face order of the facelet string.
pub const FACELET_FACE_ORDER: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

/// Facelet string of the solved cube.
pub const SOLVED_FACELETS: &str =
    "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

/// Returns the lattice cell holding the tile at raster slot `(row, col)` of
/// `face`, with rows and columns numbered 0..3 from the face's top-left
/// corner.
fn facelet_cell(face: Face, row: i8, col: i8) -> LatticeCoord {
    let (r, c) = (row - 1, col - 1);
    match face {
        Face::U => LatticeCoord::new(c, 1, r),
        Face::R => LatticeCoord::new(1, -r, -c),
        Face::F => LatticeCoord::new(c, -r, 1),
        Face::D => LatticeCoord::new(c, -1, -r),
        Face::L => LatticeCoord::new(-1, -r, c),
        Face::B => LatticeCoord::new(-c, -r, -1),
    }
}

impl Cube {
    /// Encodes the visible state as the 54-character facelet string.
    ///
    /// One character per tile, over the alphabet `{U, R, F, D, L, B}`; the
    /// letter comes from the tile's construction-time color identifier, not
    /// from any rendered value.
    ///
    /// # Panics
    ///
    /// Panics if any raster slot is not covered by exactly one tile, which
    /// would mean the cube geometry is corrupted.
    pub fn facelets(&self) -> String {
        let mut ret = String::with_capacity(54);
        for face in FACELET_FACE_ORDER {
            for (row, col) in (0..3).cartesian_product(0..3) {
                let cell = facelet_cell(face, row, col);
                let id = self.cubie_at(cell);
                let cubie = self.cubie(id);
                let tiles = cubie
                    .tiles
                    .iter()
                    .filter(|&&tile| cubie.tile_world_face(tile) == face);
                match tiles.exactly_one() {
                    Ok(tile) => ret.push(tile.color.letter()),
                    Err(_) => panic!(
                        "facelet slot ({row}, {col}) of face {} is not covered \
                         by exactly one tile",
                        face.symbol(),
                    ),
                }
            }
        }
        ret
    }
}
