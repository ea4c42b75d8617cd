//! 3×3×3 twisty puzzle model and rotation engine.
//!
//! This crate owns the discrete side of the puzzle: the 27-cubie registry,
//! layer selection, quarter-turn permutations, move notation, and the
//! 54-character facelet encoding consumed by external solvers. The
//! continuous side (animating a turn as a smooth rotation of a transient
//! group) lives in `spincube_view`, which commits each finished turn back
//! into this crate's state.
//!
//! Cubie positions are authoritative as *logical* lattice coordinates in
//! `{-1, 0, 1}³`; world-space positions on the `{-1.1, 0, 1.1}` lattice are
//! derived from them. Layer membership is therefore an exact integer test,
//! never a floating-point comparison.

pub mod axis;
pub mod cube;
pub mod cubie;
pub mod facelets;
pub mod lattice;
pub mod notation;
pub mod twist;

mod face;

pub use axis::{Axis, Sign};
pub use cube::Cube;
pub use cubie::{Cubie, CubieId, Grouping, Orientation, Tile, TurnId};
pub use face::{Color, Face};
pub use lattice::{LatticeCoord, Layer, EPSILON, SPACING};
pub use notation::{Move, MoveTarget, ParseMoveError, Slice, TwistAmount};
pub use twist::{Twist, TwistDirection};
