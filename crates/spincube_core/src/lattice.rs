//! Logical lattice coordinates and their world-space embedding.
//!
//! The authoritative cubie position is an integer triple in `{-1, 0, 1}³`.
//! World space only enters when talking to a renderer: cubie centers sit at
//! `coordinate × SPACING`, so every visible piece stays on the
//! `{-1.1, 0, 1.1}` lattice.

use cgmath::Vector3;

use crate::axis::{Axis, Sign};

/// Distance between adjacent cubie centers in world space.
pub const SPACING: f32 = 1.1;

/// Tolerance for matching world-space coordinates against the lattice.
///
/// Less than half of `SPACING`, so no two layers can ever be confused, and
/// comfortably larger than accumulated floating-point rotation error.
pub const EPSILON: f32 = 0.1;

/// Logical cubie coordinate: each component is -1, 0, or 1.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LatticeCoord(pub [i8; 3]);
impl LatticeCoord {
    /// Constructs a coordinate from components.
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self([x, y, z])
    }

    /// Returns the component along the given axis.
    pub fn get(self, axis: Axis) -> i8 {
        self.0[axis.idx()]
    }

    /// Returns this coordinate rotated a quarter turn by the rotation that
    /// takes the positive `from` axis to the positive `to` axis.
    #[must_use]
    pub fn rotated(self, from: Axis, to: Axis) -> Self {
        let mut ret = self;
        ret.0[to.idx()] = self.0[from.idx()];
        ret.0[from.idx()] = -self.0[to.idx()];
        ret
    }

    /// Returns the world-space position of this cell's center.
    pub fn world(self) -> Vector3<f32> {
        Vector3::new(
            self.0[0] as f32 * SPACING,
            self.0[1] as f32 * SPACING,
            self.0[2] as f32 * SPACING,
        )
    }
}

/// One of the three layers along an axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Layer at coordinate -1 (world level -1.1).
    Neg,
    /// Middle slice at coordinate 0.
    Mid,
    /// Layer at coordinate +1 (world level +1.1).
    Pos,
}
impl Layer {
    /// Returns the logical coordinate of this layer.
    pub const fn coord(self) -> i8 {
        match self {
            Layer::Neg => -1,
            Layer::Mid => 0,
            Layer::Pos => 1,
        }
    }
    /// Returns the layer with the given logical coordinate.
    pub fn from_coord(coord: i8) -> Option<Self> {
        match coord {
            -1 => Some(Layer::Neg),
            0 => Some(Layer::Mid),
            1 => Some(Layer::Pos),
            _ => None,
        }
    }
    /// Returns the outer layer at the given end of an axis.
    pub fn from_sign(sign: Sign) -> Self {
        match sign {
            Sign::Neg => Layer::Neg,
            Sign::Pos => Layer::Pos,
        }
    }

    /// Returns the world-space level of this layer.
    pub fn level(self) -> f32 {
        self.coord() as f32 * SPACING
    }
    /// Returns the layer whose world-space level is within [`EPSILON`] of
    /// `level`, for callers holding renderer coordinates.
    pub fn from_level(level: f32) -> Option<Self> {
        [Layer::Neg, Layer::Mid, Layer::Pos]
            .into_iter()
            .find(|layer| (level - layer.level()).abs() < EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_rotated_is_a_quarter_turn() {
        // The rotation taking Z+ to Y+ is a quarter turn about the X axis.
        let p = LatticeCoord::new(1, 1, 1);
        let q = p.rotated(Axis::Z, Axis::Y);
        assert_eq!(q, LatticeCoord::new(1, 1, -1));
        // Four applications return to the start.
        let mut r = p;
        for _ in 0..4 {
            r = r.rotated(Axis::Z, Axis::Y);
        }
        assert_eq!(r, p);
    }

    #[test]
    fn test_level_round_trip() {
        for layer in [Layer::Neg, Layer::Mid, Layer::Pos] {
            assert_eq!(Layer::from_level(layer.level()), Some(layer));
            // A small perturbation, as a renderer would produce, still maps
            // to the same layer.
            assert_eq!(Layer::from_level(layer.level() + 0.05), Some(layer));
        }
        assert_eq!(Layer::from_level(0.55), None);
    }
}
