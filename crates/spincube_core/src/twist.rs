//! Primitive quarter turns.
//!
//! Every turn the engine executes is a quarter turn of one layer; half
//! turns are expanded to two primitives by the move translator. Directions
//! are normalized to "as seen from the positive end of the axis", so a
//! clockwise L turn arrives here as a counterclockwise X-axis primitive.

use std::f32::consts::FRAC_PI_2;
use std::fmt;

use rand::{Rng, RngCore};

use crate::axis::{Axis, Sign};
use crate::face::Face;
use crate::lattice::Layer;

/// Rotation direction, as seen from the positive end of the twist axis;
/// clockwise or counterclockwise.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TwistDirection {
    /// Clockwise.
    #[default]
    Cw,
    /// Counterclockwise.
    Ccw,
}
impl fmt::Display for TwistDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwistDirection::Cw => Ok(()),
            TwistDirection::Ccw => write!(f, "'"),
        }
    }
}
impl TwistDirection {
    /// Returns the reverse direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Self::Cw => Self::Ccw,
            Self::Ccw => Self::Cw,
        }
    }
    /// Returns the sign of this rotation, according to the mathematical
    /// convention of counterclockwise being positive and clockwise being
    /// negative.
    pub fn sign(self) -> Sign {
        match self {
            Self::Cw => Sign::Neg,
            Self::Ccw => Sign::Pos,
        }
    }
}

/// A single quarter turn of one layer; the atomic operation of the engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Twist {
    /// Axis the layer rotates about.
    pub axis: Axis,
    /// Which layer along that axis turns.
    pub layer: Layer,
    /// Rotation direction, as seen from the positive end of `axis`.
    pub direction: TwistDirection,
}
impl Twist {
    /// Returns the quarter turn of the layer behind `face`, with `direction`
    /// given in that face's own frame (as seen from outside the face).
    pub fn of_face(face: Face, direction: TwistDirection) -> Self {
        Self {
            axis: face.axis(),
            layer: face.layer(),
            direction: match face.sign() {
                Sign::Pos => direction,
                Sign::Neg => direction.rev(),
            },
        }
    }

    /// Returns the twist that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            direction: self.direction.rev(),
            ..self
        }
    }

    /// Returns the signed angle (radians, about the positive axis) at which
    /// this turn's animation completes.
    pub fn target_angle(self) -> f32 {
        FRAC_PI_2 * self.direction.sign().float()
    }

    /// Returns a uniformly random twist.
    pub fn from_rng(rng: &mut dyn RngCore) -> Self {
        let axis = match rng.gen_range(0..3) {
            0 => Axis::X,
            1 => Axis::Y,
            _ => Axis::Z,
        };
        let layer = match rng.gen_range(0..3) {
            0 => Layer::Neg,
            1 => Layer::Mid,
            _ => Layer::Pos,
        };
        let direction = if rng.gen_bool(0.5) {
            TwistDirection::Cw
        } else {
            TwistDirection::Ccw
        };
        Self {
            axis,
            layer,
            direction,
        }
    }
}
impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layer = match self.layer {
            Layer::Neg => "-",
            Layer::Mid => "0",
            Layer::Pos => "+",
        };
        write!(f, "{}{layer}{}", self.axis.name(), self.direction)
    }
}

/// Generates `n` random twists, never twisting the same layer twice in a
/// row (a scramble that immediately undoes or doubles itself wastes moves).
pub fn scramble_twists(n: usize, rng: &mut dyn RngCore) -> Vec<Twist> {
    let mut ret: Vec<Twist> = Vec::with_capacity(n);
    while ret.len() < n {
        let twist = Twist::from_rng(rng);
        if let Some(prev) = ret.last() {
            if prev.axis == twist.axis && prev.layer == twist.layer {
                continue;
            }
        }
        ret.push(twist);
    }
    ret
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_face_twist_normalization() {
        // R and L' are the same axis-frame rotation on different layers.
        let r = Twist::of_face(Face::R, TwistDirection::Cw);
        let l_prime = Twist::of_face(Face::L, TwistDirection::Ccw);
        assert_eq!(r.axis, l_prime.axis);
        assert_eq!(r.direction, l_prime.direction);
        assert_ne!(r.layer, l_prime.layer);
    }

    #[test]
    fn test_rev_negates_target_angle() {
        let twist = Twist::of_face(Face::U, TwistDirection::Cw);
        assert_eq!(twist.target_angle(), -twist.rev().target_angle());
    }

    #[test]
    fn test_scramble_never_repeats_a_layer() {
        let mut rng = StdRng::seed_from_u64(123);
        let twists = scramble_twists(200, &mut rng);
        assert_eq!(twists.len(), 200);
        for pair in twists.windows(2) {
            assert!(pair[0].axis != pair[1].axis || pair[0].layer != pair[1].layer);
        }
    }
}
