//! Signs and principal axes.

use cgmath::Vector3;

/// Positive or negative.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    /// Negative.
    Neg,
    /// Positive.
    #[default]
    Pos,
}
impl std::ops::Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Pos => Sign::Neg,
        }
    }
}
impl Sign {
    /// Returns an integer representation of the sign (either -1 or 1).
    pub const fn int(self) -> i8 {
        match self {
            Sign::Neg => -1,
            Sign::Pos => 1,
        }
    }
    /// Returns a floating-point representation of the sign (either -1.0 or
    /// 1.0).
    pub const fn float(self) -> f32 {
        self.int() as f32
    }
}

/// 3-dimensional axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl Axis {
    /// Returns the perpendicular axes from this one, using the left-hand
    /// rule. (The cross product of the returned axes is the opposite of the
    /// input.) This is more convenient for twisty puzzles, where clockwise
    /// rotations are the default.
    pub fn perpendiculars(self) -> [Axis; 2] {
        use Axis::*;
        match self {
            X => [Z, Y], // X+ => rotate from Z+ to Y+.
            Y => [X, Z], // Y+ => rotate from X+ to Z+.
            Z => [Y, X], // Z+ => rotate from Y+ to X+.
        }
    }

    /// Returns an iterator over all axes.
    pub fn iter() -> impl Iterator<Item = Axis> {
        [Axis::X, Axis::Y, Axis::Z].into_iter()
    }

    /// Returns the index of this axis into a coordinate triple.
    pub const fn idx(self) -> usize {
        self as usize
    }

    /// Returns the unit vector along this axis.
    pub fn unit_vec3(self) -> Vector3<f32> {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }

    /// Returns the lowercase name of this axis.
    pub const fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}
