//! Cube faces and tile colors.

use cgmath::Vector3;
use strum::EnumIter;

use crate::axis::{Axis, Sign};
use crate::lattice::Layer;

/// One of the six outer faces of the puzzle.
#[derive(EnumIter, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    /// Right face (X+).
    #[default]
    R = 0,
    /// Left face (X-).
    L = 1,
    /// Up face (Y+).
    U = 2,
    /// Down face (Y-).
    D = 3,
    /// Front face (Z+).
    F = 4,
    /// Back face (Z-).
    B = 5,
}
impl Face {
    /// Returns the axis perpendicular to this face.
    pub fn axis(self) -> Axis {
        use Face::*;
        match self {
            R | L => Axis::X,
            U | D => Axis::Y,
            F | B => Axis::Z,
        }
    }
    /// Returns which end of its axis this face sits at.
    pub fn sign(self) -> Sign {
        use Face::*;
        match self {
            R | U | F => Sign::Pos,
            L | D | B => Sign::Neg,
        }
    }
    /// Returns the face on the same axis at the opposite end.
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
    /// Returns the face at the given end of the given axis.
    pub fn from_axis_sign(axis: Axis, sign: Sign) -> Self {
        use Face::*;
        match (axis, sign) {
            (Axis::X, Sign::Pos) => R,
            (Axis::X, Sign::Neg) => L,
            (Axis::Y, Sign::Pos) => U,
            (Axis::Y, Sign::Neg) => D,
            (Axis::Z, Sign::Pos) => F,
            (Axis::Z, Sign::Neg) => B,
        }
    }

    /// Returns the outer layer this face belongs to.
    pub fn layer(self) -> Layer {
        match self.sign() {
            Sign::Pos => Layer::Pos,
            Sign::Neg => Layer::Neg,
        }
    }

    /// Returns the uppercase notation symbol for this face.
    pub const fn symbol(self) -> char {
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
    /// Returns the face with the given uppercase notation symbol.
    pub fn from_symbol(c: char) -> Option<Self> {
        use Face::*;
        match c {
            'R' => Some(R),
            'L' => Some(L),
            'U' => Some(U),
            'D' => Some(D),
            'F' => Some(F),
            'B' => Some(B),
            _ => None,
        }
    }
    /// Returns the human-readable name of this face.
    pub const fn name(self) -> &'static str {
        use Face::*;
        match self {
            R => "Right",
            L => "Left",
            U => "Up",
            D => "Down",
            F => "Front",
            B => "Back",
        }
    }

    /// Returns the outward unit normal of this face.
    pub fn vector(self) -> Vector3<f32> {
        self.axis().unit_vec3() * self.sign().float()
    }

    /// Returns the color this face shows in the solved state.
    pub fn solved_color(self) -> Color {
        use Face::*;
        match self {
            R => Color::Red,
            L => Color::Orange,
            U => Color::White,
            D => Color::Yellow,
            F => Color::Green,
            B => Color::Blue,
        }
    }
}

/// Color identifier assigned to a tile at construction time.
///
/// This is the value the facelet encoder keys on; it is never re-derived
/// from rendered output.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    /// Up-face color.
    White,
    /// Down-face color.
    Yellow,
    /// Front-face color.
    Green,
    /// Back-face color.
    Blue,
    /// Right-face color.
    Red,
    /// Left-face color.
    Orange,
}
impl Color {
    /// Returns the face this color occupies in the solved state.
    pub fn solved_face(self) -> Face {
        match self {
            Color::White => Face::U,
            Color::Yellow => Face::D,
            Color::Green => Face::F,
            Color::Blue => Face::B,
            Color::Red => Face::R,
            Color::Orange => Face::L,
        }
    }
    /// Returns the facelet letter for this color.
    ///
    /// The solver alphabet names colors after the face they occupy in the
    /// solved state, so this is a fixed table, not a computation.
    pub fn letter(self) -> char {
        self.solved_face().symbol()
    }
    /// Returns the human-readable name of this color.
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Orange => "orange",
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_face_axis_sign_round_trip() {
        for face in Face::iter() {
            assert_eq!(face, Face::from_axis_sign(face.axis(), face.sign()));
            assert_eq!(face.opposite().opposite(), face);
            assert_eq!(face.opposite().axis(), face.axis());
            assert_ne!(face.opposite().sign(), face.sign());
        }
    }

    #[test]
    fn test_color_letters_match_solved_faces() {
        for face in Face::iter() {
            assert_eq!(face.solved_color().letter(), face.symbol());
        }
    }

    #[test]
    fn test_face_normals() {
        assert_eq!(Face::U.vector(), Vector3::unit_y());
        assert_eq!(Face::B.vector(), -Vector3::unit_z());
        for face in Face::iter() {
            assert_eq!(face.opposite().vector(), -face.vector());
        }
    }
}
