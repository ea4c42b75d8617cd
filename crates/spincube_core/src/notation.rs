//! Move notation: parsing, serialization, and expansion into primitives.
//!
//! Grammar: `<letter>[modifier]` where the letter is one of `U D L R F B`
//! (outer face) or `M E S` (middle slice), and the modifier is empty
//! (quarter turn), `'` (reverse quarter), `2` (half turn), or `2'`
//! (reverse half turn). A lowercase letter reverses the base direction, so
//! `r` parses the same as `R'`. Serialization is canonical: uppercase
//! letter plus `""`/`"'"`/`"2"`/`"2'"`.

use std::fmt;
use std::str::FromStr;

use crate::axis::{Axis, Sign};
use crate::face::Face;
use crate::lattice::Layer;
use crate::twist::{Twist, TwistDirection};

/// Middle-slice move family: the three layer-0 turns that are not
/// expressible as a single outer-face letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Slice {
    /// Slice between L and R; turns in the same direction as L.
    M,
    /// Slice between U and D; turns in the same direction as D.
    E,
    /// Slice between F and B; turns in the same direction as F.
    S,
}
impl Slice {
    /// Returns the axis the slice rotates about.
    pub fn axis(self) -> Axis {
        self.follows().axis()
    }
    /// Returns the outer face whose direction convention the slice follows.
    pub fn follows(self) -> Face {
        match self {
            Slice::M => Face::L,
            Slice::E => Face::D,
            Slice::S => Face::F,
        }
    }
    /// Returns the uppercase notation symbol for this slice.
    pub const fn symbol(self) -> char {
        match self {
            Slice::M => 'M',
            Slice::E => 'E',
            Slice::S => 'S',
        }
    }
    /// Returns the slice with the given uppercase notation symbol.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'M' => Some(Slice::M),
            'E' => Some(Slice::E),
            'S' => Some(Slice::S),
            _ => None,
        }
    }
}

/// What a move turns: an outer face layer or a middle slice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveTarget {
    /// Outer face layer.
    Face(Face),
    /// Middle slice.
    Slice(Slice),
}
impl MoveTarget {
    /// Returns the notation symbol for this target.
    pub fn symbol(self) -> char {
        match self {
            MoveTarget::Face(face) => face.symbol(),
            MoveTarget::Slice(slice) => slice.symbol(),
        }
    }
    /// Returns the face whose frame the move direction is expressed in.
    fn anchor(self) -> Face {
        match self {
            MoveTarget::Face(face) => face,
            MoveTarget::Slice(slice) => slice.follows(),
        }
    }
    /// Returns the layer this target selects.
    fn layer(self) -> Layer {
        match self {
            MoveTarget::Face(face) => face.layer(),
            MoveTarget::Slice(_) => Layer::Mid,
        }
    }
}

/// How far a move turns, with the direction it animates in.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TwistAmount {
    /// Quarter turn clockwise.
    #[default]
    Cw90,
    /// Quarter turn counterclockwise.
    Ccw90,
    /// Half turn, animated clockwise.
    Cw180,
    /// Half turn, animated counterclockwise.
    Ccw180,
}
impl TwistAmount {
    /// Returns the notation suffix for this amount.
    pub const fn symbol(self) -> &'static str {
        match self {
            TwistAmount::Cw90 => "",
            TwistAmount::Ccw90 => "'",
            TwistAmount::Cw180 => "2",
            TwistAmount::Ccw180 => "2'",
        }
    }
    /// Returns the amount that undoes this one.
    #[must_use]
    pub const fn rev(self) -> Self {
        match self {
            TwistAmount::Cw90 => TwistAmount::Ccw90,
            TwistAmount::Ccw90 => TwistAmount::Cw90,
            TwistAmount::Cw180 => TwistAmount::Ccw180,
            TwistAmount::Ccw180 => TwistAmount::Cw180,
        }
    }

    /// Base direction in the anchor face's frame.
    fn direction(self) -> TwistDirection {
        match self {
            TwistAmount::Cw90 | TwistAmount::Cw180 => TwistDirection::Cw,
            TwistAmount::Ccw90 | TwistAmount::Ccw180 => TwistDirection::Ccw,
        }
    }
    /// Number of quarter-turn primitives this amount expands to.
    fn quarter_turns(self) -> usize {
        match self {
            TwistAmount::Cw90 | TwistAmount::Ccw90 => 1,
            TwistAmount::Cw180 | TwistAmount::Ccw180 => 2,
        }
    }
}

/// A single move token: a target and an amount.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// What turns.
    pub target: MoveTarget,
    /// How far, and which way.
    pub amount: TwistAmount,
}
impl Move {
    /// Constructs an outer-face move.
    pub fn face(face: Face, amount: TwistAmount) -> Self {
        Self {
            target: MoveTarget::Face(face),
            amount,
        }
    }
    /// Constructs a middle-slice move.
    pub fn slice(slice: Slice, amount: TwistAmount) -> Self {
        Self {
            target: MoveTarget::Slice(slice),
            amount,
        }
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            amount: self.amount.rev(),
            ..self
        }
    }

    /// Returns the quarter-turn move token naming the given primitive, for
    /// rendering an executed twist history back to notation.
    pub fn from_twist(twist: Twist) -> Self {
        let target = match twist.layer {
            Layer::Mid => MoveTarget::Slice(match twist.axis {
                Axis::X => Slice::M,
                Axis::Y => Slice::E,
                Axis::Z => Slice::S,
            }),
            Layer::Neg => MoveTarget::Face(Face::from_axis_sign(twist.axis, Sign::Neg)),
            Layer::Pos => MoveTarget::Face(Face::from_axis_sign(twist.axis, Sign::Pos)),
        };
        let own_direction = match target.anchor().sign() {
            Sign::Pos => twist.direction,
            Sign::Neg => twist.direction.rev(),
        };
        let amount = match own_direction {
            TwistDirection::Cw => TwistAmount::Cw90,
            TwistDirection::Ccw => TwistAmount::Ccw90,
        };
        Self { target, amount }
    }

    /// Expands this move into quarter-turn primitives, in execution order.
    ///
    /// A half turn becomes two identical quarter turns: every primitive then
    /// animates through the same ±π/2 threshold, and the executor needs no
    /// separate half-turn path.
    pub fn primitives(self) -> Vec<Twist> {
        let anchor = self.target.anchor();
        let direction = match anchor.sign() {
            Sign::Pos => self.amount.direction(),
            Sign::Neg => self.amount.direction().rev(),
        };
        let twist = Twist {
            axis: anchor.axis(),
            layer: self.target.layer(),
            direction,
        };
        vec![twist; self.amount.quarter_turns()]
    }
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.target.symbol(), self.amount.symbol())
    }
}

/// Error from parsing a move token or sequence.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// The token was empty.
    #[error("empty move token")]
    Empty,
    /// The first character was not a face or slice letter.
    #[error("unknown face or slice letter {0:?}")]
    UnknownLetter(char),
    /// The characters after the letter were not a valid modifier.
    #[error("unknown modifier {0:?}")]
    UnknownModifier(String),
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(ParseMoveError::Empty)?;
        let upper = letter.to_ascii_uppercase();
        let target = Face::from_symbol(upper)
            .map(MoveTarget::Face)
            .or_else(|| Slice::from_symbol(upper).map(MoveTarget::Slice))
            .ok_or(ParseMoveError::UnknownLetter(letter))?;

        // Lowercase letters reverse the base direction, then the modifier
        // applies on top of that.
        let reversed = letter.is_ascii_lowercase();
        let amount = match chars.as_str() {
            "" => TwistAmount::Cw90,
            "'" => TwistAmount::Ccw90,
            "2" => TwistAmount::Cw180,
            "2'" => TwistAmount::Ccw180,
            other => return Err(ParseMoveError::UnknownModifier(other.to_string())),
        };
        let amount = if reversed { amount.rev() } else { amount };

        Ok(Self { target, amount })
    }
}

/// Parses a whitespace-separated move sequence, strictly: any invalid token
/// fails the whole sequence.
pub fn parse_sequence(s: &str) -> Result<Vec<Move>, ParseMoveError> {
    s.split_whitespace().map(Move::from_str).collect()
}

/// Serializes a move sequence to canonical space-separated notation.
pub fn sequence_to_string(moves: &[Move]) -> String {
    let tokens: Vec<String> = moves.iter().map(Move::to_string).collect();
    tokens.join(" ")
}
