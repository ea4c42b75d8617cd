//! Single-key bindings for the interactive demo.

use spincube_core::{Face, Move, Slice, TwistAmount};

/// Command bound to a key.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// Turn a face or middle slice a quarter turn.
    Turn(Move),
    /// Encode the cube and run the external solver.
    Solve,
    /// Leave the demo.
    Quit,
}

/// Returns the command bound to `key`, if any.
///
/// One key per face or slice letter; lowercase turns clockwise, uppercase
/// (shift) turns counterclockwise. Space triggers a solve, `q` quits.
pub(crate) fn command_for_key(key: char) -> Option<Command> {
    match key {
        ' ' => return Some(Command::Solve),
        'q' | 'Q' => return Some(Command::Quit),
        _ => {}
    }
    let amount = if key.is_ascii_uppercase() {
        TwistAmount::Ccw90
    } else {
        TwistAmount::Cw90
    };
    let upper = key.to_ascii_uppercase();
    if let Some(face) = Face::from_symbol(upper) {
        return Some(Command::Turn(Move::face(face, amount)));
    }
    Slice::from_symbol(upper).map(|slice| Command::Turn(Move::slice(slice, amount)))
}
