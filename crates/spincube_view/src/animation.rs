//! Per-turn animation state machine.

use std::f32::consts::FRAC_PI_2;

use spincube_core::{CubieId, Twist, TurnId};

use crate::scene::GroupId;
use crate::simulation::MoveSource;

/// Fixed angle increment per tick while a turn is animating, in radians.
/// Signed by the turn direction at use.
pub const TWIST_STEP: f32 = 0.02;

/// Phase of the turn currently in flight.
///
/// A turn walks `Grouping → Animating → Settling`, one phase transition per
/// tick, and the executor returns to idle only after `Settling` completes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TurnPhase {
    /// Members selected and reparented into the transient group.
    Grouping,
    /// The transient group's angle is advancing.
    Animating,
    /// The target angle has been reached (and clamped); members are about
    /// to be reparented back and the discrete state committed.
    Settling,
}

/// Bookkeeping for the single turn currently in flight.
#[derive(Debug)]
pub struct ActiveTurn {
    pub(crate) id: TurnId,
    pub(crate) twist: Twist,
    pub(crate) members: Vec<CubieId>,
    pub(crate) group: GroupId,
    pub(crate) angle: f32,
    pub(crate) phase: TurnPhase,
    pub(crate) source: MoveSource,
}
impl ActiveTurn {
    pub(crate) fn new(
        id: TurnId,
        twist: Twist,
        members: Vec<CubieId>,
        group: GroupId,
        source: MoveSource,
    ) -> Self {
        Self {
            id,
            twist,
            members,
            group,
            angle: 0.0,
            phase: TurnPhase::Grouping,
            source,
        }
    }

    /// Advances the angle by one step towards the target, clamping exactly
    /// to ±π/2 on the final step so the target is never exceeded. Returns
    /// whether the target was reached.
    pub(crate) fn advance(&mut self, step: f32) -> bool {
        self.angle += step * self.twist.direction.sign().float();
        if self.angle.abs() >= FRAC_PI_2 {
            self.angle = self.twist.target_angle();
            true
        } else {
            false
        }
    }

    /// Returns the phase this turn is in.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }
    /// Returns the twist being animated.
    pub fn twist(&self) -> Twist {
        self.twist
    }
    /// Returns the current signed angle of the transient group.
    pub fn angle(&self) -> f32 {
        self.angle
    }
}
