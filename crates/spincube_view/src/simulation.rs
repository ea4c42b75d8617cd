//! Move scheduling and the turn executor.
//!
//! A strict FIFO of quarter-turn primitives feeds a single active-turn
//! slot; that slot is the engine's one lock. Each tick advances the slot's
//! state machine by at most one transition, so a driver calling
//! [`Simulation::tick`] once per rendered frame gets exactly the original
//! cooperative behavior, and a test loop gets a deterministic one.

use std::collections::VecDeque;

use rand::RngCore;

use spincube_core::notation::{self, Move};
use spincube_core::twist::scramble_twists;
use spincube_core::{Cube, Grouping, Twist, TurnId};

use crate::animation::{ActiveTurn, TurnPhase, TWIST_STEP};
use crate::scene::{GroupId, SceneGraph};
use crate::solver::{Solver, SolverError};

/// What to do with user moves that arrive while a solver-issued sequence is
/// still draining.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum InputPolicy {
    /// Queue user moves behind the remaining solver moves.
    #[default]
    QueueBehindSolve,
    /// Reject user moves until the solver moves have finished.
    RejectDuringSolve,
}

/// Who issued a move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveSource {
    /// Keyboard or other direct user input (scrambles included).
    User,
    /// The external solver's move list.
    Solver,
}

/// Error from a solve request. In every case the cube state and the queue
/// are left untouched; no partial move list is ever enqueued.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// A solve was requested while turns were queued or animating.
    #[error("cannot solve while turns are queued or animating")]
    Busy,
    /// The solver itself failed.
    #[error(transparent)]
    Solver(#[from] SolverError),
}

#[derive(Debug, Copy, Clone)]
struct QueuedTwist {
    twist: Twist,
    source: MoveSource,
}

/// The rotation engine: cube state, move queue, and the in-flight turn.
#[derive(Debug)]
pub struct Simulation {
    cube: Cube,
    queue: VecDeque<QueuedTwist>,
    active: Option<ActiveTurn>,
    policy: InputPolicy,
    twist_step: f32,
    solver_pending: usize,
    history: Vec<Twist>,
    next_turn: u32,
}
impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
impl Simulation {
    /// Constructs an idle simulation holding a solved cube.
    pub fn new() -> Self {
        Self::with_policy(InputPolicy::default())
    }
    /// Constructs an idle simulation with the given input policy.
    pub fn with_policy(policy: InputPolicy) -> Self {
        Self {
            cube: Cube::new_solved(),
            queue: VecDeque::new(),
            active: None,
            policy,
            twist_step: TWIST_STEP,
            solver_pending: 0,
            history: vec![],
            next_turn: 0,
        }
    }

    /// Returns the discrete cube state (not including the in-flight turn).
    pub fn cube(&self) -> &Cube {
        &self.cube
    }
    /// Returns whether no turn is in flight and no moves are queued.
    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.queue.is_empty()
    }
    /// Returns the phase of the in-flight turn, if any.
    pub fn phase(&self) -> Option<TurnPhase> {
        self.active.as_ref().map(ActiveTurn::phase)
    }
    /// Returns the number of queued primitives (not counting the in-flight
    /// turn).
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
    /// Returns every primitive executed so far, in completion order.
    pub fn history(&self) -> &[Twist] {
        &self.history
    }

    /// Enqueues one move, expanded into its quarter-turn primitives.
    ///
    /// Returns `false` (enqueuing nothing) if the input policy rejects the
    /// move; requesting a turn while others are queued or animating is
    /// never an error, it just waits its place in line.
    pub fn enqueue(&mut self, mv: Move, source: MoveSource) -> bool {
        if self.rejects(source) {
            log::warn!("move {mv} rejected while a solve sequence is draining");
            return false;
        }
        for twist in mv.primitives() {
            self.push_twist(twist, source);
        }
        true
    }

    /// Parses a whitespace-separated move sequence leniently: invalid
    /// tokens are skipped with a warning and the rest are enqueued. Returns
    /// the number of moves accepted.
    pub fn enqueue_notation(&mut self, s: &str, source: MoveSource) -> usize {
        parse_lossy(s)
            .into_iter()
            .filter(|&mv| self.enqueue(mv, source))
            .count()
    }

    /// Generates `n` random moves, enqueues them, and returns them.
    pub fn scramble(&mut self, n: usize, rng: &mut dyn RngCore) -> Vec<Twist> {
        if self.rejects(MoveSource::User) {
            log::warn!("scramble rejected while a solve sequence is draining");
            return vec![];
        }
        let twists = scramble_twists(n, rng);
        for &twist in &twists {
            self.push_twist(twist, MoveSource::User);
        }
        twists
    }

    /// Encodes the cube, asks the solver for a solution, and enqueues the
    /// returned move list atomically.
    ///
    /// Returns the number of primitives enqueued. On any error the cube
    /// state and queue are untouched. Invalid tokens in the solver's output
    /// are skipped with a warning (spec: they must not corrupt the queue).
    pub fn request_solve(&mut self, solver: &dyn Solver) -> Result<usize, SolveError> {
        if !self.is_idle() {
            return Err(SolveError::Busy);
        }
        let facelets = self.cube.facelets();
        let solution = solver.solve(&facelets)?;
        log::trace!("solver returned {solution:?}");
        let moves = parse_lossy(&solution);
        let mut enqueued = 0;
        for mv in moves {
            for twist in mv.primitives() {
                self.push_twist(twist, MoveSource::Solver);
                enqueued += 1;
            }
        }
        Ok(enqueued)
    }

    /// Advances the engine by one tick: starts the next queued turn, or
    /// moves the in-flight turn through one state-machine transition.
    pub fn tick(&mut self, scene: &mut dyn SceneGraph) {
        let Some(phase) = self.phase() else {
            self.start_next_turn(scene);
            return;
        };
        match phase {
            TurnPhase::Grouping => {
                if let Some(turn) = &mut self.active {
                    turn.phase = TurnPhase::Animating;
                }
            }
            TurnPhase::Animating => {
                if let Some(turn) = &mut self.active {
                    let reached = turn.advance(self.twist_step);
                    scene.set_group_rotation(turn.group, turn.twist.axis, turn.angle);
                    if reached {
                        turn.phase = TurnPhase::Settling;
                    }
                }
            }
            TurnPhase::Settling => self.settle(scene),
        }
    }

    /// Ticks until the queue drains and the engine is idle. Returns the
    /// number of ticks taken. Every turn still runs through the full state
    /// machine; this only removes the frame pacing.
    pub fn run_to_idle(&mut self, scene: &mut dyn SceneGraph) -> usize {
        let mut ticks = 0;
        while !self.is_idle() {
            self.tick(scene);
            ticks += 1;
        }
        ticks
    }

    /// Resets to the solved state, clearing the history.
    ///
    /// # Panics
    ///
    /// Panics if called while a turn is in flight or queued; a turn, once
    /// started, always runs to completion.
    pub fn reset(&mut self) {
        assert!(self.is_idle(), "cannot reset a busy simulation");
        self.cube = Cube::new_solved();
        self.history.clear();
        self.solver_pending = 0;
    }

    fn rejects(&self, source: MoveSource) -> bool {
        source == MoveSource::User
            && self.policy == InputPolicy::RejectDuringSolve
            && self.solver_pending > 0
    }

    fn push_twist(&mut self, twist: Twist, source: MoveSource) {
        if source == MoveSource::Solver {
            self.solver_pending += 1;
        }
        self.queue.push_back(QueuedTwist { twist, source });
    }

    fn start_next_turn(&mut self, scene: &mut dyn SceneGraph) {
        let Some(queued) = self.queue.pop_front() else {
            return;
        };
        let twist = queued.twist;
        let members = self.cube.select_layer(twist.axis, twist.layer);
        let group = scene.create_group();
        let id = TurnId(self.next_turn);
        self.next_turn += 1;
        for &member in &members {
            assert_eq!(
                self.cube.grouping(member),
                Grouping::Static,
                "cubie already owned by another turn",
            );
            self.cube.set_grouping(member, Grouping::InRotation(id));
            scene.reparent(member, group, true);
        }
        log::trace!("turn {}: grouping {twist}", id.0);
        self.active = Some(ActiveTurn::new(id, twist, members, group, queued.source));
    }

    fn settle(&mut self, scene: &mut dyn SceneGraph) {
        let Some(turn) = self.active.take() else {
            return;
        };
        // Reparent back first (world transform preserved, so nothing
        // visually jumps), then commit the discrete permutation: the angle
        // is exactly ±π/2, so the two states agree.
        for &member in &turn.members {
            scene.reparent(member, GroupId::ROOT, true);
            self.cube.set_grouping(member, Grouping::Static);
        }
        self.cube.twist(turn.twist);
        scene.set_group_rotation(turn.group, turn.twist.axis, 0.0);
        scene.remove_group(turn.group);
        if turn.source == MoveSource::Solver {
            self.solver_pending -= 1;
        }
        log::trace!("turn {}: settled {}", turn.id.0, turn.twist);
        self.history.push(turn.twist);
    }
}

fn parse_lossy(s: &str) -> Vec<Move> {
    s.split_whitespace()
        .filter_map(|token| match token.parse::<Move>() {
            Ok(mv) => Some(mv),
            Err(e) => {
                log::warn!("skipping invalid move token {token:?}: {e}");
                None
            }
        })
        .collect()
}

/// Renders a primitive history back to canonical move notation.
pub fn history_notation(history: &[Twist]) -> String {
    let moves: Vec<Move> = history.iter().map(|&twist| Move::from_twist(twist)).collect();
    notation::sequence_to_string(&moves)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use spincube_core::facelets::SOLVED_FACELETS;
    use spincube_core::{Face, TwistAmount, TwistDirection};

    use super::*;
    use crate::scene::NullScene;
    use crate::solver::ScriptedSolver;

    fn user_move(face: Face, amount: TwistAmount) -> Move {
        Move::face(face, amount)
    }

    #[test]
    fn test_moves_execute_in_order() {
        let mut sim = Simulation::new();
        let mut scene = NullScene;
        for mv in notation::parse_sequence("R U2 F'").expect("valid") {
            assert!(sim.enqueue(mv, MoveSource::User));
        }
        sim.run_to_idle(&mut scene);
        // R expands to 1 primitive, U2 to 2, F' to 1, in order.
        let expected = vec![
            Twist::of_face(Face::R, TwistDirection::Cw),
            Twist::of_face(Face::U, TwistDirection::Cw),
            Twist::of_face(Face::U, TwistDirection::Cw),
            Twist::of_face(Face::F, TwistDirection::Ccw),
        ];
        assert_eq!(sim.history(), expected.as_slice());
    }

    #[test]
    fn test_half_turn_equals_two_quarters() {
        let mut scene = NullScene;
        let mut doubled = Simulation::new();
        doubled.enqueue(user_move(Face::R, TwistAmount::Cw180), MoveSource::User);
        doubled.run_to_idle(&mut scene);

        let mut twice = Simulation::new();
        twice.enqueue(user_move(Face::R, TwistAmount::Cw90), MoveSource::User);
        twice.enqueue(user_move(Face::R, TwistAmount::Cw90), MoveSource::User);
        twice.run_to_idle(&mut scene);

        assert_eq!(doubled.cube(), twice.cube());
    }

    #[test]
    fn test_only_one_turn_in_flight() {
        let mut sim = Simulation::new();
        let mut scene = NullScene;
        sim.enqueue_notation("R U R' U'", MoveSource::User);
        let mut animating_turns = 0;
        while !sim.is_idle() {
            sim.tick(&mut scene);
            // The active slot is the lock: there is never a second turn.
            if sim.phase() == Some(TurnPhase::Grouping) {
                animating_turns += 1;
            }
            assert!(sim.phase().is_some() || sim.is_idle() || sim.queue_len() > 0);
        }
        assert_eq!(animating_turns, 4);
        assert_eq!(sim.history().len(), 4);
    }

    #[test]
    fn test_invalid_tokens_are_skipped_without_corrupting_queue() {
        let mut sim = Simulation::new();
        let mut scene = NullScene;
        let accepted = sim.enqueue_notation("R Q3 U xx F2", MoveSource::User);
        assert_eq!(accepted, 3); // R, U, F2
        sim.run_to_idle(&mut scene);
        assert_eq!(sim.history().len(), 4); // F2 is two primitives
    }

    #[test]
    fn test_reject_policy_drops_user_moves_during_solve() {
        let mut sim = Simulation::with_policy(InputPolicy::RejectDuringSolve);
        let mut scene = NullScene;
        sim.enqueue_notation("R U", MoveSource::User);
        sim.run_to_idle(&mut scene);

        let solver = ScriptedSolver {
            answer: "U' R'".to_string(),
        };
        let enqueued = sim.request_solve(&solver).expect("solve accepted");
        assert_eq!(enqueued, 2);

        // User input while the solve drains is rejected...
        assert!(!sim.enqueue(user_move(Face::F, TwistAmount::Cw90), MoveSource::User));
        sim.run_to_idle(&mut scene);
        assert!(sim.cube().is_solved());
        // ...and accepted again afterwards.
        assert!(sim.enqueue(user_move(Face::F, TwistAmount::Cw90), MoveSource::User));
    }

    #[test]
    fn test_queue_policy_keeps_user_moves_during_solve() {
        let mut sim = Simulation::with_policy(InputPolicy::QueueBehindSolve);
        let mut scene = NullScene;
        sim.enqueue_notation("R", MoveSource::User);
        sim.run_to_idle(&mut scene);

        let solver = ScriptedSolver {
            answer: "R'".to_string(),
        };
        sim.request_solve(&solver).expect("solve accepted");
        assert!(sim.enqueue(user_move(Face::U, TwistAmount::Cw90), MoveSource::User));
        sim.run_to_idle(&mut scene);
        // The solver moves ran first, then the queued user move.
        assert_eq!(
            sim.history().last(),
            Some(&Twist::of_face(Face::U, TwistDirection::Cw)),
        );
    }

    #[test]
    fn test_solve_rejected_while_busy() {
        let mut sim = Simulation::new();
        let mut scene = NullScene;
        sim.enqueue_notation("R", MoveSource::User);
        sim.tick(&mut scene); // now mid-turn
        let solver = ScriptedSolver {
            answer: "R'".to_string(),
        };
        assert_eq!(sim.request_solve(&solver), Err(SolveError::Busy));
        sim.run_to_idle(&mut scene);
        assert_eq!(sim.history().len(), 1);
    }

    #[test]
    fn test_failed_solve_leaves_state_untouched() {
        struct BrokenSolver;
        impl Solver for BrokenSolver {
            fn solve(&self, _facelets: &str) -> Result<String, SolverError> {
                Err(SolverError::Unavailable("no such program".to_string()))
            }
        }

        let mut sim = Simulation::new();
        let mut scene = NullScene;
        sim.enqueue_notation("R U", MoveSource::User);
        sim.run_to_idle(&mut scene);
        let before = sim.cube().clone();

        assert!(sim.request_solve(&BrokenSolver).is_err());
        assert!(sim.is_idle());
        assert_eq!(sim.cube(), &before);
    }

    #[test]
    fn test_end_to_end_solve_round_trip() {
        let mut sim = Simulation::new();
        let mut scene = NullScene;
        sim.enqueue_notation("R U R' U'", MoveSource::User);
        sim.run_to_idle(&mut scene);
        assert_ne!(sim.cube().facelets(), SOLVED_FACELETS);

        let solver = ScriptedSolver {
            answer: "U R U' R'".to_string(),
        };
        sim.request_solve(&solver).expect("solve accepted");
        sim.run_to_idle(&mut scene);
        assert_eq!(sim.cube().facelets(), SOLVED_FACELETS);
        assert!(sim.cube().is_solved());
    }

    #[test]
    fn test_scramble_enqueues_exactly_n_turns() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut sim = Simulation::new();
        let mut scene = NullScene;
        let mut rng = StdRng::seed_from_u64(7);
        let twists = sim.scramble(25, &mut rng);
        assert_eq!(twists.len(), 25);
        sim.run_to_idle(&mut scene);
        assert_eq!(sim.history(), twists.as_slice());
    }

    #[test]
    fn test_reset_restores_solved_state() {
        let mut sim = Simulation::new();
        let mut scene = NullScene;
        sim.enqueue_notation("R U F", MoveSource::User);
        sim.run_to_idle(&mut scene);
        assert!(!sim.cube().is_solved());
        sim.reset();
        assert!(sim.cube().is_solved());
        assert!(sim.history().is_empty());
    }

    #[test]
    fn test_history_notation_round_trips() {
        let mut sim = Simulation::new();
        let mut scene = NullScene;
        sim.enqueue_notation("R U' M E2 S'", MoveSource::User);
        sim.run_to_idle(&mut scene);
        assert_eq!(history_notation(sim.history()), "R U' M E E S'");
    }
}
