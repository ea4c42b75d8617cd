//! Turn animation and scheduling for Spincube.
//!
//! `spincube_core` owns the discrete puzzle state; this crate owns the time
//! dimension: it serializes moves into a strict FIFO queue, animates one
//! turn at a time as a continuous rotation of a transient scene-graph
//! group, and commits the discrete permutation exactly once when each turn
//! settles. The renderer and the solver stay behind traits so the whole
//! engine runs headless.

pub mod animation;
pub mod scene;
pub mod simulation;
pub mod solver;

pub use animation::{TurnPhase, TWIST_STEP};
pub use scene::{GroupId, NullScene, SceneGraph, TrackingScene};
pub use simulation::{history_notation, InputPolicy, MoveSource, Simulation, SolveError};
pub use solver::{ScriptedSolver, Solver, SolverError};
