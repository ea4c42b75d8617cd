//! Solver collaborator interface.

/// Error from an external solver.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The solver could not be reached or started.
    #[error("solver unavailable: {0}")]
    Unavailable(String),
    /// The solver ran but did not produce a solution.
    #[error("solver failed: {0}")]
    Failed(String),
}

/// An external solving algorithm, treated as a black box.
///
/// Input is the 54-character facelet string over `{U, R, F, D, L, B}` (see
/// [`spincube_core::facelets`]); output is a whitespace-separated move
/// sequence in the notation of [`spincube_core::notation`]. Any conforming
/// implementation is substitutable.
pub trait Solver {
    /// Computes a move sequence that solves the given facelet state.
    fn solve(&self, facelets: &str) -> Result<String, SolverError>;
}

/// Solver that returns a fixed answer; for tests and demos.
#[derive(Debug, Clone)]
pub struct ScriptedSolver {
    /// The move sequence to return for any input.
    pub answer: String,
}
impl Solver for ScriptedSolver {
    fn solve(&self, _facelets: &str) -> Result<String, SolverError> {
        Ok(self.answer.clone())
    }
}
