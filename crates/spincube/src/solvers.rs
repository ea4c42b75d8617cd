//! Solver implementations for the CLI.

use std::io::Write;
use std::process::{Command, Stdio};

use spincube_view::{Solver, SolverError};

/// Runs an external solver executable.
///
/// The 54-character facelet string is written to the child's stdin
/// (newline-terminated); the move sequence is read from its stdout.
#[derive(Debug, Clone)]
pub(crate) struct CommandSolver {
    program: String,
}
impl CommandSolver {
    pub(crate) fn new(program: String) -> Self {
        Self { program }
    }
}
impl Solver for CommandSolver {
    fn solve(&self, facelets: &str) -> Result<String, SolverError> {
        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| SolverError::Unavailable(format!("{}: {e}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(facelets.as_bytes())
                .and_then(|()| stdin.write_all(b"\n"))
                .map_err(|e| SolverError::Failed(format!("writing to solver: {e}")))?;
            // Dropping stdin closes the pipe so the child sees EOF.
        }

        let output = child
            .wait_with_output()
            .map_err(|e| SolverError::Failed(format!("waiting for solver: {e}")))?;
        if !output.status.success() {
            return Err(SolverError::Failed(format!(
                "{} exited with {}",
                self.program, output.status,
            )));
        }
        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| SolverError::Failed(format!("solver output not UTF-8: {e}")))?;
        let solution = stdout.trim().to_string();
        if solution.is_empty() {
            return Err(SolverError::Failed("empty solver output".to_string()));
        }
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_unavailable() {
        let solver = CommandSolver::new("spincube-no-such-solver".to_string());
        match solver.solve("UUUUUUUUU") {
            Err(SolverError::Unavailable(_)) => {}
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_echoing_solver_round_trips() {
        // `cat` is a conforming (if unhelpful) solver: it echoes its input.
        let solver = CommandSolver::new("cat".to_string());
        let answer = solver.solve("R U R' U'").expect("cat runs");
        assert_eq!(answer, "R U R' U'");
    }
}
