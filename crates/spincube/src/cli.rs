//! Subcommand definitions and dispatch.

use eyre::{eyre, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use spincube_core::notation;
use spincube_view::{history_notation, MoveSource, NullScene, Simulation};

use crate::keymap::{self, Command};
use crate::solvers::CommandSolver;

/// Spincube command-line interface.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply a move sequence to a solved cube and print the result.
    Apply {
        /// Move sequence, e.g. "R U R' U'".
        moves: String,
    },
    /// Scramble the cube and print the scramble and the facelet string.
    Scramble {
        /// Number of random moves.
        #[arg(short = 'n', long, default_value_t = 20)]
        count: usize,
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Scramble (or apply a sequence), then solve with an external solver.
    Solve {
        /// Solver executable: receives the 54-character facelet string on
        /// stdin and prints a move sequence to stdout.
        #[arg(long)]
        solver: String,
        /// Move sequence to apply before solving, instead of scrambling.
        #[arg(long)]
        moves: Option<String>,
        /// Number of scramble moves when no sequence is given.
        #[arg(short = 'n', long, default_value_t = 20)]
        count: usize,
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Interactive demo: single-key turns read from stdin.
    Demo {
        /// External solver executable for the solve key.
        #[arg(long)]
        solver: Option<String>,
    },
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    match subcommand {
        Subcommand::Apply { moves } => {
            let mut sim = Simulation::new();
            let mut scene = NullScene;
            let parsed = notation::parse_sequence(&moves)
                .map_err(|e| eyre!("invalid move sequence: {e}"))?;
            for mv in parsed {
                sim.enqueue(mv, MoveSource::User);
            }
            let ticks = sim.run_to_idle(&mut scene);
            println!("applied : {}", history_notation(sim.history()));
            println!("ticks   : {ticks}");
            print_state(&sim);
            Ok(())
        }

        Subcommand::Scramble { count, seed } => {
            let mut sim = Simulation::new();
            let mut scene = NullScene;
            let mut rng = rng_from_seed(seed);
            let twists = sim.scramble(count, &mut rng);
            sim.run_to_idle(&mut scene);
            println!("scramble: {}", history_notation(&twists));
            print_state(&sim);
            Ok(())
        }

        Subcommand::Solve {
            solver,
            moves,
            count,
            seed,
        } => {
            let mut sim = Simulation::new();
            let mut scene = NullScene;
            match moves {
                Some(seq) => {
                    let parsed = notation::parse_sequence(&seq)
                        .map_err(|e| eyre!("invalid move sequence: {e}"))?;
                    for mv in parsed {
                        sim.enqueue(mv, MoveSource::User);
                    }
                }
                None => {
                    let mut rng = rng_from_seed(seed);
                    let twists = sim.scramble(count, &mut rng);
                    println!("scramble: {}", history_notation(&twists));
                }
            }
            sim.run_to_idle(&mut scene);
            println!("state   : {}", sim.cube().facelets());

            let solver = CommandSolver::new(solver);
            let before = sim.history().len();
            sim.request_solve(&solver)?;
            sim.run_to_idle(&mut scene);
            println!("solution: {}", history_notation(&sim.history()[before..]));
            print_state(&sim);
            Ok(())
        }

        Subcommand::Demo { solver } => demo(solver),
    }
}

fn print_state(sim: &Simulation) {
    println!("facelets: {}", sim.cube().facelets());
    println!("solved  : {}", sim.cube().is_solved());
}

fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn demo(solver: Option<String>) -> Result<()> {
    use std::io::BufRead;

    let solver = solver.map(CommandSolver::new);
    let mut sim = Simulation::new();
    let mut scene = NullScene;
    println!("keys: u d l r f b m e s = turn (uppercase reverses), space = solve, q = quit");
    println!("facelets: {}", sim.cube().facelets());

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        for key in line?.chars() {
            match keymap::command_for_key(key) {
                Some(Command::Turn(mv)) => {
                    sim.enqueue(mv, MoveSource::User);
                }
                Some(Command::Solve) => match &solver {
                    Some(solver) => match sim.request_solve(solver) {
                        Ok(n) => println!("solving in {n} turns"),
                        Err(e) => log::warn!("solve failed: {e}"),
                    },
                    None => log::warn!("no solver configured; run demo with --solver"),
                },
                Some(Command::Quit) => return Ok(()),
                None => log::warn!("unbound key {key:?}"),
            }
            sim.run_to_idle(&mut scene);
        }
        print_state(&sim);
    }
    Ok(())
}
