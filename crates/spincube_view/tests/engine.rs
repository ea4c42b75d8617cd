//! End-to-end engine tests: animated turns driven through a scene graph
//! that mirrors the transforms a real renderer would apply.

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use spincube_core::facelets::SOLVED_FACELETS;
use spincube_core::{notation, Cube, EPSILON, SPACING};
use spincube_view::{
    history_notation, MoveSource, ScriptedSolver, SceneGraph, Simulation, TrackingScene,
};

/// Number of ticks one primitive takes: 1 to dequeue and group, 1 to enter
/// the animating phase, ⌈(π/2)/0.02⌉ = 79 angle steps, and 1 to settle.
const TICKS_PER_TURN: usize = 82;

fn assert_scene_matches_cube(scene: &TrackingScene, cube: &Cube) {
    for id in cube.ids() {
        let mirrored = scene.world_position(id);
        let derived = cube.world_position(id);
        let delta = mirrored - derived;
        for coord in [delta.x, delta.y, delta.z] {
            assert!(
                coord.abs() < EPSILON,
                "cubie {id:?} drifted: scene {mirrored:?} vs lattice {derived:?}",
            );
        }
    }
}

fn assert_on_lattice(scene: &TrackingScene, cube: &Cube) {
    for id in cube.ids() {
        let pos = scene.world_position(id);
        for coord in [pos.x, pos.y, pos.z] {
            assert!(
                [-SPACING, 0.0, SPACING]
                    .iter()
                    .any(|level| (coord - level).abs() < EPSILON),
                "cubie {id:?} off the lattice at {pos:?}",
            );
        }
    }
}

#[test]
fn test_animated_turns_preserve_the_lattice() {
    let mut sim = Simulation::new();
    let mut scene = TrackingScene::new(sim.cube());
    for mv in notation::parse_sequence("R U R' U' M2 F B'").expect("valid sequence") {
        sim.enqueue(mv, MoveSource::User);
        sim.run_to_idle(&mut scene);
        // Every settled turn leaves the mirrored scene exactly on the
        // discrete lattice, to floating-point tolerance.
        assert_on_lattice(&scene, sim.cube());
        assert_scene_matches_cube(&scene, sim.cube());
    }
}

#[test]
fn test_each_primitive_takes_a_fixed_tick_count() {
    let mut sim = Simulation::new();
    let mut scene = TrackingScene::new(sim.cube());
    sim.enqueue_notation("R U R' U'", MoveSource::User);
    let ticks = sim.run_to_idle(&mut scene);
    assert_eq!(ticks, 4 * TICKS_PER_TURN);
    assert_eq!(sim.history().len(), 4);
}

#[test]
fn test_inverse_round_trip_through_the_animation_pipeline() {
    for seq in ["R", "U'", "F2", "M", "E2", "b"] {
        let mut sim = Simulation::new();
        let mut scene = TrackingScene::new(sim.cube());
        let moves = notation::parse_sequence(seq).expect("valid move");
        for mv in &moves {
            sim.enqueue(*mv, MoveSource::User);
        }
        for mv in moves.iter().rev() {
            sim.enqueue(mv.rev(), MoveSource::User);
        }
        sim.run_to_idle(&mut scene);
        assert_eq!(
            sim.cube(),
            &Cube::new_solved(),
            "inverse round trip failed for {seq}",
        );
        assert_scene_matches_cube(&scene, sim.cube());
    }
}

#[test]
fn test_end_to_end_scramble_and_solve() {
    // From solved, apply R U R' U', encode, "solve" with a stub returning
    // the inverse sequence, drain, and land back on the solved encoding.
    let mut sim = Simulation::new();
    let mut scene = TrackingScene::new(sim.cube());
    sim.enqueue_notation("R U R' U'", MoveSource::User);
    sim.run_to_idle(&mut scene);
    let scrambled = sim.cube().facelets();
    assert_ne!(scrambled, SOLVED_FACELETS);

    let solver = ScriptedSolver {
        answer: "U R U' R'".to_string(),
    };
    let enqueued = sim.request_solve(&solver).expect("solve accepted");
    assert_eq!(enqueued, 4);
    sim.run_to_idle(&mut scene);

    assert_eq!(sim.cube().facelets(), SOLVED_FACELETS);
    assert!(sim.cube().is_solved());
    assert_scene_matches_cube(&scene, sim.cube());
    assert_eq!(history_notation(sim.history()), "R U R' U' U R U' R'");
}

#[test]
fn test_scrambles_stay_consistent_under_animation() {
    let mut sim = Simulation::new();
    let mut scene = TrackingScene::new(sim.cube());
    let mut rng = StdRng::seed_from_u64(2024);
    let twists = sim.scramble(30, &mut rng);
    assert_eq!(twists.len(), 30);
    sim.run_to_idle(&mut scene);
    assert_on_lattice(&scene, sim.cube());
    assert_scene_matches_cube(&scene, sim.cube());
    // The facelet encoding still sees 9 tiles of each color.
    let facelets = sim.cube().facelets();
    for letter in ['U', 'R', 'F', 'D', 'L', 'B'] {
        assert_eq!(facelets.chars().filter(|&c| c == letter).count(), 9);
    }
}
