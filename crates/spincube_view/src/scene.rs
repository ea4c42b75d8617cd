//! Scene-graph collaborator interface.
//!
//! The renderer is external; the engine only needs a way to group pieces
//! so they rotate together, spin that group, and put the pieces back. The
//! one rule a conforming implementation must honor is that a reparent with
//! `preserve_world_transform` never visually moves a piece.

use cgmath::{Matrix, Matrix3, Rad, SquareMatrix, Vector3};

use spincube_core::{Axis, Cube, CubieId};

/// Handle to a scene-graph group.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GroupId(pub u64);
impl GroupId {
    /// The permanent full-cube group every piece starts in.
    pub const ROOT: GroupId = GroupId(0);
}

/// Interface the rotation engine needs from a renderer's scene graph.
///
/// Per-frame tick registration is inverted: the driver calls
/// [`crate::Simulation::tick`] once per frame instead of registering a
/// callback here.
pub trait SceneGraph {
    /// Creates a fresh group, anchored at the cube center with no rotation.
    fn create_group(&mut self) -> GroupId;

    /// Moves a piece into `group`. With `preserve_world_transform` the
    /// piece's world position and orientation are unchanged by the
    /// reparenting.
    fn reparent(&mut self, cubie: CubieId, group: GroupId, preserve_world_transform: bool);

    /// Sets a group's rotation to `angle` radians about the positive
    /// `axis`, replacing any previous rotation of that group.
    fn set_group_rotation(&mut self, group: GroupId, axis: Axis, angle: f32);

    /// Returns a piece's current world position.
    fn world_position(&self, cubie: CubieId) -> Vector3<f32>;

    /// Discards an (empty) transient group.
    fn remove_group(&mut self, group: GroupId);
}

/// Scene graph that ignores everything; for drivers that do not render.
///
/// [`SceneGraph::world_position`] always returns the origin — position
/// queries on a headless run should go to [`Cube::world_position`] instead.
#[derive(Debug, Default)]
pub struct NullScene;
impl SceneGraph for NullScene {
    fn create_group(&mut self) -> GroupId {
        GroupId(1)
    }
    fn reparent(&mut self, _cubie: CubieId, _group: GroupId, _preserve_world_transform: bool) {}
    fn set_group_rotation(&mut self, _group: GroupId, _axis: Axis, _angle: f32) {}
    fn world_position(&self, _cubie: CubieId) -> Vector3<f32> {
        Vector3::new(0.0, 0.0, 0.0)
    }
    fn remove_group(&mut self, _group: GroupId) {}
}

/// Scene graph that mirrors the transforms a real renderer would apply,
/// with actual floating-point math.
///
/// Used by tests (and available to demos) to check the properties the
/// engine promises a renderer: pieces stay on the `{-1.1, 0, 1.1}` lattice
/// after every settled turn, and reparenting never jumps a piece.
#[derive(Debug)]
pub struct TrackingScene {
    nodes: Vec<Node>,
    groups: Vec<GroupState>,
}

#[derive(Debug)]
struct Node {
    parent: GroupId,
    /// Position relative to the parent group.
    position: Vector3<f32>,
    /// Orientation relative to the parent group.
    rotation: Matrix3<f32>,
}

#[derive(Debug)]
struct GroupState {
    axis: Axis,
    angle: f32,
    live: bool,
}

impl TrackingScene {
    /// Constructs a scene mirroring the given cube, every piece in the
    /// root group at its world position.
    pub fn new(cube: &Cube) -> Self {
        Self {
            nodes: cube
                .ids()
                .map(|id| Node {
                    parent: GroupId::ROOT,
                    position: cube.world_position(id),
                    rotation: Matrix3::identity(),
                })
                .collect(),
            groups: vec![GroupState {
                axis: Axis::X,
                angle: 0.0,
                live: true,
            }],
        }
    }

    fn group_rotation(&self, group: GroupId) -> Matrix3<f32> {
        let state = &self.groups[group.0 as usize];
        Matrix3::from_axis_angle(state.axis.unit_vec3(), Rad(state.angle))
    }

    /// Returns a piece's world orientation matrix.
    pub fn world_rotation(&self, cubie: CubieId) -> Matrix3<f32> {
        let node = &self.nodes[cubie.0 as usize];
        self.group_rotation(node.parent) * node.rotation
    }
}

impl SceneGraph for TrackingScene {
    fn create_group(&mut self) -> GroupId {
        self.groups.push(GroupState {
            axis: Axis::X,
            angle: 0.0,
            live: true,
        });
        GroupId(self.groups.len() as u64 - 1)
    }

    fn reparent(&mut self, cubie: CubieId, group: GroupId, preserve_world_transform: bool) {
        assert!(self.groups[group.0 as usize].live, "reparent into dead group");
        let world_position = self.world_position(cubie);
        let world_rotation = self.world_rotation(cubie);
        let node = &mut self.nodes[cubie.0 as usize];
        node.parent = group;
        if preserve_world_transform {
            // A rotation matrix's inverse is its transpose.
            let inverse = {
                let state = &self.groups[group.0 as usize];
                Matrix3::from_axis_angle(state.axis.unit_vec3(), Rad(state.angle)).transpose()
            };
            node.position = inverse * world_position;
            node.rotation = inverse * world_rotation;
        }
    }

    fn set_group_rotation(&mut self, group: GroupId, axis: Axis, angle: f32) {
        let state = &mut self.groups[group.0 as usize];
        state.axis = axis;
        state.angle = angle;
    }

    fn world_position(&self, cubie: CubieId) -> Vector3<f32> {
        let node = &self.nodes[cubie.0 as usize];
        self.group_rotation(node.parent) * node.position
    }

    fn remove_group(&mut self, group: GroupId) {
        assert_ne!(group, GroupId::ROOT, "cannot remove the root group");
        assert!(
            self.nodes.iter().all(|node| node.parent != group),
            "removing a non-empty group",
        );
        self.groups[group.0 as usize].live = false;
    }
}

#[cfg(test)]
mod tests {
    use cgmath::InnerSpace;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_reparent_preserves_world_position() {
        let cube = Cube::new_solved();
        let mut scene = TrackingScene::new(&cube);
        let id = CubieId(0);
        let before = scene.world_position(id);

        let group = scene.create_group();
        scene.reparent(id, group, true);
        assert_eq!(scene.world_position(id), before);

        scene.set_group_rotation(group, Axis::Y, 0.3);
        let rotated = scene.world_position(id);
        assert_ne!(rotated, before);

        // Back to the root group, keeping the rotated world transform.
        scene.reparent(id, GroupId::ROOT, true);
        let after = scene.world_position(id);
        assert!((after - rotated).magnitude() < 1e-5);
        scene.remove_group(group);
    }
}
