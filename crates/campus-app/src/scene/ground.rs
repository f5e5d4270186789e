use campus_engine::mesh::MeshList;
use glam::Vec3;

use super::lit_box;

const GRASS: [f32; 3] = [0.3, 0.6, 0.25];
const FENCE: [f32; 3] = [0.4, 0.4, 0.4];
const ASPHALT: [f32; 3] = [0.18, 0.18, 0.2];
const GATE: [f32; 3] = [0.3, 0.4, 0.5];

pub const HALF_EXTENT: f32 = 125.0;
const FENCE_HEIGHT: f32 = 8.5;
const FENCE_THICKNESS: f32 = 0.3;

const GATE_ROAD_WIDTH: f32 = 10.0;
const GATE_ROAD_LENGTH: f32 = 80.0;
const GATE_LEAF: Vec3 = Vec3::new(4.0, 5.5, 0.2);
const GATE_POST: f32 = 0.4;

/// Grass, perimeter fence and the two gates with their access roads.
pub fn push(mesh: &mut MeshList) {
    let side = 2.0 * HALF_EXTENT;
    lit_box(mesh, Vec3::new(0.0, -0.5, 0.0), Vec3::new(side, 1.0, side), GRASS);

    let y = FENCE_HEIGHT * 0.5;
    for z in [HALF_EXTENT, -HALF_EXTENT] {
        lit_box(mesh, Vec3::new(0.0, y, z), Vec3::new(side, FENCE_HEIGHT, FENCE_THICKNESS), FENCE);
    }
    for x in [-HALF_EXTENT, HALF_EXTENT] {
        lit_box(mesh, Vec3::new(x, y, 0.0), Vec3::new(FENCE_THICKNESS, FENCE_HEIGHT, side), FENCE);
    }

    // North-west and south-east corners.
    let inset = GATE_ROAD_WIDTH * 0.5;
    push_gate(mesh, -HALF_EXTENT + inset, -1.0);
    push_gate(mesh, HALF_EXTENT - inset, 1.0);
}

/// Gate in the fence at `z = side * HALF_EXTENT`, with its road running inwards.
fn push_gate(mesh: &mut MeshList, x: f32, side: f32) {
    let road_z = side * (HALF_EXTENT - GATE_ROAD_LENGTH * 0.5);
    lit_box(
        mesh,
        Vec3::new(x, 0.01, road_z),
        Vec3::new(GATE_ROAD_WIDTH, 0.05, GATE_ROAD_LENGTH),
        ASPHALT,
    );

    let z = side * (HALF_EXTENT - GATE_LEAF.z * 0.5);
    let y = GATE_LEAF.y * 0.5;
    for dir in [-1.0, 1.0] {
        lit_box(mesh, Vec3::new(x + dir * GATE_LEAF.x * 0.5, y, z), GATE_LEAF, GATE);

        let post_x = x + dir * (GATE_LEAF.x + GATE_POST * 0.5);
        lit_box(mesh, Vec3::new(post_x, y, z), Vec3::new(GATE_POST, GATE_LEAF.y, GATE_POST), FENCE);
    }
}
