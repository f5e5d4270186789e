use campus_engine::mesh::MeshList;
use glam::Vec3;

use super::{flat_box, lit_box};

const ASPHALT: [f32; 3] = [0.18, 0.18, 0.2];
const LANE_MARK: [f32; 3] = [0.85, 0.85, 0.8];

const ROAD_Y: f32 = 0.05;
const MARK_Y: f32 = 0.1;
/// Lane marks sit this far either side of a road's centre line.
const LANE_OFFSET: f32 = 2.5;
const MARK_SPACING: usize = 12;
/// Length, height and width of one dash.
const DASH: Vec3 = Vec3::new(6.0, 0.05, 0.3);

/// x of the two north-south roads.
pub const CROSS_ROADS_X: [f32; 2] = [-30.0, 30.0];

/// East-west avenue, two cross roads and their dashed lane marks.
pub fn push(mesh: &mut MeshList) {
    lit_box(mesh, Vec3::new(0.0, ROAD_Y, 0.0), Vec3::new(180.0, 0.1, 12.0), ASPHALT);
    for x in CROSS_ROADS_X {
        lit_box(mesh, Vec3::new(x, ROAD_Y, 0.0), Vec3::new(12.0, 0.1, 120.0), ASPHALT);
    }

    for i in (-80..80).step_by(MARK_SPACING) {
        for z in [LANE_OFFSET, -LANE_OFFSET] {
            flat_box(mesh, Vec3::new(i as f32, MARK_Y, z), DASH, LANE_MARK);
        }
    }

    let along_z = Vec3::new(DASH.z, DASH.y, DASH.x);
    for i in (-50..50).step_by(MARK_SPACING) {
        for x in CROSS_ROADS_X {
            for dx in [LANE_OFFSET, -LANE_OFFSET] {
                flat_box(mesh, Vec3::new(x + dx, MARK_Y, i as f32), along_z, LANE_MARK);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashes_are_unlit() {
        let mut mesh = MeshList::new();
        push(&mut mesh);
        let lit = mesh.opaque().vertices.iter().filter(|v| v.normal != [0.0; 3]).count();
        let unlit = mesh.opaque().vertices.len() - lit;

        // 3 road slabs, 24 vertices each.
        assert_eq!(lit, 3 * 24);
        // 14 dash pairs on the avenue, 9 rows of four on the cross roads.
        assert_eq!(unlit, (14 * 2 + 9 * 4) * 24);
    }
}
