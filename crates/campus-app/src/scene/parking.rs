use std::f32::consts::PI;

use campus_engine::mesh::{Material, MeshList};
use glam::{Mat4, Vec3};

use super::garden::push_tree;
use super::{lit_box, push_box};

const LOT_SURFACE: [f32; 3] = [0.28, 0.28, 0.32];
const BAY_SURFACE: [f32; 3] = [0.32, 0.32, 0.35];
const LINE_PAINT: [f32; 3] = [1.0, 1.0, 1.0];

pub const LOT_CENTER: Vec3 = Vec3::new(0.0, 0.0, -70.0);
const BAYS_PER_ROW: usize = 20;
const BAY_WIDTH: f32 = 3.4;
const BAY_LENGTH: f32 = 8.0;
const BAY_GAP: f32 = 0.3;
const ROW_GAP: f32 = 2.0;

const LOT_WIDTH: f32 = BAYS_PER_ROW as f32 * BAY_WIDTH + (BAYS_PER_ROW - 1) as f32 * BAY_GAP;
const LOT_DEPTH: f32 = 2.0 * BAY_LENGTH + ROW_GAP + 2.5;

/// Where the "Parking" sign is drawn, just south of the lot.
pub const PARKING_LABEL_POSITION: Vec3 =
    Vec3::new(LOT_CENTER.x, LOT_CENTER.y + 0.2, LOT_CENTER.z - BAY_LENGTH - 1.5);

/// Two facing rows of marked bays on an asphalt pad, with a tree at two corners.
pub fn push(mesh: &mut MeshList) {
    lit_box(
        mesh,
        LOT_CENTER - Vec3::new(0.0, 0.03, 0.0),
        Vec3::new(LOT_WIDTH, 0.07, LOT_DEPTH),
        LOT_SURFACE,
    );

    let row_offset = (ROW_GAP + BAY_LENGTH) * 0.5;
    for i in 0..BAYS_PER_ROW {
        let x = LOT_CENTER.x - LOT_WIDTH * 0.5 + BAY_WIDTH * 0.5 + i as f32 * (BAY_WIDTH + BAY_GAP);
        push_bay(mesh, Mat4::from_translation(Vec3::new(x, LOT_CENTER.y, LOT_CENTER.z - row_offset)));
        push_bay(
            mesh,
            Mat4::from_translation(Vec3::new(x, LOT_CENTER.y, LOT_CENTER.z + row_offset))
                * Mat4::from_rotation_y(PI),
        );
    }

    let tree_x = LOT_WIDTH * 0.5 + 2.5;
    push_tree(mesh, LOT_CENTER + Vec3::new(-tree_x, 0.0, -BAY_LENGTH));
    push_tree(mesh, LOT_CENTER + Vec3::new(tree_x, 0.0, BAY_LENGTH));
}

/// One bay: pavement, side lines and a back line, in the frame `at`.
fn push_bay(mesh: &mut MeshList, at: Mat4) {
    push_box(mesh, at, Vec3::ZERO, Vec3::new(2.5, 0.05, 5.5), BAY_SURFACE, Material::Lit);
    for x in [-1.2, 1.2] {
        push_box(mesh, at, Vec3::new(x, 0.03, 0.0), Vec3::new(0.08, 0.02, 5.4), LINE_PAINT, Material::Lit);
    }
    push_box(mesh, at, Vec3::new(0.0, 0.03, -2.7), Vec3::new(2.5, 0.02, 0.07), LINE_PAINT, Material::Lit);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lot_fits_twenty_bays_per_row() {
        assert!((LOT_WIDTH - 73.7).abs() < 1e-4);
        assert!((LOT_DEPTH - 20.5).abs() < 1e-4);
    }

    #[test]
    fn outermost_bays_touch_the_lot_edge() {
        let first = LOT_CENTER.x - LOT_WIDTH * 0.5 + BAY_WIDTH * 0.5;
        let last = first + (BAYS_PER_ROW - 1) as f32 * (BAY_WIDTH + BAY_GAP);
        assert!((last + BAY_WIDTH * 0.5 - LOT_WIDTH * 0.5).abs() < 1e-3);
    }

    #[test]
    fn back_lines_face_away_from_the_aisle() {
        let mut north = MeshList::new();
        push_bay(&mut north, Mat4::IDENTITY);
        let mut south = MeshList::new();
        push_bay(&mut south, Mat4::from_rotation_y(PI));

        let back_line_z = |mesh: &MeshList| mesh.opaque().vertices[3 * 24].position[2];
        assert!(back_line_z(&north) < 0.0);
        assert!(back_line_z(&south) > 0.0);
    }

    #[test]
    fn label_sits_by_the_south_edge() {
        assert!((PARKING_LABEL_POSITION.z - (LOT_CENTER.z - LOT_DEPTH * 0.5)).abs() < 1.0);
        assert_eq!(PARKING_LABEL_POSITION.x, 0.0);
    }
}
