//! Sports grounds: a fenced basketball court and a marked football pitch.

use std::f32::consts::{PI, TAU};

use campus_engine::mesh::MeshList;
use glam::Vec3;

use super::{flat_box, lit_box, rgba};

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

// ── basketball ────────────────────────────────────────────────────────────

/// Court centre at the top of its slab.
pub const BASKETBALL_CENTER: Vec3 = Vec3::new(102.0, 5.0, -80.0);

const COURT_SURFACE: [f32; 3] = [0.0, 0.0, 0.5];
const COURT_FENCE: [f32; 3] = [0.5, 0.0, 0.0];
const POLE: [f32; 3] = [0.5, 0.2, 0.2];
const RIM: [f32; 3] = [1.0, 0.0, 0.0];

const COURT_HALF_LENGTH: f32 = 14.0;
const COURT_HALF_WIDTH: f32 = 7.5;
const LINE_LIFT: f32 = 0.06;
const LINE_THICKNESS: f32 = 0.01;
/// Free-throw lanes and arcs sit this far in from each baseline.
const LANE_INSET: f32 = 4.0;
const ARC_RADIUS: f32 = 3.0;
const ARC_DOTS: u32 = 18;
const FENCE_HEIGHT: f32 = 2.5;
const FENCE_SPACING: f32 = 2.0;

/// Court slab, painted lines, both hoops and a post fence around the edge.
pub fn push_basketball(mesh: &mut MeshList, c: Vec3) {
    let (hl, hw) = (COURT_HALF_LENGTH, COURT_HALF_WIDTH);
    lit_box(mesh, c, Vec3::new(2.0 * hl, 0.05, 2.0 * hw), COURT_SURFACE);

    let line_y = c.y + LINE_LIFT;
    let line = |mesh: &mut MeshList, x: f32, z: f32, sx: f32, sz: f32| {
        flat_box(mesh, Vec3::new(x, line_y, z), Vec3::new(sx, LINE_THICKNESS, sz), WHITE);
    };

    for side in [-1.0, 1.0] {
        line(mesh, c.x + side * hl, c.z, 0.1, 2.0 * hw);
        line(mesh, c.x, c.z + side * hw, 2.0 * hl, 0.1);
    }
    line(mesh, c.x, c.z, 0.2, 2.0 * hw);

    for side in [-1.0f32, 1.0] {
        let lane_x = c.x + side * (hl - LANE_INSET);
        line(mesh, lane_x, c.z, 6.0, 4.0);

        for i in 0..=ARC_DOTS {
            let theta = PI * i as f32 / ARC_DOTS as f32;
            let x = lane_x + theta.sin() * ARC_RADIUS * side;
            let z = c.z + theta.cos() * ARC_RADIUS;
            line(mesh, x, z, 0.1, 0.1);
        }

        flat_box(mesh, Vec3::new(c.x + side * hl, c.y + 1.0, c.z), Vec3::new(0.2, 2.0, 0.2), POLE);
        flat_box(mesh, Vec3::new(c.x + side * 13.9, c.y + 3.0, c.z), Vec3::new(0.05, 1.0, 1.8), WHITE);
        flat_box(mesh, Vec3::new(c.x + side * 13.75, c.y + 2.6, c.z), Vec3::new(0.1, 0.05, 0.6), RIM);
    }

    let post = Vec3::new(0.1, FENCE_HEIGHT, 0.1);
    let post_y = c.y + FENCE_HEIGHT * 0.5;
    let along_x = (2.0 * hl / FENCE_SPACING) as u32;
    for i in 0..=along_x {
        let x = c.x - hl + i as f32 * FENCE_SPACING;
        for z in [c.z - hw, c.z + hw] {
            lit_box(mesh, Vec3::new(x, post_y, z), post, COURT_FENCE);
        }
    }
    // Short sides skip the corners the long sides already cover.
    let along_z = ((2.0 * hw - 2.0 * FENCE_SPACING) / FENCE_SPACING) as u32;
    for i in 0..=along_z {
        let z = c.z - hw + FENCE_SPACING + i as f32 * FENCE_SPACING;
        for x in [c.x - hl, c.x + hl] {
            lit_box(mesh, Vec3::new(x, post_y, z), post, COURT_FENCE);
        }
    }
}

// ── football ──────────────────────────────────────────────────────────────

pub const PITCH_CENTER: Vec3 = Vec3::new(105.0, 0.1, 0.0);

const GRASS: [f32; 3] = [0.1, 0.4, 0.1];
const PITCH_WIDTH: f32 = 30.0;
const PITCH_LENGTH: f32 = 60.0;
const CENTER_CIRCLE_RADIUS: f32 = 6.0;
const CENTER_CIRCLE_POINTS: u32 = 36;
const BOX_WIDTH: f32 = 18.0;
const BOX_DEPTH: f32 = 9.0;
const SPOT_DISTANCE: f32 = 7.5;
const SPOT_SIZE: f32 = 0.3;
const PENALTY_ARC_RADIUS: f32 = 6.0;
const GOAL_WIDTH: f32 = 6.0;
const GOAL_HEIGHT: f32 = 2.0;
const GOAL_BAR: f32 = 0.1;
const GOAL_SETBACK: f32 = 0.3;

/// Grass pitch, line markings, penalty spots and two goals.
pub fn push_football(mesh: &mut MeshList) {
    let c = PITCH_CENTER;
    let (hw, hl) = (PITCH_WIDTH * 0.5, PITCH_LENGTH * 0.5);
    lit_box(mesh, c - Vec3::new(0.0, 0.02, 0.0), Vec3::new(PITCH_WIDTH, 0.05, PITCH_LENGTH), GRASS);

    let white = rgba(WHITE);
    let at = |x: f32, z: f32| Vec3::new(c.x + x, c.y, c.z + z);

    mesh.push_line_loop(&[at(-hw, -hl), at(hw, -hl), at(hw, hl), at(-hw, hl)], white);
    mesh.push_line(at(-hw, 0.0), at(hw, 0.0), white);

    let circle: Vec<Vec3> = (0..CENTER_CIRCLE_POINTS)
        .map(|i| {
            let a = TAU * i as f32 / CENTER_CIRCLE_POINTS as f32;
            at(CENTER_CIRCLE_RADIUS * a.cos(), CENTER_CIRCLE_RADIUS * a.sin())
        })
        .collect();
    mesh.push_line_loop(&circle, white);

    for end in [-1.0f32, 1.0] {
        let goal_line = end * hl;
        let box_edge = end * (hl - BOX_DEPTH);
        mesh.push_line_loop(
            &[
                at(-BOX_WIDTH * 0.5, goal_line),
                at(BOX_WIDTH * 0.5, goal_line),
                at(BOX_WIDTH * 0.5, box_edge),
                at(-BOX_WIDTH * 0.5, box_edge),
            ],
            white,
        );

        let spot_z = end * (hl - SPOT_DISTANCE);
        flat_box(mesh, at(0.0, spot_z), Vec3::new(SPOT_SIZE, 0.02, SPOT_SIZE), WHITE);

        let arc: Vec<Vec3> = (-6..=6)
            .map(|i| {
                let a = PI * i as f32 / 18.0;
                at(PENALTY_ARC_RADIUS * a.sin(), spot_z - end * PENALTY_ARC_RADIUS * a.cos())
            })
            .collect();
        mesh.push_line_strip(&arc, white);

        push_goal(mesh, at(0.0, end * (hl + GOAL_SETBACK)));
    }
}

/// Two posts and a crossbar standing on `base`.
fn push_goal(mesh: &mut MeshList, base: Vec3) {
    let post = Vec3::new(GOAL_BAR, GOAL_HEIGHT, GOAL_BAR);
    for side in [-1.0, 1.0] {
        let x = base.x + side * GOAL_WIDTH * 0.5;
        flat_box(mesh, Vec3::new(x, base.y + GOAL_HEIGHT * 0.5, base.z), post, WHITE);
    }
    flat_box(
        mesh,
        base + Vec3::new(0.0, GOAL_HEIGHT, 0.0),
        Vec3::new(GOAL_WIDTH, GOAL_BAR, GOAL_BAR),
        WHITE,
    );
}
