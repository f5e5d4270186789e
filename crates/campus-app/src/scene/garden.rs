use std::f32::consts::PI;

use campus_engine::mesh::{Material, MeshList};
use glam::{Mat4, Vec3};

use super::{lit_box, push_box, rgba};

const LAWN: [f32; 3] = [0.2, 0.6, 0.25];
const PATH_STONE: [f32; 3] = [0.5, 0.5, 0.5];
const BARK: [f32; 3] = [0.4, 0.26, 0.13];
const LEAVES: [f32; 3] = [0.0, 0.5, 0.0];
const WOOD: [f32; 3] = [0.6, 0.4, 0.2];

const LAWN_CENTER: Vec3 = Vec3::new(-19.0, -0.5, 85.0);
const LAWN_SIZE: Vec3 = Vec3::new(60.0, 1.02, 30.0);

const PATH_START_X: f32 = -48.0;
const PATH_TILES: usize = 46;
const PATH_PITCH: f32 = 1.1;

const TREES: [(f32, f32); 8] = [
    (-45.0, 78.0),
    (-38.0, 92.0),
    (-30.0, 76.0),
    (-22.0, 95.0),
    (-14.0, 79.0),
    (-6.0, 94.0),
    (2.0, 76.0),
    (10.0, 93.0),
];

/// Benches south of the path face north; the row north of it is turned around.
const BENCHES_SOUTH: [(f32, f32); 4] = [(-43.0, 82.0), (-30.0, 82.0), (-17.0, 82.0), (-6.0, 82.0)];
const BENCHES_NORTH: [(f32, f32); 4] = [(-38.0, 89.0), (-25.0, 89.0), (-12.0, 89.0), (-1.0, 89.0)];

const SPHERE_SEGMENTS: u32 = 16;

/// Lawn with a stone path, trees and benches.
pub fn push(mesh: &mut MeshList) {
    lit_box(mesh, LAWN_CENTER, LAWN_SIZE, LAWN);

    for i in 0..PATH_TILES {
        let x = PATH_START_X + i as f32 * PATH_PITCH;
        lit_box(mesh, Vec3::new(x, 0.01, LAWN_CENTER.z), Vec3::new(1.0, 0.05, 1.0), PATH_STONE);
    }

    for (x, z) in TREES {
        push_tree(mesh, Vec3::new(x, 0.0, z));
    }

    for (x, z) in BENCHES_SOUTH {
        push_bench(mesh, Mat4::from_translation(Vec3::new(x, 0.0, z)));
    }
    for (x, z) in BENCHES_NORTH {
        push_bench(mesh, Mat4::from_translation(Vec3::new(x, 0.0, z)) * Mat4::from_rotation_y(PI));
    }
}

/// Trunk with three overlapping canopy spheres, standing on `base`.
pub(super) fn push_tree(mesh: &mut MeshList, base: Vec3) {
    lit_box(mesh, base + Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.5, 4.0, 0.5), BARK);

    let crown = base + Vec3::new(0.0, 6.0, 0.0);
    let leaves = rgba(LEAVES);
    mesh.push_sphere(crown, 2.0, leaves, Material::Lit, SPHERE_SEGMENTS);
    mesh.push_sphere(crown + Vec3::new(0.7, 0.5, 0.3), 1.5, leaves, Material::Lit, SPHERE_SEGMENTS);
    mesh.push_sphere(crown + Vec3::new(-0.7, 0.5, -0.3), 1.5, leaves, Material::Lit, SPHERE_SEGMENTS);
}

/// Seat, backrest, two armrests and four legs, in the frame `at`.
fn push_bench(mesh: &mut MeshList, at: Mat4) {
    let part = |mesh: &mut MeshList, center: Vec3, size: Vec3| {
        push_box(mesh, at, center, size, WOOD, Material::Lit);
    };

    part(mesh, Vec3::new(0.0, 0.5, 0.0), Vec3::new(2.2, 0.2, 1.0));
    part(mesh, Vec3::new(0.0, 1.0, -0.45), Vec3::new(2.2, 1.0, 0.2));
    for dx in [-0.55, 0.55] {
        part(mesh, Vec3::new(dx, 0.75, 0.0), Vec3::new(0.1, 0.1, 1.0));
        for dz in [-0.45, 0.45] {
            part(mesh, Vec3::new(dx, 0.0, dz), Vec3::new(0.1, 0.5, 0.1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z_range(mesh: &MeshList) -> (f32, f32) {
        mesh.opaque().vertices.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v.position[2]), hi.max(v.position[2]))
        })
    }

    #[test]
    fn bench_is_eight_parts() {
        let mut mesh = MeshList::new();
        push_bench(&mut mesh, Mat4::IDENTITY);
        assert_eq!(mesh.opaque().vertices.len(), 8 * 24);
    }

    #[test]
    fn turned_bench_has_its_back_to_the_north() {
        let mut facing = MeshList::new();
        push_bench(&mut facing, Mat4::IDENTITY);
        let mut turned = MeshList::new();
        push_bench(&mut turned, Mat4::from_rotation_y(PI));

        // The backrest reaches furthest back: -z normally, +z once turned.
        let (lo, hi) = z_range(&facing);
        assert!((lo + 0.55).abs() < 1e-4);
        assert!((hi - 0.5).abs() < 1e-4);
        let (lo, hi) = z_range(&turned);
        assert!((hi - 0.55).abs() < 1e-4);
        assert!((lo + 0.5).abs() < 1e-4);
    }

    #[test]
    fn tree_reaches_above_its_canopy_centre() {
        let mut mesh = MeshList::new();
        push_tree(&mut mesh, Vec3::new(3.0, 0.0, 4.0));
        let top = mesh.opaque().vertices.iter().map(|v| v.position[1]).fold(f32::NEG_INFINITY, f32::max);
        assert!((top - 8.0).abs() < 1e-3);
    }

    #[test]
    fn garden_lays_every_tile() {
        let mut mesh = MeshList::new();
        push(&mut mesh);
        let cubes = 1 + PATH_TILES + TREES.len() + 8 * (BENCHES_SOUTH.len() + BENCHES_NORTH.len());
        let spheres = 3 * TREES.len();
        let per_sphere = ((SPHERE_SEGMENTS / 2 + 1) * (SPHERE_SEGMENTS + 1)) as usize;
        assert_eq!(mesh.opaque().vertices.len(), cubes * 24 + spheres * per_sphere);
    }
}
