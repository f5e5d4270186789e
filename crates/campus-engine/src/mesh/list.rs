use std::f32::consts::{PI, TAU};

use bytemuck::Zeroable;
use glam::{Mat3, Mat4, Vec3};

use super::vertex::{Material, MeshVertex};

/// Indexed vertices sharing one pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBatch {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshBatch {
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Appends vertices and indices relative to them.
    pub fn extend(&mut self, vertices: &[MeshVertex], indices: &[u32]) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(vertices);
        self.indices.extend(indices.iter().map(|i| base + i));
    }
}

/// Outward normal and two edge directions per cube face, with `u x v = n`
/// so corners listed `-u-v, +u-v, +u+v, -u+v` wind counter-clockwise.
const CUBE_FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::Y, Vec3::Z),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::Z, Vec3::X),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::Y, Vec3::X),
];

const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// One frame of 3D geometry.
#[derive(Debug, Clone, Default)]
pub struct MeshList {
    opaque: MeshBatch,
    translucent: MeshBatch,
    lines: MeshBatch,
}

impl MeshList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.opaque.clear();
        self.translucent.clear();
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.opaque.is_empty() && self.translucent.is_empty() && self.lines.is_empty()
    }

    #[inline]
    pub fn opaque(&self) -> &MeshBatch {
        &self.opaque
    }

    #[inline]
    pub fn translucent(&self) -> &MeshBatch {
        &self.translucent
    }

    #[inline]
    pub fn lines(&self) -> &MeshBatch {
        &self.lines
    }

    fn triangles_for(&mut self, color: [f32; 4]) -> &mut MeshBatch {
        if color[3] < 1.0 { &mut self.translucent } else { &mut self.opaque }
    }

    /// Adds the unit cube centred on the origin, transformed by `transform`.
    ///
    /// Build `transform` as translate * rotate * scale to get an axis-aligned
    /// box of size `scale` at `translate`. Degenerate transforms are skipped.
    pub fn push_cuboid(&mut self, transform: Mat4, color: [f32; 4], material: Material) {
        let linear = Mat3::from_mat4(transform);
        let det = linear.determinant();
        if !det.is_finite() || det.abs() < f32::EPSILON || !transform.is_finite() {
            log::debug!("skipping cuboid with degenerate transform");
            return;
        }
        let normal_matrix = linear.inverse().transpose();

        let mut vertices = [MeshVertex::zeroed(); 24];
        let mut indices = [0u32; 36];
        for (f, (n, u, v)) in CUBE_FACES.into_iter().enumerate() {
            let normal = normal_matrix * n;
            let corners = [-u - v, u - v, u + v, -u + v];
            for (c, corner) in corners.into_iter().enumerate() {
                let local = (n + corner) * 0.5;
                vertices[f * 4 + c] =
                    MeshVertex::new(transform.transform_point3(local), normal, color, material);
            }
            for (k, i) in QUAD_INDICES.into_iter().enumerate() {
                indices[f * 6 + k] = (f * 4) as u32 + i;
            }
        }

        self.triangles_for(color).extend(&vertices, &indices);
    }

    /// Adds a UV sphere with `segments` slices around and half as many stacks.
    pub fn push_sphere(
        &mut self,
        center: Vec3,
        radius: f32,
        color: [f32; 4],
        material: Material,
        segments: u32,
    ) {
        if !(radius > 0.0) || !center.is_finite() {
            return;
        }
        let slices = segments.max(3);
        let stacks = (segments / 2).max(2);

        let mut vertices = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);
        for i in 0..=stacks {
            let phi = PI * i as f32 / stacks as f32;
            for j in 0..=slices {
                let theta = TAU * j as f32 / slices as f32;
                let dir = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
                vertices.push(MeshVertex::new(center + dir * radius, dir, color, material));
            }
        }

        let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);
        let row = slices + 1;
        for i in 0..stacks {
            for j in 0..slices {
                let a = i * row + j;
                let b = a + row;
                indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
            }
        }

        self.triangles_for(color).extend(&vertices, &indices);
    }

    pub fn push_line(&mut self, a: Vec3, b: Vec3, color: [f32; 4]) {
        self.push_line_strip(&[a, b], color);
    }

    /// Connects consecutive points.
    pub fn push_line_strip(&mut self, points: &[Vec3], color: [f32; 4]) {
        self.push_polyline(points, color, false);
    }

    /// Connects consecutive points and closes the loop.
    pub fn push_line_loop(&mut self, points: &[Vec3], color: [f32; 4]) {
        self.push_polyline(points, color, true);
    }

    fn push_polyline(&mut self, points: &[Vec3], color: [f32; 4], closed: bool) {
        if points.len() < 2 {
            return;
        }
        let vertices: Vec<MeshVertex> = points
            .iter()
            .map(|p| MeshVertex::new(*p, Vec3::ZERO, color, Material::Unlit))
            .collect();

        let n = points.len() as u32;
        let mut indices: Vec<u32> = (0..n - 1).flat_map(|i| [i, i + 1]).collect();
        if closed && n > 2 {
            indices.extend_from_slice(&[n - 1, 0]);
        }
        self.lines.extend(&vertices, &indices);
    }
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];
    const GLASS: [f32; 4] = [0.5, 0.7, 0.9, 0.6];

    fn bounds(batch: &MeshBatch) -> (Vec3, Vec3) {
        batch.vertices.iter().fold((Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)), |(lo, hi), v| {
            let p = Vec3::from_array(v.position);
            (lo.min(p), hi.max(p))
        })
    }

    fn face_normals(batch: &MeshBatch) -> Vec<Vec3> {
        batch.vertices.iter().step_by(4).map(|v| Vec3::from_array(v.normal)).collect()
    }

    // ── cuboids ───────────────────────────────────────────────────────────

    #[test]
    fn cuboid_covers_translated_scaled_box() {
        let mut list = MeshList::new();
        let m = Mat4::from_translation(Vec3::new(10.0, 2.0, -4.0)) * Mat4::from_scale(Vec3::new(4.0, 2.0, 6.0));
        list.push_cuboid(m, WHITE, Material::Lit);

        let batch = list.opaque();
        assert_eq!(batch.vertices.len(), 24);
        assert_eq!(batch.indices.len(), 36);
        let (lo, hi) = bounds(batch);
        assert!(lo.abs_diff_eq(Vec3::new(8.0, 1.0, -7.0), 1e-5));
        assert!(hi.abs_diff_eq(Vec3::new(12.0, 3.0, -1.0), 1e-5));
    }

    #[test]
    fn cuboid_normals_survive_non_uniform_scale() {
        let mut list = MeshList::new();
        list.push_cuboid(Mat4::from_scale(Vec3::new(5.0, 1.0, 0.2)), WHITE, Material::Lit);
        let normals = face_normals(list.opaque());
        for (n, (expected, _, _)) in normals.iter().zip(CUBE_FACES) {
            assert!(n.abs_diff_eq(expected, 1e-5), "{n} != {expected}");
        }
    }

    #[test]
    fn cuboid_normals_follow_rotation() {
        let mut list = MeshList::new();
        list.push_cuboid(Mat4::from_quat(Quat::from_rotation_y(PI / 2.0)), WHITE, Material::Lit);
        let plus_x = face_normals(list.opaque())[0];
        assert!(plus_x.abs_diff_eq(Vec3::NEG_Z, 1e-5));
    }

    #[test]
    fn translucent_cuboid_goes_to_its_own_batch() {
        let mut list = MeshList::new();
        list.push_cuboid(Mat4::IDENTITY, GLASS, Material::Lit);
        assert!(list.opaque().is_empty());
        assert_eq!(list.translucent().vertices.len(), 24);
    }

    #[test]
    fn degenerate_cuboid_is_skipped() {
        let mut list = MeshList::new();
        list.push_cuboid(Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0)), WHITE, Material::Lit);
        assert!(list.is_empty());
    }

    #[test]
    fn batches_offset_indices() {
        let mut list = MeshList::new();
        list.push_cuboid(Mat4::IDENTITY, WHITE, Material::Unlit);
        list.push_cuboid(Mat4::IDENTITY, WHITE, Material::Unlit);
        let batch = list.opaque();
        assert_eq!(batch.indices[36], 24);
        assert!(batch.indices.iter().all(|&i| (i as usize) < batch.vertices.len()));
        assert!(batch.vertices.iter().all(|v| !v.is_lit()));
    }

    // ── spheres ───────────────────────────────────────────────────────────

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let mut list = MeshList::new();
        let c = Vec3::new(0.0, 80.0, 0.0);
        list.push_sphere(c, 6.0, WHITE, Material::Lit, 16);
        let batch = list.opaque();
        assert_eq!(batch.vertices.len(), 9 * 17);
        assert_eq!(batch.indices.len(), 8 * 16 * 6);
        for v in &batch.vertices {
            assert!(((Vec3::from_array(v.position) - c).length() - 6.0).abs() < 1e-4);
        }
    }

    #[test]
    fn sphere_without_radius_is_skipped() {
        let mut list = MeshList::new();
        list.push_sphere(Vec3::ZERO, 0.0, WHITE, Material::Lit, 8);
        list.push_sphere(Vec3::ZERO, f32::NAN, WHITE, Material::Lit, 8);
        assert!(list.is_empty());
    }

    // ── lines ─────────────────────────────────────────────────────────────

    #[test]
    fn line_loop_closes() {
        let mut list = MeshList::new();
        list.push_line_loop(&[Vec3::ZERO, Vec3::X, Vec3::Y], WHITE);
        assert_eq!(list.lines().indices, [0, 1, 1, 2, 2, 0]);
    }

    #[test]
    fn strip_and_single_line() {
        let mut list = MeshList::new();
        list.push_line(Vec3::ZERO, Vec3::X, WHITE);
        list.push_line_strip(&[Vec3::ZERO, Vec3::Y, Vec3::Z], WHITE);
        list.push_line_strip(&[Vec3::ZERO], WHITE);
        assert_eq!(list.lines().indices, [0, 1, 2, 3, 3, 4]);
        assert!(list.opaque().is_empty());
    }
}
