//! Geometry emitters for the 3D campus.
//!
//! Every emitter appends to a [`MeshList`] in world space. The list is rebuilt
//! from scratch each frame, so emitters read the current hover lift, day/night
//! flag and animation state directly.

mod buildings;
mod courts;
mod garden;
mod ground;
mod parking;
mod roads;
pub mod sky;

use campus_engine::mesh::{Material, MeshList};
use campus_world::ambient::Clouds;
use campus_world::{CampusState, DayNight};
use glam::{Mat4, Vec3};

pub use parking::PARKING_LABEL_POSITION;

/// State the 3D scene depends on this frame.
pub struct SceneInput<'a> {
    pub state: &'a CampusState,
    pub day_night: &'a DayNight,
    pub clouds: &'a Clouds,
    pub look_at: Vec3,
}

/// Rebuilds the whole campus into `mesh`.
pub fn build(mesh: &mut MeshList, input: &SceneInput<'_>) {
    mesh.clear();

    sky::push_bodies(mesh, input.day_night, input.look_at);
    ground::push(mesh);
    roads::push(mesh);
    buildings::push(mesh, input.state, input.day_night.is_night());
    garden::push(mesh);
    parking::push(mesh);
    courts::push_basketball(mesh, courts::BASKETBALL_CENTER);
    courts::push_football(mesh);
    sky::push_birds(mesh, input.clouds.offset(), input.day_night.is_night());
    sky::push_clouds(mesh, input.clouds);
}

// ── shared helpers ────────────────────────────────────────────────────────

#[inline]
pub(crate) const fn rgba(c: [f32; 3]) -> [f32; 4] {
    [c[0], c[1], c[2], 1.0]
}

#[inline]
pub(crate) fn shade(c: [f32; 3], k: f32) -> [f32; 3] {
    c.map(|v| v * k)
}

/// Box of `size` centred at `center`, in the frame given by `parent`.
pub(crate) fn push_box(
    mesh: &mut MeshList,
    parent: Mat4,
    center: Vec3,
    size: Vec3,
    color: [f32; 3],
    material: Material,
) {
    let transform = parent * Mat4::from_translation(center) * Mat4::from_scale(size);
    mesh.push_cuboid(transform, rgba(color), material);
}

/// Lit world-space box.
#[inline]
pub(crate) fn lit_box(mesh: &mut MeshList, center: Vec3, size: Vec3, color: [f32; 3]) {
    push_box(mesh, Mat4::IDENTITY, center, size, color, Material::Lit);
}

/// Unlit world-space box, for painted markings.
#[inline]
pub(crate) fn flat_box(mesh: &mut MeshList, center: Vec3, size: Vec3, color: [f32; 3]) {
    push_box(mesh, Mat4::IDENTITY, center, size, color, Material::Unlit);
}
