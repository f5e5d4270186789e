//! Sky layers.
//!
//! The gradient and stars are screen-space rects painted before the 3D pass;
//! the sun or moon, birds and clouds are regular scene geometry.

use campus_engine::coords::{Rect, Viewport};
use campus_engine::mesh::{Material, MeshList};
use campus_engine::paint::{Color, LinearGradient};
use campus_engine::scene::{DrawList, ZIndex};
use campus_world::ambient::{self, Clouds, BIRD_COLOR, CLOUD_COLOR, CLOUD_PUFFS};
use campus_world::sky::STAR_COLOR;
use campus_world::{DayNight, OrbitCamera};
use glam::Vec3;
use rand::Rng;

use super::rgba;

const BODY_SEGMENTS: u32 = 20;
const CLOUD_SEGMENTS: u32 = 12;

const GRADIENT_Z: ZIndex = ZIndex(0);
const STAR_Z: ZIndex = ZIndex(1);

/// Vertical gradient filling the window, plus the stars at night.
///
/// `stars` are offsets from the camera look-at point, as produced by
/// [`campus_world::sky::star_offsets`]. Star sizes are re-rolled every call.
pub fn push_backdrop(
    list: &mut DrawList,
    viewport: Viewport,
    day_night: &DayNight,
    camera: &OrbitCamera,
    stars: &[Vec3],
    rng: &mut impl Rng,
) {
    let palette = day_night.palette();
    let rect = viewport.rect();
    list.push_rect(
        GRADIENT_Z,
        rect,
        LinearGradient::vertical(
            rect,
            Color::from_rgb_array(palette.zenith),
            Color::from_rgb_array(palette.horizon),
        ),
    );

    if !day_night.is_night() {
        return;
    }
    let star_color = Color::from_rgb_array(STAR_COLOR);
    for offset in stars {
        let Some(p) = camera.project(camera.look_at + *offset, viewport) else { continue };
        let size = ambient::twinkle_size(rng);
        let half = size * 0.5;
        list.push_rect(STAR_Z, Rect::new(p.x - half, p.y - half, size, size), star_color);
    }
}

/// Sun or moon disc, unaffected by the light it casts.
pub fn push_bodies(mesh: &mut MeshList, day_night: &DayNight, look_at: Vec3) {
    let palette = day_night.palette();
    mesh.push_sphere(
        day_night.body_position(look_at),
        palette.body_radius,
        rgba(palette.body),
        Material::Unlit,
        BODY_SEGMENTS,
    );
}

/// V-shaped birds, one line per wing. None at night.
pub fn push_birds(mesh: &mut MeshList, t: f32, night: bool) {
    let color = rgba(BIRD_COLOR);
    for bird in ambient::birds(t, night) {
        for tip in bird.wing_tips() {
            mesh.push_line(bird.position, bird.position + tip, color);
        }
    }
}

/// Translucent clouds, each a chain of overlapping puffs.
pub fn push_clouds(mesh: &mut MeshList, clouds: &Clouds) {
    for (origin, scale) in clouds.drawn() {
        let mut center = origin;
        for (offset, radius) in CLOUD_PUFFS {
            center += Vec3::from(offset) * scale;
            mesh.push_sphere(center, radius * scale, CLOUD_COLOR, Material::Lit, CLOUD_SEGMENTS);
        }
    }
}

#[cfg(test)]
mod tests {
    use campus_engine::scene::DrawCmd;
    use campus_engine::paint::Paint;
    use campus_world::sky::star_offsets;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    const VIEWPORT: Viewport = Viewport::new(1280.0, 720.0);

    fn backdrop(day_night: &DayNight) -> DrawList {
        let mut list = DrawList::new();
        let mut rng = StdRng::seed_from_u64(5);
        push_backdrop(&mut list, VIEWPORT, day_night, &OrbitCamera::default(), &star_offsets(), &mut rng);
        list
    }

    #[test]
    fn day_backdrop_is_a_single_gradient() {
        let list = backdrop(&DayNight::default());
        assert_eq!(list.items().len(), 1);
        let DrawCmd::Rect(cmd) = &list.items()[0].cmd else { panic!("expected rect") };
        assert_eq!(cmd.rect, VIEWPORT.rect());
        let Paint::LinearGradient(g) = &cmd.paint else { panic!("expected gradient") };
        assert_eq!(g.stops[0].color, Color::from_rgb_array(DayNight::default().palette().zenith));
    }

    #[test]
    fn night_backdrop_adds_visible_stars() {
        let mut night = DayNight::default();
        night.toggle();
        let list = backdrop(&night);

        let stars: Vec<Rect> = list
            .items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Rect(cmd) if item.z == STAR_Z => Some(cmd.rect),
                _ => None,
            })
            .collect();
        assert!(!stars.is_empty());
        for r in stars {
            assert!((1.5..2.5).contains(&r.size.x));
            assert_eq!(r.size.x, r.size.y);
        }
    }

    #[test]
    fn sun_is_an_unlit_sphere_at_its_position() {
        let dn = DayNight::default();
        let mut mesh = MeshList::new();
        push_bodies(&mut mesh, &dn, Vec3::ZERO);

        let verts = &mesh.opaque().vertices;
        assert!(verts.iter().all(|v| v.normal == [0.0; 3]));
        let center = dn.body_position(Vec3::ZERO);
        let top = verts.iter().map(|v| v.position[1]).fold(f32::NEG_INFINITY, f32::max);
        assert!((top - (center.y + dn.palette().body_radius)).abs() < 1e-3);
    }

    #[test]
    fn each_bird_has_two_wings() {
        let mut mesh = MeshList::new();
        push_birds(&mut mesh, 0.0, false);
        assert_eq!(mesh.lines().indices.len(), ambient::BIRD_COUNT * 2 * 2);

        mesh.clear();
        push_birds(&mut mesh, 0.0, true);
        assert!(mesh.lines().is_empty());
    }

    #[test]
    fn clouds_are_translucent() {
        let clouds = Clouds::seeded(9);
        let mut mesh = MeshList::new();
        push_clouds(&mut mesh, &clouds);
        assert!(mesh.opaque().is_empty());
        assert!(!mesh.translucent().is_empty());
        assert!(mesh.translucent().vertices.iter().all(|v| v.color[3] < 1.0));
    }
}
