//! Detailed buildings: body, roof lip, framed windows on every floor and a
//! front door. Windows glow at night following [`BuildingSpec::window_lit`].

use campus_engine::mesh::{Material, MeshList};
use campus_world::{BuildingId, BuildingSpec, CampusState};
use glam::{Mat4, Vec3};

use super::{push_box, shade};

const GLASS: [f32; 3] = [0.5, 0.7, 0.8];
const LIT_GLASS: [f32; 3] = [0.9, 0.8, 0.3];

const ROOF_THICKNESS: f32 = 0.3;
const ROOF_OVERHANG: f32 = 0.5;
const PANE_DEPTH: f32 = 0.2;
/// Frames are shallower than panes so the glass stands proud of them.
const FRAME_DEPTH: f32 = PANE_DEPTH * 0.6;
const FRAME_MARGIN: f32 = 0.2;

/// One wall and its row of windows, in building-local space.
struct Face {
    index: u32,
    /// Outward normal.
    normal: Vec3,
    /// Axis the windows are spread along.
    along: Vec3,
    /// Distance from the body centre to the wall.
    half_depth: f32,
    /// Wall length along `along`.
    span: f32,
    count: u32,
    pane_width: f32,
}

impl Face {
    /// Box size with `depth` along the normal, `width` along the wall and `height` up.
    fn extent(&self, depth: f32, width: f32, height: f32) -> Vec3 {
        self.normal.abs() * depth + self.along.abs() * width + Vec3::Y * height
    }

    /// Offsets of the window centres along the wall.
    fn columns(&self) -> impl Iterator<Item = (u32, f32)> + '_ {
        let spacing = self.span / (self.count + 1) as f32;
        (0..self.count).map(move |col| {
            (col, -self.span * 0.5 + (col + 1) as f32 * spacing - spacing * 0.5)
        })
    }
}

/// Every building in the catalog, lifted while hovered.
pub fn push(mesh: &mut MeshList, state: &CampusState, night: bool) {
    for id in BuildingId::ALL {
        push_building(mesh, id.spec(), state.lift(id), night);
    }
}

fn push_building(mesh: &mut MeshList, spec: &BuildingSpec, lift: f32, night: bool) {
    let (w, h, d) = (spec.size.x, spec.size.y, spec.size.z);
    let local = Mat4::from_translation(spec.base + Vec3::new(0.0, lift + h * 0.5, 0.0));

    push_box(mesh, local, Vec3::ZERO, spec.size, spec.color, Material::Lit);
    push_box(
        mesh,
        local,
        Vec3::new(0.0, h * 0.5 + ROOF_THICKNESS * 0.5, 0.0),
        Vec3::new(w + ROOF_OVERHANG, ROOF_THICKNESS, d + ROOF_OVERHANG),
        shade(spec.color, 0.6),
        Material::Lit,
    );

    let floors = spec.floors.max(1);
    let floor_h = h / floors as f32;
    let win_w = w / (spec.windows_x + 1) as f32 * 0.6;
    let win_h = floor_h * 0.5;
    let frame_color = shade(spec.color, 0.5);

    let faces = [
        Face {
            index: 0,
            normal: Vec3::X,
            along: Vec3::Z,
            half_depth: w * 0.5,
            span: d,
            count: spec.windows_z_front,
            pane_width: win_w * 0.8,
        },
        Face {
            index: 1,
            normal: Vec3::NEG_X,
            along: Vec3::Z,
            half_depth: w * 0.5,
            span: d,
            count: spec.windows_z_front,
            pane_width: win_w * 0.8,
        },
        Face {
            index: 2,
            normal: Vec3::Z,
            along: Vec3::X,
            half_depth: d * 0.5,
            span: w,
            count: spec.windows_x,
            pane_width: win_w,
        },
        Face {
            index: 3,
            normal: Vec3::NEG_Z,
            along: Vec3::X,
            half_depth: d * 0.5,
            span: w,
            count: spec.windows_x,
            pane_width: win_w,
        },
    ];

    for floor in 0..floors {
        let floor_y = -h * 0.5 + floor as f32 * floor_h + floor_h * 0.2;
        let y = floor_y + win_h * 0.5;

        for face in &faces {
            for (col, offset) in face.columns() {
                let wall = face.along * offset + Vec3::Y * y + face.normal * face.half_depth;
                let (glass, material) = if night && spec.window_lit(face.index, floor, col) {
                    (LIT_GLASS, Material::Unlit)
                } else {
                    (GLASS, Material::Lit)
                };

                push_box(
                    mesh,
                    local,
                    wall + face.normal * (PANE_DEPTH * 0.5),
                    face.extent(PANE_DEPTH, face.pane_width, win_h),
                    glass,
                    material,
                );
                push_box(
                    mesh,
                    local,
                    wall + face.normal * (FRAME_DEPTH * 0.5),
                    face.extent(FRAME_DEPTH, face.pane_width + FRAME_MARGIN, win_h + FRAME_MARGIN),
                    frame_color,
                    Material::Lit,
                );
            }
        }
    }

    let door_h = floor_h * 0.8;
    let door_color = [spec.color[0] * 0.4, spec.color[1] * 0.4, spec.color[2] * 0.35];
    push_box(
        mesh,
        local,
        Vec3::new(w * 0.5 + PANE_DEPTH * 0.5, -h * 0.5 + door_h * 0.5, 0.0),
        Vec3::new(PANE_DEPTH * 1.5, door_h, win_w * 1.5),
        door_color,
        Material::Lit,
    );
}

#[cfg(test)]
mod tests {
    use campus_engine::mesh::MeshVertex;

    use super::*;

    const CUBE_VERTS: usize = 24;

    fn window_count(spec: &BuildingSpec) -> usize {
        (2 * (spec.windows_x + spec.windows_z_front) * spec.floors) as usize
    }

    fn top(vertices: &[MeshVertex]) -> f32 {
        vertices.iter().map(|v| v.position[1]).fold(f32::NEG_INFINITY, f32::max)
    }

    #[test]
    fn day_building_has_body_roof_windows_and_door() {
        let spec = BuildingId::Library.spec();
        let mut mesh = MeshList::new();
        push_building(&mut mesh, spec, 0.0, false);

        let boxes = mesh.opaque().vertices.len() / CUBE_VERTS;
        assert_eq!(boxes, 2 + 2 * window_count(spec) + 1);
        assert!(mesh.opaque().vertices.iter().all(|v| v.normal != [0.0; 3]));
    }

    #[test]
    fn roof_sits_on_the_body_and_follows_lift() {
        let spec = BuildingId::Cafe.spec();
        let mut mesh = MeshList::new();
        push_building(&mut mesh, spec, 0.0, false);
        let resting = top(&mesh.opaque().vertices);
        assert!((resting - (spec.base.y + spec.size.y + ROOF_THICKNESS)).abs() < 1e-4);

        mesh.clear();
        push_building(&mut mesh, spec, 0.5, false);
        assert!((top(&mesh.opaque().vertices) - resting - 0.5).abs() < 1e-4);
    }

    #[test]
    fn night_lights_some_windows() {
        let spec = BuildingId::Academic1.spec();
        let mut mesh = MeshList::new();
        push_building(&mut mesh, spec, 0.0, true);

        let glowing = mesh.opaque().vertices.iter().filter(|v| v.normal == [0.0; 3]).count() / CUBE_VERTS;
        assert!(glowing > 0);
        assert!(glowing < window_count(spec));
        let glowing_color = [LIT_GLASS[0], LIT_GLASS[1], LIT_GLASS[2], 1.0];
        assert!(mesh
            .opaque()
            .vertices
            .iter()
            .filter(|v| v.normal == [0.0; 3])
            .all(|v| v.color == glowing_color));
    }

    #[test]
    fn columns_are_centred_in_their_bays() {
        let face = Face {
            index: 0,
            normal: Vec3::X,
            along: Vec3::Z,
            half_depth: 1.0,
            span: 12.0,
            count: 2,
            pane_width: 1.0,
        };
        let offsets: Vec<f32> = face.columns().map(|(_, o)| o).collect();
        assert_eq!(offsets, [-4.0, 0.0]);
    }

    #[test]
    fn extent_orients_depth_along_normal() {
        let face = Face {
            index: 2,
            normal: Vec3::NEG_Z,
            along: Vec3::X,
            half_depth: 1.0,
            span: 1.0,
            count: 1,
            pane_width: 1.0,
        };
        assert_eq!(face.extent(0.2, 3.0, 2.0), Vec3::new(3.0, 2.0, 0.2));
    }
}
