//! Screen-space overlay: info boxes, mode caption, control hint and the
//! floating labels above buildings.

use campus_engine::coords::{Vec2, Viewport};
use campus_engine::paint::Color;
use campus_engine::scene::{DrawList, ZIndex};
use campus_engine::text::{FontId, FontSystem};
use campus_world::hud::{self, InfoBox, BOX_TEXT_SIZE};
use campus_world::{BuildingId, BuildingSpec, CampusState, DayNight, OrbitCamera};
use glam::Vec3;

use crate::scene::PARKING_LABEL_POSITION;

const LABEL_Z: ZIndex = ZIndex(0);
const BOX_Z: ZIndex = ZIndex(10);
const BOX_TEXT_Z: ZIndex = ZIndex(11);

/// Building box text when nothing is hovered or selected.
pub const NO_BUILDING: &str = "Location";
pub const CONTROL_HINT: &str = "N:Toggle Day/Night | Mouse:Orbit/Zoom | Arrows/RMB:Pan";

const CAPTION_LEFT: f32 = 10.0;
/// Baselines measured from the top edge.
const MODE_BASELINE: f32 = 25.0;
const HINT_BASELINE: f32 = 45.0;
const MODE_SIZE: f32 = 18.0;
const HINT_SIZE: f32 = 12.0;

const BUILDING_LABEL_SIZE: f32 = 12.0;
const BUILDING_LABEL_COLOR: Color = Color::rgb(0.1, 0.1, 0.1);
/// Gap between a roof and its label.
const LABEL_CLEARANCE: f32 = 2.0;
const PARKING_LABEL_SIZE: f32 = 18.0;

/// State the overlay depends on this frame.
pub struct HudInput<'a> {
    pub state: &'a CampusState,
    pub day_night: &'a DayNight,
    pub camera: &'a OrbitCamera,
    pub viewport: Viewport,
    pub fonts: &'a FontSystem,
    /// `None` when no font could be loaded; only the box backgrounds are drawn.
    pub font: Option<FontId>,
}

/// Rebuilds the overlay into `list`.
pub fn build(list: &mut DrawList, input: &HudInput<'_>) {
    list.clear();
    push_boxes(list, input);

    let Some(font) = input.font else { return };
    push_box_text(list, input, font);
    push_captions(list, input.day_night, font);
    push_labels(list, input, font);
}

fn push_boxes(list: &mut DrawList, input: &HudInput<'_>) {
    let w = input.viewport.width;
    let hover = input.state.hud_hover();
    let fill = Color::grey(hud::box_fill(hover.role_box));
    for b in boxes(hover.status_box) {
        list.push_rect(BOX_Z, b.rect(w), fill);
    }
}

fn boxes(status_hovered: bool) -> [InfoBox; 3] {
    [hud::ROLE_BOX, hud::BUILDING_BOX, hud::status_box(status_hovered)]
}

/// Texts for the role, building and status boxes, in that order.
pub fn box_texts(state: &CampusState, night: bool) -> [&'static str; 3] {
    let building = state.focused().map_or(NO_BUILDING, BuildingId::display_name);
    let status = state.displayed_status(night).map_or("", |s| s.label());
    [state.role().label(), building, status]
}

fn push_box_text(list: &mut DrawList, input: &HudInput<'_>, font: FontId) {
    let w = input.viewport.width;
    let texts = box_texts(input.state, input.day_night.is_night());
    for (b, text) in boxes(input.state.hud_hover().status_box).into_iter().zip(texts) {
        if text.is_empty() {
            continue;
        }
        list.push_text(BOX_TEXT_Z, text, font, BOX_TEXT_SIZE, Color::BLACK, b.text_origin(w));
    }
}

fn push_captions(list: &mut DrawList, day_night: &DayNight, font: FontId) {
    list.push_text(
        BOX_TEXT_Z,
        day_night.mode_label(),
        font,
        MODE_SIZE,
        Color::WHITE,
        Vec2::new(CAPTION_LEFT, MODE_BASELINE - MODE_SIZE),
    );
    list.push_text(
        BOX_TEXT_Z,
        CONTROL_HINT,
        font,
        HINT_SIZE,
        Color::WHITE,
        Vec2::new(CAPTION_LEFT, HINT_BASELINE - HINT_SIZE),
    );
}

/// World point the label of `spec` hangs above, following its hover lift.
pub fn label_anchor(spec: &BuildingSpec, lift: f32) -> Vec3 {
    spec.base + Vec3::new(0.0, spec.size.y + lift + LABEL_CLEARANCE, 0.0)
}

/// Text origin that centres a label of `extent` horizontally on `anchor`,
/// with its bottom edge at the anchor.
pub fn centered_origin(anchor: Vec2, extent: Vec2) -> Vec2 {
    Vec2::new(anchor.x - extent.x * 0.5, anchor.y - extent.y)
}

fn push_labels(list: &mut DrawList, input: &HudInput<'_>, font: FontId) {
    let label = |list: &mut DrawList, text: &str, world: Vec3, size: f32, color: Color| {
        let Some(anchor) = input.camera.project(world, input.viewport) else { return };
        let extent = input.fonts.measure_text(text, font, size);
        list.push_text(LABEL_Z, text, font, size, color, centered_origin(anchor, extent));
    };

    for id in BuildingId::ALL {
        let spec = id.spec();
        let anchor = label_anchor(spec, input.state.lift(id));
        label(list, spec.label, anchor, BUILDING_LABEL_SIZE, BUILDING_LABEL_COLOR);
    }
    label(list, "Parking", PARKING_LABEL_POSITION, PARKING_LABEL_SIZE, Color::BLACK);
}
