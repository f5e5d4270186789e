//! HUD layout: the three info boxes anchored to the top-right corner and
//! the regions that react to the pointer.

use campus_engine::coords::{Rect, Vec2};

/// A box anchored to the top-right corner of the window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InfoBox {
    /// Distance from the top edge.
    pub top: f32,
    /// Distance from the right edge.
    pub right: f32,
    pub width: f32,
    pub height: f32,
}

impl InfoBox {
    /// Box rectangle in logical pixels for a window `viewport_width` wide.
    pub fn rect(&self, viewport_width: f32) -> Rect {
        Rect::new(viewport_width - self.width - self.right, self.top, self.width, self.height)
    }

    /// Where the label baseline box starts: inset from the box corner.
    pub fn text_origin(&self, viewport_width: f32) -> Vec2 {
        let r = self.rect(viewport_width);
        Vec2::new(r.origin.x + TEXT_INSET_X, r.origin.y + TEXT_INSET_Y)
    }
}

pub const TEXT_INSET_X: f32 = 15.0;
pub const TEXT_INSET_Y: f32 = 7.0;
pub const BOX_TEXT_SIZE: f32 = 14.0;

pub const ROLE_BOX: InfoBox = InfoBox { top: 5.0, right: 10.0, width: 70.0, height: 30.0 };
pub const BUILDING_BOX: InfoBox = InfoBox { top: 40.0, right: 10.0, width: 120.0, height: 30.0 };
pub const STATUS_BOX: InfoBox = InfoBox { top: 70.0, right: 10.0, width: 120.0, height: 30.0 };
pub const STATUS_BOX_HOVERED: InfoBox = InfoBox { width: 125.0, ..STATUS_BOX };

/// Status box grows slightly while hovered.
pub fn status_box(hovered: bool) -> InfoBox {
    if hovered { STATUS_BOX_HOVERED } else { STATUS_BOX }
}

/// Box fill grey. Every box darkens while the role region is hovered.
pub fn box_fill(hovered: bool) -> f32 {
    if hovered { 0.5 } else { 0.95 }
}

// ── hit regions ───────────────────────────────────────────────────────────

const HIT_LEFT_FROM_RIGHT: f32 = 100.0;
const HIT_RIGHT_FROM_RIGHT: f32 = 10.0;

/// Pointer region that toggles the role. Bounds are inclusive.
pub fn role_hit_region(viewport_width: f32) -> Rect {
    hit_region(viewport_width, 0.0, 30.0)
}

/// Pointer region that cycles the status. Bounds are inclusive.
pub fn status_hit_region(viewport_width: f32) -> Rect {
    hit_region(viewport_width, 40.0, 100.0)
}

fn hit_region(viewport_width: f32, y0: f32, y1: f32) -> Rect {
    let x0 = viewport_width - HIT_LEFT_FROM_RIGHT;
    let x1 = viewport_width - HIT_RIGHT_FROM_RIGHT;
    Rect::new(x0, y0, x1 - x0, y1 - y0)
}

/// Which HUD regions are under the pointer.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct HudHover {
    pub role_box: bool,
    pub status_box: bool,
}

impl HudHover {
    pub fn any(&self) -> bool {
        self.role_box || self.status_box
    }
}

pub fn hover_at(cursor: Vec2, viewport_width: f32) -> HudHover {
    HudHover {
        role_box: role_hit_region(viewport_width).contains_closed(cursor),
        status_box: status_hit_region(viewport_width).contains_closed(cursor),
    }
}
