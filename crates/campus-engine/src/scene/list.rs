use crate::coords::{Rect, Vec2};
use crate::paint::{Color, Paint};
use crate::text::FontId;

use super::{DrawCmd, RectCmd, TextCmd};

/// Z-ordering key. Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

/// A single draw item: z-layer, insertion order and command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub z: ZIndex,
    order: u32,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Items are painted back-to-front by `(z, insertion order)`. The sorted index
/// buffer is reused across frames, so a warmed list does not allocate.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { z, order, cmd });
        self.sorted_dirty = true;
    }

    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, paint: impl Into<Paint>) {
        self.push(z, DrawCmd::Rect(RectCmd { rect, paint: paint.into() }));
    }

    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        self.push(z, DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            size,
            color,
            origin,
        }));
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());
        let items = &self.items;
        self.sorted_indices
            .sort_by_key(|&i| (items[i].z, items[i].order));
        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_list(zs: &[i32]) -> DrawList {
        let mut dl = DrawList::new();
        for (i, z) in zs.iter().enumerate() {
            dl.push_rect(ZIndex(*z), Rect::new(i as f32, 0.0, 1.0, 1.0), Color::WHITE);
        }
        dl
    }

    fn painted_x(dl: &mut DrawList) -> Vec<f32> {
        dl.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Rect(r) => r.rect.origin.x,
                DrawCmd::Text(t) => t.origin.x,
            })
            .collect()
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn paints_back_to_front() {
        let mut dl = rect_list(&[2, 0, 1]);
        assert_eq!(painted_x(&mut dl), [1.0, 2.0, 0.0]);
    }

    #[test]
    fn equal_z_keeps_insertion_order() {
        let mut dl = rect_list(&[0, 0, 0, -1]);
        assert_eq!(painted_x(&mut dl), [3.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn push_after_iteration_resorts() {
        let mut dl = rect_list(&[1]);
        assert_eq!(painted_x(&mut dl), [0.0]);
        dl.push_rect(ZIndex(0), Rect::new(9.0, 0.0, 1.0, 1.0), Color::BLACK);
        assert_eq!(painted_x(&mut dl), [9.0, 0.0]);
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn clear_empties_list() {
        let mut dl = rect_list(&[0, 1]);
        dl.clear();
        assert!(dl.is_empty());
        assert_eq!(dl.iter_in_paint_order().count(), 0);
    }

    #[test]
    fn text_keeps_its_string_and_size() {
        let mut dl = DrawList::new();
        dl.push_text(ZIndex(0), "Day Mode", FontId(0), 18.0, Color::WHITE, Vec2::new(10.0, 10.0));
        let DrawCmd::Text(t) = &dl.items()[0].cmd else { panic!("expected text") };
        assert_eq!(t.size, 18.0);
        assert_eq!(t.text, "Day Mode");
    }
}
