use crate::coords::{Rect, Vec2};

use super::Color;

/// A single gradient stop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient in logical pixel space.
///
/// `start` and `end` live in the same coordinate space as geometry; positions
/// before `start` take the first stop and positions past `end` the last.
/// Renderers interpolate between the first and last stop only.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Top-to-bottom gradient spanning `rect`.
    pub fn vertical(rect: Rect, top: Color, bottom: Color) -> Self {
        let x = rect.origin.x;
        Self::new(
            Vec2::new(x, rect.origin.y),
            Vec2::new(x, rect.origin.y + rect.size.y),
            vec![ColorStop::new(0.0, top), ColorStop::new(1.0, bottom)],
        )
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && self.start != self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_spans_rect_height() {
        let g = LinearGradient::vertical(Rect::new(0.0, 10.0, 50.0, 90.0), Color::WHITE, Color::BLACK);
        assert_eq!(g.start, Vec2::new(0.0, 10.0));
        assert_eq!(g.end, Vec2::new(0.0, 100.0));
        assert!(g.is_valid());
    }

    #[test]
    fn degenerate_axis_is_invalid() {
        let g = LinearGradient::vertical(Rect::new(0.0, 0.0, 50.0, 0.0), Color::WHITE, Color::BLACK);
        assert!(!g.is_valid());
    }
}
