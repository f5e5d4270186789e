//! Screen-space shape renderers.

pub(crate) mod common;

pub mod rect;
pub mod text;

pub use rect::RectRenderer;
pub use text::TextRenderer;
