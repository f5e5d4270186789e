//! Screen-space draw stream for the sky backdrop and the HUD.
//!
//! Responsibilities:
//! - store renderer-agnostic rect and text commands
//! - provide deterministic ordering (z-index + insertion order)

mod cmd;
mod list;

pub use cmd::{DrawCmd, RectCmd, TextCmd};
pub use list::{DrawItem, DrawList, ZIndex};
