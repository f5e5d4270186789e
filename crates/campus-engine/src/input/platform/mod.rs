//! Window-system backends.

pub mod winit;
