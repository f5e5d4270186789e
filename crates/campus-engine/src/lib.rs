//! Campus engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the campus viewer: window
//! loop, input translation, frame timing, the 2D overlay draw list and the 3D
//! mesh list together with their renderers.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod mesh;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
