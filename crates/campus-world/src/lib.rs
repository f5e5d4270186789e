//! Campus scene logic.
//!
//! Everything in this crate is independent of the GPU: camera math, ray
//! picking, the building catalog, selection state, HUD layout and the ambient
//! animation state. `campus-app` feeds engine input in and turns the state
//! into draw lists.
//!
//! Conventions:
//! - World space is right-handed, +Y up, ground plane at y = 0.
//! - Screen-space points use the engine's logical pixel coordinates
//!   (`campus_engine::coords::Vec2`, top-left origin, +Y down).

pub mod ambient;
pub mod buildings;
pub mod camera;
pub mod controls;
pub mod hud;
pub mod picking;
pub mod selection;
pub mod sky;

pub use buildings::{BuildingId, BuildingKind, BuildingSpec, BuildingStatus, StatusTable};
pub use camera::{OrbitCamera, PanDirection};
pub use controls::{Action, ControlOutput, Controller};
pub use picking::{Aabb, Ray};
pub use selection::{CampusState, ClickOutcome, HoverSet, Role};
pub use sky::{DayNight, SkyPalette};
