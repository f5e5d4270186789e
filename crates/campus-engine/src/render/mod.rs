//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams or `mesh` batches and issue GPU
//! commands via wgpu. Each renderer owns its GPU resources (pipelines,
//! buffers) and creates them lazily on first use.
//!
//! Convention:
//! - 2D geometry is in logical pixels (top-left origin, +Y down) and the
//!   vertex shader converts to NDC using a viewport uniform.
//! - 3D geometry is in world units, transformed by a view-projection matrix.

mod ctx;
pub mod mesh;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::{Lighting, MeshRenderer};
