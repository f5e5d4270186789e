//! CPU-side 3D geometry.
//!
//! A [`MeshList`] is rebuilt every frame from simple primitives (cuboids,
//! spheres and line strips) in world units and handed to
//! [`MeshRenderer`](crate::render::MeshRenderer). Geometry is split into
//! opaque, translucent and line batches so each can use its own pipeline.

mod list;
mod vertex;

pub use list::{MeshBatch, MeshList};
pub use vertex::{Material, MeshVertex};
