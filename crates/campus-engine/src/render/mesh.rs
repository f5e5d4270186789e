use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::mesh::{MeshBatch, MeshList, MeshVertex};
use crate::render::{RenderCtx, RenderTarget};

use super::shapes::common::uniform_min_binding_size;

/// Single point light plus a flat ambient term, in linear RGB.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Lighting {
    /// World-space light position.
    pub position: Vec3,
    pub diffuse: [f32; 3],
    pub ambient: [f32; 3],
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 200.0, 0.0),
            diffuse: [1.0; 3],
            ambient: [0.3; 3],
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct MeshUniform {
    view_proj: [[f32; 4]; 4],
    light_pos: [f32; 4],
    light_diffuse: [f32; 4],
    ambient: [f32; 4],
}

impl MeshUniform {
    fn new(view_proj: Mat4, lighting: &Lighting) -> Self {
        let [dr, dg, db] = lighting.diffuse;
        let [ar, ag, ab] = lighting.ambient;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            light_pos: lighting.position.extend(1.0).to_array(),
            light_diffuse: [dr, dg, db, 0.0],
            ambient: [ar, ag, ab, 0.0],
        }
    }
}

/// GPU copy of one [`MeshBatch`], grown on demand.
#[derive(Default)]
struct GpuBatch {
    vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,
    ibo: Option<wgpu::Buffer>,
    index_capacity: usize,
    index_count: u32,
}

impl GpuBatch {
    fn upload(&mut self, ctx: &RenderCtx<'_>, label: &str, batch: &MeshBatch) {
        self.index_count = 0;
        if batch.is_empty() {
            return;
        }

        if batch.vertices.len() > self.vertex_capacity || self.vbo.is_none() {
            let cap = batch.vertices.len().next_power_of_two().max(256);
            self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(&format!("campus {label} vbo")),
                size: (cap * std::mem::size_of::<MeshVertex>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vertex_capacity = cap;
        }

        if batch.indices.len() > self.index_capacity || self.ibo.is_none() {
            let cap = batch.indices.len().next_power_of_two().max(256);
            self.ibo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(&format!("campus {label} ibo")),
                size: (cap * std::mem::size_of::<u32>()) as u64,
                usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.index_capacity = cap;
        }

        let (Some(vbo), Some(ibo)) = (self.vbo.as_ref(), self.ibo.as_ref()) else { return };
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&batch.vertices));
        ctx.queue.write_buffer(ibo, 0, bytemuck::cast_slice(&batch.indices));
        self.index_count = batch.indices.len() as u32;
    }

    fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, pipeline: &wgpu::RenderPipeline) {
        if self.index_count == 0 {
            return;
        }
        let (Some(vbo), Some(ibo)) = (self.vbo.as_ref(), self.ibo.as_ref()) else { return };
        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

struct Pipelines {
    format: wgpu::TextureFormat,
    opaque: wgpu::RenderPipeline,
    translucent: wgpu::RenderPipeline,
    lines: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
}

/// Depth-tested renderer for a [`MeshList`].
///
/// Opaque triangles draw first, then lines, then translucent triangles with
/// depth writes off so they never hide what lies behind them.
#[derive(Default)]
pub struct MeshRenderer {
    pipelines: Option<Pipelines>,
    uniform: Option<(wgpu::Buffer, wgpu::BindGroup)>,

    opaque: GpuBatch,
    translucent: GpuBatch,
    lines: GpuBatch,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        meshes: &MeshList,
        view_proj: Mat4,
        lighting: &Lighting,
    ) {
        if meshes.is_empty() {
            return;
        }

        self.ensure_pipelines(ctx);
        self.ensure_uniform(ctx);

        self.opaque.upload(ctx, "mesh opaque", meshes.opaque());
        self.translucent.upload(ctx, "mesh translucent", meshes.translucent());
        self.lines.upload(ctx, "mesh lines", meshes.lines());

        let Some(pipelines) = self.pipelines.as_ref() else { return };
        let Some((ubo, bind_group)) = self.uniform.as_ref() else { return };
        ctx.queue
            .write_buffer(ubo, 0, bytemuck::bytes_of(&MeshUniform::new(view_proj, lighting)));

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("campus mesh pass"),
            color_attachments: &[Some(target.color_load())],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_bind_group(0, bind_group, &[]);
        self.opaque.draw(&mut rpass, &pipelines.opaque);
        self.lines.draw(&mut rpass, &pipelines.lines);
        self.translucent.draw(&mut rpass, &pipelines.translucent);
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipelines.as_ref().is_some_and(|p| p.format == ctx.surface_format) {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("campus mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/mesh.wgsl").into()),
        });

        let bind_group_layout = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("campus mesh bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: uniform_min_binding_size::<MeshUniform>(),
                },
                count: None,
            }],
        });

        let layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("campus mesh pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let build = |label: &str,
                     topology: wgpu::PrimitiveTopology,
                     blend: wgpu::BlendState,
                     depth_write_enabled: bool| {
            ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[MeshVertex::layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(blend),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    // Transforms may mirror geometry.
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: ctx.depth_format,
                    depth_write_enabled,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        };

        let opaque = build(
            "campus mesh opaque pipeline",
            wgpu::PrimitiveTopology::TriangleList,
            wgpu::BlendState::REPLACE,
            true,
        );
        let translucent = build(
            "campus mesh translucent pipeline",
            wgpu::PrimitiveTopology::TriangleList,
            wgpu::BlendState::ALPHA_BLENDING,
            false,
        );
        let lines = build(
            "campus mesh line pipeline",
            wgpu::PrimitiveTopology::LineList,
            wgpu::BlendState::ALPHA_BLENDING,
            true,
        );

        log::debug!("mesh pipelines created for {:?}", ctx.surface_format);
        self.pipelines = Some(Pipelines {
            format: ctx.surface_format,
            opaque,
            translucent,
            lines,
            bind_group_layout,
        });
        self.uniform = None;
    }

    fn ensure_uniform(&mut self, ctx: &RenderCtx<'_>) {
        if self.uniform.is_some() {
            return;
        }
        let Some(pipelines) = self.pipelines.as_ref() else { return };

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("campus mesh ubo"),
            size: std::mem::size_of::<MeshUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("campus mesh bind group"),
            layout: &pipelines.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        self.uniform = Some((ubo, bind_group));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_packs_light_terms() {
        let lighting = Lighting {
            position: Vec3::new(1.0, 2.0, 3.0),
            diffuse: [0.5, 0.4, 0.3],
            ambient: [0.2; 3],
        };
        let u = MeshUniform::new(Mat4::IDENTITY, &lighting);
        assert_eq!(u.light_pos, [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(u.light_diffuse, [0.5, 0.4, 0.3, 0.0]);
        assert_eq!(u.ambient, [0.2, 0.2, 0.2, 0.0]);
        assert_eq!(u.view_proj[3], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn uniform_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<MeshUniform>() % 16, 0);
    }
}
