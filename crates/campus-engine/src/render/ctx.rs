use crate::coords::Viewport;
use crate::device::DEPTH_FORMAT;

/// Renderer-facing context (device/queue + formats + viewport).
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub depth_format: wgpu::TextureFormat,
    /// Logical pixels.
    pub viewport: Viewport,
    /// Physical pixels per logical pixel.
    pub scale_factor: f32,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        viewport: Viewport,
        scale_factor: f32,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            depth_format: DEPTH_FORMAT,
            viewport,
            scale_factor,
        }
    }
}

/// Target for drawing (encoder + colour and depth views).
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
    pub depth_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(
        encoder: &'a mut wgpu::CommandEncoder,
        color_view: &'a wgpu::TextureView,
        depth_view: &'a wgpu::TextureView,
    ) -> Self {
        Self {
            encoder,
            color_view,
            depth_view,
        }
    }

    /// Colour attachment that keeps what earlier passes drew.
    pub(crate) fn color_load(&self) -> wgpu::RenderPassColorAttachment<'a> {
        wgpu::RenderPassColorAttachment {
            view: self.color_view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Load,
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Only type-checks while the attachment borrows the colour view rather
    /// than the whole target, leaving the encoder free for the pass.
    fn begin_pass_with_loaded_color(target: &mut RenderTarget<'_>) {
        let color = target.color_load();
        let _rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("load check"),
            color_attachments: &[Some(color)],
            ..Default::default()
        });
    }

    #[test]
    fn color_attachment_leaves_encoder_free() {
        let pass: fn(&mut RenderTarget<'_>) = begin_pass_with_loaded_color;
        let _ = pass;
    }
}
